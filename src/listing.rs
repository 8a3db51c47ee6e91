//! Hidden-file-aware directory listing.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::DatasetError;

/// List the direct children of `dir`, skipping entries whose name starts with `.`.
///
/// Files and directories are both returned. With `sort` the entries come back
/// ordered by file name; otherwise in whatever order the file system yields.
/// `dir` must be a directory; a regular file is an error rather than an empty
/// listing.
pub fn listdir_nohidden(dir: &Path, sort: bool) -> Result<Vec<PathBuf>, DatasetError> {
    if let Ok(meta) = fs::metadata(dir) {
        if !meta.is_dir() {
            return Err(DatasetError::NotADirectory {
                path: dir.to_path_buf(),
            });
        }
    }

    let mut walker = WalkDir::new(dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1);
    if sort {
        walker = walker.sort_by_file_name();
    }

    let mut entries = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| DatasetError::ListDir {
            path: dir.to_path_buf(),
            source,
        })?;
        if is_hidden(entry.file_name()) {
            continue;
        }
        entries.push(entry.into_path());
    }

    Ok(entries)
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

/// File name of a listed entry as UTF-8 text (lossy).
pub fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_hidden_entries() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join(".DS_Store"), b"").expect("write hidden");
        fs::create_dir(temp.path().join(".cache")).expect("create hidden dir");
        fs::write(temp.path().join("a.jpg"), b"").expect("write file");

        let entries = listdir_nohidden(temp.path(), true).expect("list");
        let names: Vec<String> = entries.iter().map(|p| entry_name(p)).collect();
        assert_eq!(names, vec!["a.jpg"]);
    }

    #[test]
    fn sorted_listing_is_by_name() {
        let temp = tempfile::tempdir().expect("tempdir");
        for name in ["n003", "n001", "n002"] {
            fs::create_dir(temp.path().join(name)).expect("create dir");
        }
        fs::write(temp.path().join("m.txt"), b"").expect("write file");

        let entries = listdir_nohidden(temp.path(), true).expect("list");
        let names: Vec<String> = entries.iter().map(|p| entry_name(p)).collect();
        assert_eq!(names, vec!["m.txt", "n001", "n002", "n003"]);
    }

    #[test]
    fn regular_file_is_not_listable() {
        let temp = tempfile::tempdir().expect("tempdir");
        let file = temp.path().join("n001");
        fs::write(&file, b"").expect("write file");

        let err = listdir_nohidden(&file, true).expect_err("should fail");
        match err {
            DatasetError::NotADirectory { path } => assert_eq!(path, file),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_directory_is_an_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let missing = temp.path().join("nope");

        let err = listdir_nohidden(&missing, true).expect_err("should fail");
        match err {
            DatasetError::ListDir { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
