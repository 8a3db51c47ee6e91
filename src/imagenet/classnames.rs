//! `classnames.txt` loader.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::DatasetError;

/// Folder code to display name, in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassNameMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl ClassNameMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a mapping. A repeated code keeps its original position and
    /// takes the new name.
    pub fn insert(&mut self, code: impl Into<String>, name: impl Into<String>) {
        let code = code.into();
        let name = name.into();
        match self.index.get(&code) {
            Some(&idx) => self.entries[idx].1 = name,
            None => {
                self.index.insert(code.clone(), self.entries.len());
                self.entries.push((code, name));
            }
        }
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.index
            .get(code)
            .map(|&idx| self.entries[idx].1.as_str())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(code, name)` pairs in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(code, name)| (code.as_str(), name.as_str()))
    }
}

/// Read a `classnames.txt` file.
pub fn read_classnames(path: &Path) -> Result<ClassNameMap, DatasetError> {
    let text = fs::read_to_string(path).map_err(|source| DatasetError::ClassNamesRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_classnames(path, &text)
}

/// Parse `<folder_code> <display name>` lines.
///
/// `path` is only used for error messages. Blank lines are skipped; a line
/// with a code but no name is rejected.
pub fn parse_classnames(path: &Path, text: &str) -> Result<ClassNameMap, DatasetError> {
    let mut classnames = ClassNameMap::new();

    for (line_idx, line) in text.lines().enumerate() {
        let mut tokens = line.split_whitespace();
        let Some(code) = tokens.next() else {
            continue;
        };

        let name = tokens.collect::<Vec<_>>().join(" ");
        if name.is_empty() {
            return Err(DatasetError::ClassNamesParse {
                path: path.to_path_buf(),
                line: line_idx + 1,
                message: format!("folder code '{}' has no class name", code),
            });
        }

        if classnames.contains(code) {
            tracing::warn!(
                code,
                line = line_idx + 1,
                "duplicate folder code in class names; keeping the later name"
            );
        }
        classnames.insert(code, name);
    }

    Ok(classnames)
}
