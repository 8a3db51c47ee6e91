#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// One class folder of a synthetic dataset.
pub struct ClassSpec<'a> {
    pub code: &'a str,
    pub name: &'a str,
    pub train: usize,
    pub val: usize,
}

pub fn class<'a>(code: &'a str, name: &'a str, train: usize, val: usize) -> ClassSpec<'a> {
    ClassSpec {
        code,
        name,
        train,
        val,
    }
}

pub fn write_file(path: &Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, contents).expect("write file");
}

/// Build `<root>/imagenet/{classnames.txt,images/{train,val}/...}`.
///
/// Class folders are created in the given order, so callers can check that
/// labels do not depend on creation order.
pub fn write_imagenet(root: &Path, classes: &[ClassSpec<'_>]) {
    let dataset_dir = root.join("imagenet");

    let classnames: String = classes
        .iter()
        .map(|c| format!("{} {}\n", c.code, c.name))
        .collect();
    write_file(&dataset_dir.join("classnames.txt"), classnames.as_bytes());

    for c in classes {
        for (split, count) in [("train", c.train), ("val", c.val)] {
            let folder = dataset_dir.join("images").join(split).join(c.code);
            fs::create_dir_all(&folder).expect("create class folder");
            for i in 0..count {
                write_file(
                    &folder.join(format!("{}_{:04}.JPEG", c.code, i)),
                    b"\xff\xd8\xff",
                );
            }
        }
    }
}
