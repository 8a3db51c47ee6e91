//! ImageNet folder-layout reader.
//!
//! Expected layout under the configured root:
//!
//! ```text
//! <root>/imagenet/classnames.txt
//! <root>/imagenet/images/train/<folder_code>/<image files>
//! <root>/imagenet/images/val/<folder_code>/<image files>
//! ```
//!
//! `classnames.txt` maps each folder code (e.g. `n01440764`) to a display name
//! (e.g. `tench`). Labels are assigned per split from the sorted folder order,
//! so they are split-local; display names always come from the shared mapping.

mod classnames;

pub use classnames::{parse_classnames, read_classnames, ClassNameMap};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::DatasetConfig;
use crate::data::{DatasetBase, Datum};
use crate::error::DatasetError;
use crate::fewshot::generate_fewshot_dataset;
use crate::listing::{entry_name, listdir_nohidden};

/// Name of the dataset folder under the root.
pub const DATASET_DIR: &str = "imagenet";

/// Non-class entries that live next to the class folders in some copies of
/// ImageNet.
pub const TO_BE_IGNORED: [&str; 3] = ["new_val_prep.sh", "train1.txt", "train.txt"];

/// Paths of an ImageNet dataset on disk.
#[derive(Clone, Debug)]
pub struct ImageNet {
    dataset_dir: PathBuf,
    image_dir: PathBuf,
}

impl ImageNet {
    /// Resolve the dataset paths for `root`, expanding `~` and making it absolute.
    pub fn at_root(root: &Path) -> Result<Self, DatasetError> {
        let root = std::path::absolute(expand_user(root))?;
        let dataset_dir = root.join(DATASET_DIR);
        let image_dir = dataset_dir.join("images");
        Ok(Self {
            dataset_dir,
            image_dir,
        })
    }

    /// Build the dataset described by `config`.
    ///
    /// Train is few-shot subsampled; val is also bound as test.
    pub fn new(config: &DatasetConfig) -> Result<DatasetBase, DatasetError> {
        Self::at_root(&config.root)?.load(config)
    }

    pub fn dataset_dir(&self) -> &Path {
        &self.dataset_dir
    }

    pub fn image_dir(&self) -> &Path {
        &self.image_dir
    }

    pub fn classnames_path(&self) -> PathBuf {
        self.dataset_dir.join("classnames.txt")
    }

    /// Read both splits and assemble the train/val/test container.
    pub fn load(&self, config: &DatasetConfig) -> Result<DatasetBase, DatasetError> {
        let classnames = read_classnames(&self.classnames_path())?;
        tracing::info!(
            classes = classnames.len(),
            dataset_dir = %self.dataset_dir.display(),
            "loaded class names"
        );

        let train = self.read_data(&classnames, "train")?;
        let test = self.read_data(&classnames, "val")?;

        let train = generate_fewshot_dataset(&train, &config.fewshot_options())?;
        tracing::info!(train = train.len(), val = test.len(), "assembled dataset");

        let test: Arc<[Datum]> = test.into();
        Ok(DatasetBase::new(train.into(), Arc::clone(&test), test))
    }

    /// Enumerate every image of `split` with its split-local label.
    pub fn read_data(
        &self,
        classnames: &ClassNameMap,
        split: &str,
    ) -> Result<Vec<Datum>, DatasetError> {
        read_split(&self.image_dir, classnames, split)
    }
}

/// Enumerate `<image_dir>/<split>` into labelled items.
///
/// Folders are visited in sorted order and numbered from 0, skipping
/// [`TO_BE_IGNORED`]. Files within a folder are also sorted. A folder without
/// an entry in `classnames` is an error.
pub fn read_split(
    image_dir: &Path,
    classnames: &ClassNameMap,
    split: &str,
) -> Result<Vec<Datum>, DatasetError> {
    let split_dir = image_dir.join(split);
    let folders: Vec<PathBuf> = listdir_nohidden(&split_dir, true)?
        .into_iter()
        .filter(|path| !TO_BE_IGNORED.contains(&entry_name(path).as_str()))
        .collect();

    let mut items = Vec::new();
    for (label, folder) in folders.iter().enumerate() {
        let code = entry_name(folder);
        let classname = classnames
            .get(&code)
            .ok_or_else(|| DatasetError::UnknownClassFolder {
                split: split.to_string(),
                folder: code.clone(),
            })?;

        for impath in listdir_nohidden(folder, true)? {
            items.push(Datum::new(impath, label, classname)?);
        }
    }

    tracing::debug!(
        split,
        classes = folders.len(),
        items = items.len(),
        "read split"
    );
    Ok(items)
}

fn expand_user(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(rest),
        None => path.to_path_buf(),
    }
}
