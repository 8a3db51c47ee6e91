//! Dataset configuration loaded from YAML.
//!
//! ```yaml
//! root: ~/data
//! num_shots: 16
//! seed: 1
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::DatasetError;
use crate::fewshot::FewShotOptions;

/// Settings needed to build the ImageNet dataset.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetConfig {
    /// Directory containing the `imagenet/` dataset folder. `~` is expanded.
    pub root: PathBuf,
    /// Training items kept per class; 0 uses the full split.
    pub num_shots: usize,
    /// Sample with replacement for classes smaller than `num_shots`.
    pub repeat: bool,
    /// Seed for few-shot sampling.
    pub seed: Option<u64>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            num_shots: 0,
            repeat: false,
            seed: None,
        }
    }
}

impl DatasetConfig {
    /// Load a config from a YAML file; missing keys take their defaults.
    pub fn from_yaml_file(path: &Path) -> Result<Self, DatasetError> {
        let text = fs::read_to_string(path).map_err(|source| DatasetError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&text).map_err(|source| DatasetError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn fewshot_options(&self) -> FewShotOptions {
        FewShotOptions {
            num_shots: self.num_shots,
            repeat: self.repeat,
            seed: self.seed,
        }
    }
}
