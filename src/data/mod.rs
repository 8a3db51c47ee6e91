//! Labelled image records and the train/val/test container.
//!
//! A [`Datum`] is one image with its split-local integer label and the
//! human-readable class name. A [`DatasetBase`] bundles the three item lists a
//! training run consumes and derives class metadata from the training list.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use crate::error::DatasetError;

/// A single labelled image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Datum {
    impath: PathBuf,
    label: usize,
    classname: String,
    domain: usize,
}

impl Datum {
    /// Creates a record for an existing image file in domain 0.
    pub fn new(
        impath: impl Into<PathBuf>,
        label: usize,
        classname: impl Into<String>,
    ) -> Result<Self, DatasetError> {
        Self::with_domain(impath, label, classname, 0)
    }

    /// Creates a record with an explicit domain index.
    pub fn with_domain(
        impath: impl Into<PathBuf>,
        label: usize,
        classname: impl Into<String>,
        domain: usize,
    ) -> Result<Self, DatasetError> {
        let impath = impath.into();
        if !impath.is_file() {
            return Err(DatasetError::ImageNotFound { path: impath });
        }

        Ok(Self {
            impath,
            label,
            classname: classname.into(),
            domain,
        })
    }

    pub fn impath(&self) -> &Path {
        &self.impath
    }

    pub fn label(&self) -> usize {
        self.label
    }

    pub fn classname(&self) -> &str {
        &self.classname
    }

    pub fn domain(&self) -> usize {
        self.domain
    }
}

/// Train, validation and test item lists.
///
/// Lists are shared slices so that two splits can be bound to the same items
/// without copying them.
#[derive(Clone, Debug)]
pub struct DatasetBase {
    train_x: Arc<[Datum]>,
    val: Arc<[Datum]>,
    test: Arc<[Datum]>,
    num_classes: usize,
    lab2cname: BTreeMap<usize, String>,
}

impl DatasetBase {
    /// Builds the container; class metadata is derived from `train_x`.
    pub fn new(train_x: Arc<[Datum]>, val: Arc<[Datum]>, test: Arc<[Datum]>) -> Self {
        let num_classes = get_num_classes(&train_x);
        let lab2cname = get_lab2cname(&train_x);
        Self {
            train_x,
            val,
            test,
            num_classes,
            lab2cname,
        }
    }

    pub fn train_x(&self) -> &[Datum] {
        &self.train_x
    }

    pub fn val(&self) -> &[Datum] {
        &self.val
    }

    pub fn test(&self) -> &[Datum] {
        &self.test
    }

    /// Returns true when `val` and `test` are the same underlying list.
    pub fn test_shares_val(&self) -> bool {
        Arc::ptr_eq(&self.val, &self.test)
    }

    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    pub fn lab2cname(&self) -> &BTreeMap<usize, String> {
        &self.lab2cname
    }

    /// Class names ordered by label.
    pub fn classnames(&self) -> Vec<&str> {
        self.lab2cname.values().map(String::as_str).collect()
    }
}

/// Number of classes implied by the largest label (0 for an empty list).
pub fn get_num_classes(items: &[Datum]) -> usize {
    items.iter().map(|item| item.label + 1).max().unwrap_or(0)
}

/// Label to class-name mapping observed in `items`.
pub fn get_lab2cname(items: &[Datum]) -> BTreeMap<usize, String> {
    let mut mapping = BTreeMap::new();
    for item in items {
        mapping
            .entry(item.label)
            .or_insert_with(|| item.classname.clone());
    }
    mapping
}
