//! Dataset inspection and statistics.
//!
//! Summarises an assembled dataset: split sizes and how the training items
//! are distributed over classes, which is the quickest way to confirm that a
//! few-shot run really holds K items per class.

mod report;

pub use report::{ClassCount, ClassesSection, InspectReport, SplitsSection};

use std::collections::BTreeMap;

use crate::data::DatasetBase;

/// Options for dataset inspection.
#[derive(Clone, Debug)]
pub struct InspectOptions {
    /// Number of top classes to show in the histogram.
    pub top_classes: usize,
    /// Width of histogram bars (in characters).
    pub bar_width: usize,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            top_classes: 10,
            bar_width: 16,
        }
    }
}

/// Inspect a dataset and produce a report.
pub fn inspect_dataset(dataset: &DatasetBase, opts: &InspectOptions) -> InspectReport {
    let splits = SplitsSection {
        train: dataset.train_x().len(),
        val: dataset.val().len(),
        test: dataset.test().len(),
        test_is_val: dataset.test_shares_val(),
    };

    InspectReport {
        splits,
        classes: compute_classes(dataset, opts.top_classes),
        bar_width: opts.bar_width,
    }
}

fn compute_classes(dataset: &DatasetBase, top_n: usize) -> ClassesSection {
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for item in dataset.train_x() {
        *counts.entry(item.label()).or_insert(0) += 1;
    }

    let min_per_class = counts.values().copied().min();
    let max_per_class = counts.values().copied().max();

    // Count descending, then label ascending for deterministic output
    let mut sorted: Vec<(usize, usize)> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let other_count: usize = sorted.iter().skip(top_n).map(|(_, count)| count).sum();
    let entries: Vec<ClassCount> = sorted
        .into_iter()
        .take(top_n)
        .map(|(label, count)| ClassCount {
            label,
            classname: dataset
                .lab2cname()
                .get(&label)
                .cloned()
                .unwrap_or_default(),
            count,
        })
        .collect();

    ClassesSection {
        num_classes: dataset.num_classes(),
        top_n,
        entries,
        other_count,
        min_per_class,
        max_per_class,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Datum;
    use std::sync::Arc;

    fn make_dataset(dir: &std::path::Path) -> DatasetBase {
        let mut train = Vec::new();
        for (label, count) in [(0usize, 2usize), (1, 3), (2, 1)] {
            for i in 0..count {
                let path = dir.join(format!("{label}_{i}.jpg"));
                std::fs::write(&path, b"").expect("write image");
                train.push(Datum::new(path, label, format!("class {label}")).expect("datum"));
            }
        }
        let val: Arc<[Datum]> = train[..2].to_vec().into();
        DatasetBase::new(train.into(), Arc::clone(&val), val)
    }

    #[test]
    fn counts_splits_and_classes() {
        let temp = tempfile::tempdir().expect("tempdir");
        let dataset = make_dataset(temp.path());

        let report = inspect_dataset(&dataset, &InspectOptions::default());
        assert_eq!(report.splits.train, 6);
        assert_eq!(report.splits.val, 2);
        assert_eq!(report.splits.test, 2);
        assert!(report.splits.test_is_val);
        assert_eq!(report.classes.num_classes, 3);
        assert_eq!(report.classes.min_per_class, Some(1));
        assert_eq!(report.classes.max_per_class, Some(3));
        assert_eq!(report.classes.entries[0].label, 1);
        assert_eq!(report.classes.entries[0].classname, "class 1");
    }

    #[test]
    fn top_n_folds_the_rest_into_other() {
        let temp = tempfile::tempdir().expect("tempdir");
        let dataset = make_dataset(temp.path());

        let opts = InspectOptions {
            top_classes: 1,
            ..Default::default()
        };
        let report = inspect_dataset(&dataset, &opts);
        assert_eq!(report.classes.entries.len(), 1);
        assert_eq!(report.classes.other_count, 3);

        let text = report.to_string();
        assert!(text.contains("Classes (top 1 of 3)"));
        assert!(text.contains("(other)"));
    }
}
