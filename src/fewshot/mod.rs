//! Few-shot subsampling of labelled item lists.

use rand::seq::SliceRandom;
use rand::{rngs::StdRng, Rng, RngExt, SeedableRng};
use std::collections::HashMap;

use crate::data::Datum;
use crate::error::DatasetError;

/// Few-shot sampling options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FewShotOptions {
    /// Items to keep per label; 0 keeps everything.
    pub num_shots: usize,
    /// Sample with replacement when a label has fewer than `num_shots` items.
    pub repeat: bool,
    pub seed: Option<u64>,
}

/// Validate few-shot options before running.
pub fn validate_fewshot_options(opts: &FewShotOptions) -> Result<(), DatasetError> {
    if opts.repeat && opts.num_shots == 0 {
        return Err(DatasetError::InvalidFewShotParams {
            message: "--repeat requires a shot count greater than 0".to_string(),
        });
    }
    Ok(())
}

/// Reduce `items` to at most `num_shots` items per label.
///
/// Labels keep their first-appearance order and sampled items keep their
/// relative order, so a seeded run over a deterministic listing is
/// reproducible.
pub fn generate_fewshot_dataset(
    items: &[Datum],
    opts: &FewShotOptions,
) -> Result<Vec<Datum>, DatasetError> {
    validate_fewshot_options(opts)?;

    if opts.num_shots == 0 {
        return Ok(items.to_vec());
    }

    tracing::info!(num_shots = opts.num_shots, "creating few-shot dataset");

    let groups = split_dataset_by_label(items);
    let sampled = if let Some(seed) = opts.seed {
        let mut rng = StdRng::seed_from_u64(seed);
        sample_groups(&groups, opts, &mut rng)
    } else {
        let mut rng = rand::rng();
        sample_groups(&groups, opts, &mut rng)
    };

    Ok(sampled)
}

/// Group items by label, in order of each label's first appearance.
pub fn split_dataset_by_label(items: &[Datum]) -> Vec<(usize, Vec<&Datum>)> {
    let mut index_by_label: HashMap<usize, usize> = HashMap::new();
    let mut groups: Vec<(usize, Vec<&Datum>)> = Vec::new();

    for item in items {
        let idx = *index_by_label.entry(item.label()).or_insert_with(|| {
            groups.push((item.label(), Vec::new()));
            groups.len() - 1
        });
        groups[idx].1.push(item);
    }

    groups
}

fn sample_groups<R: Rng + ?Sized>(
    groups: &[(usize, Vec<&Datum>)],
    opts: &FewShotOptions,
    rng: &mut R,
) -> Vec<Datum> {
    let mut output = Vec::new();

    for (_, group) in groups {
        if group.len() >= opts.num_shots {
            let mut picks: Vec<usize> = (0..group.len()).collect();
            picks.shuffle(rng);
            picks.truncate(opts.num_shots);
            picks.sort_unstable();
            output.extend(picks.into_iter().map(|i| group[i].clone()));
        } else if opts.repeat {
            output.extend(
                (0..opts.num_shots).map(|_| group[rng.random_range(0..group.len())].clone()),
            );
        } else {
            output.extend(group.iter().map(|&item| item.clone()));
        }
    }

    output
}
