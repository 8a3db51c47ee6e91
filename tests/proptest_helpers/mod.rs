#![allow(dead_code)]

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// WordNet-style folder code, e.g. `n01440764`.
pub fn arb_folder_code() -> BoxedStrategy<String> {
    (0u32..100_000_000)
        .prop_map(|n| format!("n{:08}", n))
        .boxed()
}

/// A display name as 1..5 non-empty words.
pub fn arb_name_words() -> BoxedStrategy<Vec<String>> {
    prop::collection::vec("[A-Za-z][A-Za-z'-]{0,9}", 1..5).boxed()
}

/// Distinct folder codes paired with display-name words, in file order.
pub fn arb_classname_entries(
    min: usize,
    max: usize,
) -> BoxedStrategy<Vec<(String, Vec<String>)>> {
    prop::collection::btree_map(arb_folder_code(), arb_name_words(), min..=max)
        .prop_map(|map| map.into_iter().collect())
        .prop_shuffle()
        .boxed()
}
