use std::path::Path;

use imagenet_fewshot::imagenet::parse_classnames;
use proptest::prelude::*;

mod proptest_helpers;

proptest! {
    #![proptest_config(proptest_helpers::proptest_config())]

    #[test]
    fn n_lines_give_n_entries_in_order(
        entries in proptest_helpers::arb_classname_entries(1, 40)
    ) {
        let mut text = String::new();
        for (code, words) in &entries {
            text.push_str(code);
            text.push(' ');
            text.push_str(&words.join(" "));
            text.push('\n');
        }
        text.push('\n');

        let classnames = parse_classnames(Path::new("classnames.txt"), &text)
            .expect("parse classnames");

        prop_assert_eq!(classnames.len(), entries.len());
        for ((code, name), (expected_code, words)) in classnames.iter().zip(&entries) {
            prop_assert_eq!(code, expected_code.as_str());
            prop_assert_eq!(name, words.join(" "));
        }
    }
}
