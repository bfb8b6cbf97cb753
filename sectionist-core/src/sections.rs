//! The grouping pipeline: rank the index, classify items, order sections.
//!
//! ```
//! use sectionist_core::{compute_sections, Item};
//!
//! let items = vec![Item::new("bob"), Item::new("Alice"), Item::new("123")];
//! let sections = compute_sections(items, &["a", "b"], false);
//!
//! let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
//! assert_eq!(titles, ["A", "B", "#"]);
//! ```

use crate::classification::classify;
use crate::models::{Labeled, Section};
use crate::ranking::build_letter_rank;
use crate::sorting::finalize;

/// Group items into sections ordered by `char_index`.
///
/// Each item lands in exactly one section. Items whose first character is
/// not in the index go to the `#` section, placed first when
/// `uncategorized_at_top` is set and last otherwise. Section `index` fields
/// run 0..n in output order.
pub fn compute_sections<T, I, S>(
    items: I,
    char_index: &[S],
    uncategorized_at_top: bool,
) -> Vec<Section<T>>
where
    T: Labeled,
    I: IntoIterator<Item = T>,
    S: AsRef<str>,
{
    let rank = build_letter_rank(char_index);
    let buckets = classify(items, &rank);

    tracing::debug!(
        index_len = rank.len(),
        buckets = buckets.len(),
        uncategorized_at_top,
        "classified items"
    );

    finalize(buckets, &rank, uncategorized_at_top)
}

/// Section titles in display order, for a scroll rail
pub fn rail<T>(sections: &[Section<T>]) -> Vec<&str> {
    sections.iter().map(|s| s.title.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char_index;
    use crate::classification::{section_key, UNCATEGORIZED};
    use crate::models::Item;
    use crate::ranking::build_letter_rank;
    use crate::sorting::compare_labels;
    use proptest::prelude::*;
    use serde_json::json;
    use std::cmp::Ordering;

    #[test]
    fn test_latin_scenario() {
        let items = vec![Item::new("bob"), Item::new("Alice"), Item::new("123")];

        let sections = compute_sections(items, &["a", "b"], false);

        let expected = json!([
            {"title": "A", "data": [{"value": "Alice"}], "index": 0},
            {"title": "B", "data": [{"value": "bob"}], "index": 1},
            {"title": "#", "data": [{"value": "123"}], "index": 2}
        ]);
        assert_eq!(serde_json::to_value(&sections).unwrap(), expected);
    }

    #[test]
    fn test_tensed_hangul_grouped_under_plain_consonant() {
        let items = vec![Item::new("꽃집"), Item::new("김밥"), Item::new("나무")];

        let sections = compute_sections(items, &char_index::hangul(), false);

        assert_eq!(rail(&sections), vec!["ㄱ", "ㄴ"]);
        let giyeok: Vec<&str> = sections[0].data.iter().map(|i| i.value.as_str()).collect();
        assert_eq!(giyeok, vec!["김밥", "꽃집"]);
    }

    #[test]
    fn test_decomposed_hangul_goes_to_catch_all() {
        let sections = compute_sections(vec!["\u{1100}\u{1161}"], &["ㄱ"], false);
        assert_eq!(rail(&sections), vec!["#"]);
    }

    #[test]
    fn test_catch_all_items_sorted_by_code_unit() {
        let sections = compute_sections(vec!["\u{FF21}", "\u{1F600}"], &["a"], false);
        assert_eq!(sections[0].data, vec!["\u{1F600}", "\u{FF21}"]);
    }

    #[test]
    fn test_mixed_latin_and_hangul() {
        let items = vec![
            Item::new("홍길동"),
            Item::new("alice"),
            Item::new("Zed"),
            Item::new("박지성"),
            Item::new("!bang"),
        ];

        let sections = compute_sections(items, &char_index::latin_hangul(), true);

        assert_eq!(rail(&sections), vec!["#", "A", "Z", "ㅂ", "ㅎ"]);
    }

    #[test]
    fn test_empty_index_gives_single_catch_all() {
        let items = vec![Item::new("alice"), Item::new("bob")];

        let sections = compute_sections(items, &[] as &[&str], false);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, UNCATEGORIZED);
        assert_eq!(sections[0].data.len(), 2);
        assert_eq!(sections[0].index, 0);
    }

    #[test]
    fn test_empty_input_gives_no_sections() {
        let sections = compute_sections(Vec::<Item>::new(), &char_index::latin(), false);
        assert!(sections.is_empty());
    }

    #[test]
    fn test_payload_passes_through() {
        let items = vec![Item::new("Alice").with_field("phone", json!("555-0100"))];

        let sections = compute_sections(items, &["a"], false);

        assert_eq!(sections[0].data[0].extra.get("phone"), Some(&json!("555-0100")));
    }

    #[test]
    fn test_plain_strings_can_be_grouped() {
        let names = ["carol", "Bob", "amy"];

        let sections = compute_sections(names.iter().copied(), &char_index::latin(), false);

        assert_eq!(rail(&sections), vec!["A", "B", "C"]);
        assert_eq!(sections[1].data, vec!["Bob"]);
    }

    #[test]
    fn test_uncategorized_only() {
        let sections = compute_sections(vec!["1", "2"], &["a"], true);
        assert_eq!(rail(&sections), vec!["#"]);
    }

    fn label_strategy() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9가-힣ㄱ-ㅎ#! ]{0,6}"
    }

    fn index_strategy() -> impl Strategy<Value = Vec<String>> {
        prop::sample::subsequence(char_index::latin_hangul(), 0..=40).prop_shuffle()
    }

    proptest! {
        /// Property: every input item appears exactly once in the output.
        #[test]
        fn sections_partition_items(
            labels in prop::collection::vec(label_strategy(), 0..40),
            index in index_strategy(),
            at_top in any::<bool>()
        ) {
            let sections = compute_sections(labels.clone(), &index, at_top);

            let mut output: Vec<String> = sections.into_iter().flat_map(|s| s.data).collect();
            let mut input = labels;
            output.sort();
            input.sort();
            prop_assert_eq!(output, input);
        }

        /// Property: section indexes are 0..n in array order.
        #[test]
        fn indexes_are_contiguous(
            labels in prop::collection::vec(label_strategy(), 0..40),
            index in index_strategy(),
            at_top in any::<bool>()
        ) {
            let sections = compute_sections(labels, &index, at_top);

            for (position, section) in sections.iter().enumerate() {
                prop_assert_eq!(section.index, position);
            }
        }

        /// Property: the catch-all section sits at the requested end.
        #[test]
        fn catch_all_is_pinned(
            labels in prop::collection::vec(label_strategy(), 0..40),
            index in index_strategy(),
            at_top in any::<bool>()
        ) {
            let sections = compute_sections(labels, &index, at_top);

            if let Some(position) = sections.iter().position(|s| s.title == UNCATEGORIZED) {
                let expected = if at_top { 0 } else { sections.len() - 1 };
                prop_assert_eq!(position, expected);
            }
        }

        /// Property: indexed sections follow the index order and items inside
        /// a section are non-decreasing by folded label.
        #[test]
        fn sections_and_items_are_ordered(
            labels in prop::collection::vec(label_strategy(), 0..40),
            index in index_strategy(),
            at_top in any::<bool>()
        ) {
            let rank = build_letter_rank(&index);
            let sections = compute_sections(labels, &index, at_top);

            let ranks: Vec<usize> = sections
                .iter()
                .filter(|s| s.title != UNCATEGORIZED)
                .map(|s| rank.rank_of(&s.title).unwrap())
                .collect();
            prop_assert!(ranks.windows(2).all(|w| w[0] < w[1]));

            for section in &sections {
                prop_assert!(section
                    .data
                    .windows(2)
                    .all(|w| compare_labels(&w[0], &w[1]) != Ordering::Greater));
            }
        }

        /// Property: the case of a Latin label never changes its section.
        #[test]
        fn classification_ignores_case(label in "[a-zA-Z]{1,8}") {
            let rank = build_letter_rank(&char_index::latin());
            prop_assert_eq!(
                section_key(&label.to_lowercase(), &rank),
                section_key(&label.to_uppercase(), &rank)
            );
        }
    }
}
