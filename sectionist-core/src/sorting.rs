use crate::classification::UNCATEGORIZED;
use crate::models::{Labeled, Section};
use crate::ranking::LetterRank;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Upper-cased label as UTF-16 code units
fn sort_key(label: &str) -> Vec<u16> {
    label.to_uppercase().encode_utf16().collect()
}

/// Compare two labels case-insensitively by UTF-16 code unit.
/// No locale collation: both sides are upper-cased, so characters above
/// U+FFFF (surrogate pairs) sort before U+E000..=U+FFFF.
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    a.to_uppercase()
        .encode_utf16()
        .cmp(b.to_uppercase().encode_utf16())
}

/// Sort items by label. Items with equal folded labels keep their input
/// order, but callers should not depend on that.
pub fn sort_items<T: Labeled>(items: &mut [T]) {
    items.sort_by_cached_key(|item| sort_key(item.label()));
}

/// Order two section titles: the catch-all goes to one end depending on
/// `uncategorized_at_top`, indexed titles follow the index order
pub fn compare_titles(
    a: &str,
    b: &str,
    rank: &LetterRank,
    uncategorized_at_top: bool,
) -> Ordering {
    let catch_all_end = if uncategorized_at_top {
        Ordering::Less
    } else {
        Ordering::Greater
    };

    match (a == UNCATEGORIZED, b == UNCATEGORIZED) {
        (true, false) => catch_all_end,
        (false, true) => catch_all_end.reverse(),
        _ => {
            // Titles without a rank only come from case mappings that do not
            // round-trip; they sort after ranked ones.
            let a_rank = rank.rank_of(a).unwrap_or(usize::MAX);
            let b_rank = rank.rank_of(b).unwrap_or(usize::MAX);

            match a_rank.cmp(&b_rank) {
                Ordering::Equal => a.cmp(b),
                other => other,
            }
        }
    }
}

/// Turn buckets into ordered sections with their final `index`
pub fn finalize<T: Labeled>(
    buckets: HashMap<String, Vec<T>>,
    rank: &LetterRank,
    uncategorized_at_top: bool,
) -> Vec<Section<T>> {
    let mut sections: Vec<Section<T>> = buckets
        .into_iter()
        .map(|(title, mut data)| {
            sort_items(&mut data);
            Section {
                title,
                data,
                index: 0,
            }
        })
        .collect();

    sections.sort_by(|a, b| compare_titles(&a.title, &b.title, rank, uncategorized_at_top));

    for (index, section) in sections.iter_mut().enumerate() {
        section.index = index;
    }

    sections
}
