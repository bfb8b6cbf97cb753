use crate::hangul;
use crate::models::Labeled;
use crate::ranking::LetterRank;
use std::collections::HashMap;

/// Title of the section holding items whose first character is not indexed
pub const UNCATEGORIZED: &str = "#";

/// Section key for a label: the upper-cased (Hangul-remapped) first character
/// when the index knows it, otherwise the catch-all key
pub fn section_key(label: &str, rank: &LetterRank) -> String {
    let Some(first) = hangul::first_char(label) else {
        return UNCATEGORIZED.to_string();
    };

    let mut buf = [0u8; 4];
    let letter: &str = hangul::section_char(first).encode_utf8(&mut buf);

    if rank.contains(letter) {
        letter.to_uppercase()
    } else {
        UNCATEGORIZED.to_string()
    }
}

/// Partition items into buckets keyed by section key.
/// Each bucket keeps the input order of its items; no item is dropped.
pub fn classify<T, I>(items: I, rank: &LetterRank) -> HashMap<String, Vec<T>>
where
    T: Labeled,
    I: IntoIterator<Item = T>,
{
    let mut buckets: HashMap<String, Vec<T>> = HashMap::new();

    for item in items {
        let key = section_key(item.label(), rank);
        tracing::trace!(label = item.label(), key = %key, "classified item");
        buckets.entry(key).or_default().push(item);
    }

    buckets
}
