use std::collections::HashMap;

/// Case-folded section key -> 1-based position in the caller's index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterRank {
    ranks: HashMap<String, usize>,
}

impl LetterRank {
    /// Rank of `key`, compared case-insensitively
    pub fn rank_of(&self, key: &str) -> Option<usize> {
        self.ranks.get(&key.to_lowercase()).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.rank_of(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

/// Build the rank lookup for an ordered index of section keys.
/// Entries that fold to the same key keep the position of the last one.
pub fn build_letter_rank<S: AsRef<str>>(char_index: &[S]) -> LetterRank {
    let mut ranks = HashMap::with_capacity(char_index.len());

    for (i, letter) in char_index.iter().enumerate() {
        ranks.insert(letter.as_ref().to_lowercase(), i + 1);
    }

    LetterRank { ranks }
}
