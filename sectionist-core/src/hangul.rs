//! Leading-consonant lookup for precomposed Hangul syllables.
//!
//! The syllable block U+AC00..=U+D7A3 is laid out as 19 leading consonants
//! of 588 code points each. Sections only use the 14 plain consonants, so the
//! band of each tensed consonant (ㄲ ㄸ ㅃ ㅆ ㅉ) is merged into the band of its
//! plain counterpart and the table below lists 14 exclusive upper bounds.

use std::ops::RangeInclusive;

pub const SYLLABLES: RangeInclusive<char> = '\u{AC00}'..='\u{D7A3}';

/// Plain leading consonants in dictionary order
pub const BASE_CONSONANTS: [char; 14] = [
    'ㄱ', 'ㄴ', 'ㄷ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅅ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

// Literal thresholds; do not re-derive from the stride.
const CONSONANT_BANDS: [(u32, char); 14] = [
    (45208, 'ㄱ'),
    (45796, 'ㄴ'),
    (46972, 'ㄷ'),
    (47560, 'ㄹ'),
    (48148, 'ㅁ'),
    (49324, 'ㅂ'),
    (50500, 'ㅅ'),
    (51088, 'ㅇ'),
    (52264, 'ㅈ'),
    (52852, 'ㅊ'),
    (53440, 'ㅋ'),
    (54028, 'ㅌ'),
    (54616, 'ㅍ'),
    (55204, 'ㅎ'),
];

/// Tensed compatibility jamo and the plain consonant they group under
const TENSE_FOLDS: [(char, char); 5] = [
    ('ㄲ', 'ㄱ'),
    ('ㄸ', 'ㄷ'),
    ('ㅃ', 'ㅂ'),
    ('ㅆ', 'ㅅ'),
    ('ㅉ', 'ㅈ'),
];

pub fn is_syllable(c: char) -> bool {
    SYLLABLES.contains(&c)
}

/// Plain leading consonant of a precomposed syllable, `None` for anything else
pub fn leading_consonant(c: char) -> Option<char> {
    if !is_syllable(c) {
        return None;
    }

    let code = c as u32;
    let band = CONSONANT_BANDS.partition_point(|&(end, _)| end <= code);
    CONSONANT_BANDS.get(band).map(|&(_, consonant)| consonant)
}

/// Map a tensed consonant jamo onto its plain form
pub fn fold_tense(c: char) -> char {
    TENSE_FOLDS
        .iter()
        .find(|&&(tense, _)| tense == c)
        .map_or(c, |&(_, plain)| plain)
}

/// Character a label's first character is grouped under
pub fn section_char(c: char) -> char {
    fold_tense(leading_consonant(c).unwrap_or(c))
}

/// First character of a label, taken as-is. Conjoining jamo are not
/// recomposed, so a decomposed syllable is not treated as a syllable.
pub fn first_char(label: &str) -> Option<char> {
    label.chars().next()
}
