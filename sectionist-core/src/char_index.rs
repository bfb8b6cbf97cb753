use crate::error::Error;
use crate::hangul::BASE_CONSONANTS;

/// Lower-case Latin letters a..=z
pub fn latin() -> Vec<String> {
    ('a'..='z').map(String::from).collect()
}

/// The 14 plain Hangul leading consonants
pub fn hangul() -> Vec<String> {
    BASE_CONSONANTS.iter().map(|c| c.to_string()).collect()
}

/// Latin letters followed by the Hangul consonants
pub fn latin_hangul() -> Vec<String> {
    let mut index = latin();
    index.extend(hangul());
    index
}

/// Parse an index description.
///
/// Accepts a preset name (`latin`, `hangul`, `latin+hangul`), a comma
/// separated list of single characters (`a, b, ㄱ`), or a plain run of
/// characters (`abcㄱㄴ`).
pub fn parse_char_index(input: &str) -> Result<Vec<String>, Error> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Error::CharIndex("index is empty".to_string()));
    }

    match input.to_lowercase().as_str() {
        "latin" | "a-z" => return Ok(latin()),
        "hangul" => return Ok(hangul()),
        "latin+hangul" | "latin-hangul" => return Ok(latin_hangul()),
        _ => {}
    }

    if input.contains(',') {
        let mut index = Vec::new();
        for entry in input.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            if entry.chars().count() != 1 {
                return Err(Error::CharIndex(format!(
                    "entry '{}' is not a single character",
                    entry
                )));
            }
            index.push(entry.to_string());
        }
        return Ok(index);
    }

    Ok(input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(String::from)
        .collect())
}
