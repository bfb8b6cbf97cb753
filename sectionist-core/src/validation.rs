use std::collections::HashMap;

/// Check a character index for entries that grouping tolerates but that are
/// probably mistakes. Returns Ok(()) if clean, or Err(Vec<String>) with one
/// message per problem. None of these stop `compute_sections`.
pub fn validate_char_index<S: AsRef<str>>(char_index: &[S]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if char_index.is_empty() {
        errors.push("Index is empty; every item will be uncategorized".to_string());
    }

    let mut seen: HashMap<String, usize> = HashMap::new();

    for (i, entry) in char_index.iter().enumerate() {
        let entry = entry.as_ref();
        let position = i + 1;

        match entry.chars().count() {
            0 => errors.push(format!("Entry #{} is empty and can never match", position)),
            1 => {}
            _ => errors.push(format!(
                "Entry #{} ('{}') has more than one character and can never match",
                position, entry
            )),
        }

        if let Some(first) = seen.insert(entry.to_lowercase(), position) {
            errors.push(format!(
                "Entry #{} ('{}') duplicates entry #{}; the later position wins",
                position, entry, first
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
