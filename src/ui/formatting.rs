use colored::Colorize;
use sectionist_core::{rail, Item, Section};
use serde_json::Value;
use std::collections::HashMap;

/// Render a payload value for display
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(arr) => arr
            .iter()
            .map(format_value)
            .collect::<Vec<_>>()
            .join(", "),
        _ => value.to_string(),
    }
}

/// Format an item's payload fields into a single sorted line
pub fn format_payload(extra: &HashMap<String, Value>) -> String {
    let mut fields: Vec<String> = extra
        .iter()
        .map(|(key, value)| format!("{}: {}", key, format_value(value)))
        .collect();

    fields.sort();
    fields.join(", ")
}

/// Format the scroll rail: section titles in display order
pub fn format_rail(sections: &[Section<Item>]) -> String {
    rail(sections).join(" ")
}

/// Format sections as a Markdown-style listing
pub fn format_sections(sections: &[Section<Item>]) -> String {
    let mut out = String::new();
    let total: usize = sections.iter().map(|s| s.data.len()).sum();

    out.push_str(&format!("# Sections ({} items)\n\n", total));

    if sections.is_empty() {
        out.push_str("_No items._\n");
        return out;
    }

    out.push_str(&format!("**Rail:** {}\n", format_rail(sections)));

    for section in sections {
        out.push_str(&format!(
            "\n## {} {}\n\n",
            section.title.bold(),
            format!("[{}]", section.index).dimmed()
        ));

        for item in &section.data {
            let label = if item.value.is_empty() {
                "(empty)".italic().to_string()
            } else {
                item.value.clone()
            };

            if item.extra.is_empty() {
                out.push_str(&format!("- {}\n", label));
            } else {
                out.push_str(&format!("- {} ({})\n", label, format_payload(&item.extra)));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Vec<Section<Item>> {
        vec![
            Section {
                title: "A".to_string(),
                data: vec![Item::new("Alice").with_field("phone", json!("555-0100"))],
                index: 0,
            },
            Section {
                title: "#".to_string(),
                data: vec![Item::new("")],
                index: 1,
            },
        ]
    }

    #[test]
    fn test_format_payload_sorted() {
        let item = Item::new("x")
            .with_field("b", json!(2))
            .with_field("a", json!(["x", "y"]));
        assert_eq!(format_payload(&item.extra), "a: x, y, b: 2");
    }

    #[test]
    fn test_format_rail() {
        assert_eq!(format_rail(&sample()), "A #");
    }

    #[test]
    fn test_format_sections() {
        colored::control::set_override(false);

        let text = format_sections(&sample());

        assert!(text.starts_with("# Sections (2 items)"));
        assert!(text.contains("**Rail:** A #"));
        assert!(text.contains("## A [0]"));
        assert!(text.contains("- Alice (phone: 555-0100)"));
        assert!(text.contains("## # [1]"));
        assert!(text.contains("- (empty)"));
    }

    #[test]
    fn test_format_no_sections() {
        let text = format_sections(&[]);
        assert!(text.contains("_No items._"));
    }
}
