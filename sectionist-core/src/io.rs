use crate::error::{Error, Result};
use crate::models::{Item, Section, SectionDocument};
use crate::schema_validation::validate_document;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Parse a document from JSON text, validating it against the document schema
pub fn parse_document(contents: &str) -> Result<SectionDocument> {
    let value: Value = serde_json::from_str(contents)?;
    validate_document(&value).map_err(Error::Validation)?;

    let document = match value {
        Value::Array(_) => SectionDocument {
            items: serde_json::from_value::<Vec<Item>>(value)?,
            ..SectionDocument::default()
        },
        other => serde_json::from_value(other)?,
    };

    tracing::debug!(items = document.items.len(), "parsed document");
    Ok(document)
}

/// Load a document from a JSON file
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<SectionDocument> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&contents)
}

/// Save sections to a JSON file with pretty printing
pub fn save_sections<T: Serialize, P: AsRef<Path>>(sections: &[Section<T>], path: P) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(sections)?;
    fs::write(path, json).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
