use serde_json::{json, Value};

/// JSON Schema for an input document: either a bare array of items or an
/// object carrying the items and optional grouping settings
pub fn document_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "definitions": {
            "item": {
                "type": "object",
                "properties": {
                    "value": {"type": ["string", "number", "boolean", "null"]}
                }
            },
            "items": {
                "type": "array",
                "items": {"$ref": "#/definitions/item"}
            }
        },
        "oneOf": [
            {"$ref": "#/definitions/items"},
            {
                "type": "object",
                "required": ["items"],
                "properties": {
                    "items": {"$ref": "#/definitions/items"},
                    "char_index": {
                        "type": "array",
                        "items": {"type": "string"}
                    },
                    "uncategorized_at_top": {"type": "boolean"}
                }
            }
        ]
    })
}

/// Validate data against JSON Schema
/// Returns Ok(()) if valid, Err with list of validation errors if invalid
pub fn validate_against_schema(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    let compiled = jsonschema::validator_for(schema)
        .map_err(|e| vec![format!("Schema compilation error: {}", e)])?;

    match compiled.validate(data) {
        Ok(()) => Ok(()),
        Err(error) => {
            let path_str = error.instance_path.to_string();
            let location = if path_str.is_empty() {
                "root".to_string()
            } else {
                path_str
            };
            Err(vec![format!("{} at {}", error, location)])
        }
    }
}

/// Validate an input document against `document_schema`
pub fn validate_document(data: &Value) -> Result<(), Vec<String>> {
    validate_against_schema(&document_schema(), data)
}
