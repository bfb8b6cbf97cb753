use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Anything that carries the label used to classify and sort it
pub trait Labeled {
    fn label(&self) -> &str;
}

impl Labeled for str {
    fn label(&self) -> &str {
        self
    }
}

impl Labeled for String {
    fn label(&self) -> &str {
        self
    }
}

impl<T: Labeled + ?Sized> Labeled for &T {
    fn label(&self) -> &str {
        (**self).label()
    }
}

/// A list entry: the `value` label plus whatever payload the caller attached.
/// The payload is carried through grouping untouched.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Item {
    #[serde(default, deserialize_with = "deserialize_label")]
    pub value: String,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Item {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            extra: HashMap::new(),
        }
    }

    /// Attach a payload field
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

impl Labeled for Item {
    fn label(&self) -> &str {
        &self.value
    }
}

/// Missing or null labels become the empty string; numbers and booleans keep
/// their JSON text. Arrays and objects are not labels.
fn deserialize_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(other) => Err(de::Error::custom(format!(
            "item value must be a string, found {}",
            other
        ))),
    }
}

/// One titled group of items and its display position
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Section<T> {
    pub title: String,
    pub data: Vec<T>,
    pub index: usize,
}

/// Input document: the items plus optional grouping settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct SectionDocument {
    pub items: Vec<Item>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_index: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uncategorized_at_top: Option<bool>,
}
