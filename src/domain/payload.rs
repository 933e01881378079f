//! Request payload value object

use serde_json::{Map, Value};

use crate::domain::error::ValidationError;

/// The JSON object supplied on stdin, carrying operation arguments.
///
/// No schema is enforced globally; each operation pulls its own fields
/// through the accessors below.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    fields: Map<String, Value>,
}

impl Payload {
    /// Create an empty payload (equivalent to `{}`)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the raw value of a field
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Get a field that must be present and non-blank after trimming.
    ///
    /// A present-but-blank field is treated the same as an absent one.
    pub fn required_text(&self, field: &str) -> Result<String, ValidationError> {
        self.optional_text(field)
            .ok_or_else(|| ValidationError::missing(field))
    }

    /// Get a field as trimmed text, or None if absent or blank
    pub fn optional_text(&self, field: &str) -> Option<String> {
        let text = coerce_text(self.get(field)?);
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Get a field as trimmed text, falling back to `default` when absent or blank
    pub fn text_or(&self, field: &str, default: &str) -> String {
        self.optional_text(field)
            .unwrap_or_else(|| default.to_string())
    }

    /// Get a field that must be present and truthy, returned as-is
    pub fn required_value(&self, field: &str) -> Result<&Value, ValidationError> {
        self.get(field)
            .filter(|v| is_truthy(v))
            .ok_or_else(|| ValidationError::missing(field))
    }

    /// Get a list field as its non-blank trimmed string items.
    ///
    /// Returns None when the field is not a list or no item survives
    /// filtering, meaning "no restriction".
    pub fn text_list(&self, field: &str) -> Option<Vec<String>> {
        let items: Vec<String> = self
            .get(field)?
            .as_array()?
            .iter()
            .map(|item| coerce_text(item).trim().to_string())
            .filter(|item| !item.is_empty())
            .collect();

        if items.is_empty() {
            None
        } else {
            Some(items)
        }
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Check JSON truthiness: null, false, zero, and empty strings/lists/objects are falsy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Coerce any JSON value to text. Falsy values become the empty string.
pub fn coerce_text(value: &Value) -> String {
    if !is_truthy(value) {
        return String::new();
    }
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
