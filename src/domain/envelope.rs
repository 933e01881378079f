//! Response envelope value object

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Process exit code for a successful invocation
pub const EXIT_SUCCESS: u8 = 0;
/// Process exit code for any failure
pub const EXIT_ERROR: u8 = 1;

/// The single JSON line written to stdout per invocation.
///
/// Serializes as `{"ok": true, "data": ...}` or `{"ok": false, "error": "..."}`.
/// Exactly one of `data` / `error` is ever present.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseEnvelope {
    Success(Value),
    Failure(String),
}

impl ResponseEnvelope {
    /// Wrap a normalized result
    pub fn success(data: Value) -> Self {
        Self::Success(data)
    }

    /// Wrap a failure message
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Exit code consistent with the `ok` flag
    pub fn exit_code(&self) -> u8 {
        if self.is_ok() {
            EXIT_SUCCESS
        } else {
            EXIT_ERROR
        }
    }

    /// Render as a single JSON line (no trailing newline)
    pub fn to_line(&self) -> String {
        // Serializing a tree of serde_json values and strings cannot fail.
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"ok":false,"error":"Failed to encode response."}"#.to_string())
    }
}

impl Serialize for ResponseEnvelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        match self {
            Self::Success(data) => {
                map.serialize_entry("ok", &true)?;
                map.serialize_entry("data", data)?;
            }
            Self::Failure(error) => {
                map.serialize_entry("ok", &false)?;
                map.serialize_entry("error", error)?;
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_shape() {
        let envelope = ResponseEnvelope::success(json!({"added": true}));
        let parsed: Value = serde_json::from_str(&envelope.to_line()).unwrap();
        assert_eq!(parsed, json!({"ok": true, "data": {"added": true}}));
        assert_eq!(envelope.exit_code(), EXIT_SUCCESS);
    }

    #[test]
    fn success_with_null_data_keeps_data_key() {
        let envelope = ResponseEnvelope::success(Value::Null);
        assert_eq!(envelope.to_line(), r#"{"ok":true,"data":null}"#);
    }

    #[test]
    fn failure_shape() {
        let envelope = ResponseEnvelope::failure("Missing required field: videoId");
        let parsed: Value = serde_json::from_str(&envelope.to_line()).unwrap();
        assert_eq!(
            parsed,
            json!({"ok": false, "error": "Missing required field: videoId"})
        );
        assert_eq!(envelope.exit_code(), EXIT_ERROR);
    }

    #[test]
    fn line_has_no_newline() {
        let envelope = ResponseEnvelope::failure("multi\nline\nmessage");
        assert!(!envelope.to_line().contains('\n'));
    }

    #[test]
    fn ok_field_comes_first() {
        let line = ResponseEnvelope::success(json!([1, 2])).to_line();
        assert!(line.starts_with(r#"{"ok":true"#));
    }
}
