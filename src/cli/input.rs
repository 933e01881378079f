//! Payload loading from stdin

use std::io::Read;

use serde_json::Value;

use crate::domain::error::PayloadError;
use crate::domain::payload::Payload;

/// Read the whole input once and decode it as a JSON object.
///
/// Whitespace-only input is the empty payload.
pub fn read_payload(mut input: impl Read) -> Result<Payload, PayloadError> {
    let mut raw = Vec::new();
    input.read_to_end(&mut raw)?;
    decode_payload(&raw)
}

fn decode_payload(raw: &[u8]) -> Result<Payload, PayloadError> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(Payload::empty());
    }

    match serde_json::from_slice(raw)? {
        Value::Object(fields) => Ok(Payload::from(fields)),
        _ => Err(PayloadError::NotAnObject),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_input_is_empty_payload() {
        assert_eq!(read_payload(&b""[..]).unwrap(), Payload::empty());
        assert_eq!(read_payload(&b"  \n\t "[..]).unwrap(), Payload::empty());
    }

    #[test]
    fn object_is_decoded() {
        let payload = read_payload(&br#" {"videoId": "abc"} "#[..]).unwrap();
        assert_eq!(payload.get("videoId"), Some(&json!("abc")));
    }

    #[test]
    fn invalid_json_is_decoding_error() {
        let err = read_payload(&b"{not json"[..]).unwrap_err();
        assert!(matches!(err, PayloadError::InvalidJson(_)));
        assert!(err.to_string().starts_with("Invalid JSON payload: "));
    }

    #[test]
    fn non_object_is_rejected() {
        for raw in [&b"[1, 2]"[..], &b"\"text\""[..], &b"42"[..], &b"null"[..]] {
            let err = read_payload(raw).unwrap_err();
            assert_eq!(err.to_string(), "Payload must be a JSON object.");
        }
    }

    #[test]
    fn non_utf8_is_decoding_error() {
        let err = read_payload(&b"{\xff\xfe}"[..]).unwrap_err();
        assert!(matches!(err, PayloadError::InvalidJson(_)));
    }

    #[test]
    fn trailing_garbage_is_rejected() {
        assert!(read_payload(&br#"{"a": 1} {"b": 2}"#[..]).is_err());
    }
}
