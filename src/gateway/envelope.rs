//! Response envelope `{code, data, msg}`
//!
//! `code == 0` carries the payload in `data`; anything else is a business
//! failure described by `msg`. Validation failures from the backend put an
//! object of per-field messages in `msg`, which is flattened to text.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::error::{GatewayError, GatewayResult};

/// Message used when a failing envelope has no `msg`
pub const DEFAULT_FAILURE: &str = "Operation failed";

#[derive(Debug, Deserialize)]
struct Envelope {
    code: i64,
    #[serde(default)]
    data: Value,
    #[serde(default)]
    msg: Value,
}

/// Unwrap an envelope body into its payload
///
/// A missing `data` decodes as `null`, so `T = ()` succeeds on bare
/// acknowledgements.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> GatewayResult<T> {
    let envelope: Envelope = serde_json::from_slice(body)?;

    if envelope.code != 0 {
        return Err(GatewayError::Business {
            code: envelope.code,
            message: message_text(&envelope.msg).unwrap_or_else(|| DEFAULT_FAILURE.to_string()),
        });
    }

    Ok(serde_json::from_value(envelope.data)?)
}

/// `msg` of an error body, if it is JSON and has one
pub fn server_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value.get("msg").and_then(message_text)
}

fn message_text(msg: &Value) -> Option<String> {
    let text = match msg {
        Value::Null => return None,
        Value::String(s) => s.trim().to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(message_text)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(fields) => fields
            .iter()
            .filter_map(|(field, errs)| message_text(errs).map(|m| format!("{}: {}", field, m)))
            .collect::<Vec<_>>()
            .join("; "),
        other => other.to_string(),
    };

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bytes(v: Value) -> Vec<u8> {
        v.to_string().into_bytes()
    }

    #[test]
    fn test_code_zero_resolves_with_data() {
        let n: u32 = decode(&bytes(json!({ "code": 0, "data": 5 }))).unwrap();
        assert_eq!(n, 5);

        let ack: GatewayResult<()> = decode(&bytes(json!({ "code": 0, "msg": "ok" })));
        assert!(ack.is_ok());
    }

    #[test]
    fn test_non_zero_code_rejects_with_msg() {
        let err = decode::<Value>(&bytes(json!({ "code": 1001, "msg": "Record not found" })))
            .unwrap_err();
        assert_eq!(
            err,
            GatewayError::Business {
                code: 1001,
                message: "Record not found".into()
            }
        );
    }

    #[test]
    fn test_missing_msg_uses_default() {
        let err = decode::<Value>(&bytes(json!({ "code": 1 }))).unwrap_err();
        assert_eq!(err.to_string(), DEFAULT_FAILURE);
    }

    #[test]
    fn test_field_errors_flattened() {
        let err = decode::<Value>(&bytes(json!({
            "code": 1,
            "msg": { "weight": ["Ensure this value is less than or equal to 300."] }
        })))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "weight: Ensure this value is less than or equal to 300."
        );
    }

    #[test]
    fn test_not_an_envelope() {
        let err = decode::<Value>(b"<html>").unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));

        let err = decode::<u32>(&bytes(json!({ "code": 0, "data": "x" }))).unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));
    }

    #[test]
    fn test_server_message() {
        assert_eq!(
            server_message(&bytes(json!({ "code": 403, "msg": "No permission" }))),
            Some("No permission".to_string())
        );
        assert_eq!(server_message(b"Bad Gateway"), None);
        assert_eq!(server_message(&bytes(json!({ "detail": "x" }))), None);
    }
}
