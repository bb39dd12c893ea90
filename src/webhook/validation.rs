//! POST request validation.
//!
//! Checks run in order and stop at the first failure: content type first,
//! then payload structure.

use axum::http::{header::CONTENT_TYPE, HeaderMap};
use serde_json::Value;

use crate::webhook::error::WebhookError;
use crate::webhook::types::PayloadData;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Require a `Content-Type` starting with `application/json`.
///
/// Parameters such as `; charset=utf-8` are accepted. A missing header is
/// treated as empty.
pub fn check_content_type(headers: &HeaderMap) -> Result<(), WebhookError> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if content_type.starts_with(JSON_CONTENT_TYPE) {
        Ok(())
    } else {
        Err(WebhookError::InvalidContentType)
    }
}

/// Parse a request body into a payload.
///
/// The body must be a JSON object with a string `data` member and a numeric
/// `timestamp` member. Malformed JSON is reported the same way as a
/// wrongly-shaped object.
pub fn parse_payload(body: &[u8]) -> Result<PayloadData, WebhookError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|_| WebhookError::InvalidPayloadStructure)?;

    let Value::Object(mut fields) = value else {
        return Err(WebhookError::InvalidPayloadStructure);
    };

    let data = match fields.remove("data") {
        Some(Value::String(data)) => data,
        _ => return Err(WebhookError::InvalidPayloadStructure),
    };

    let timestamp = match fields.remove("timestamp") {
        Some(Value::Number(timestamp)) => timestamp,
        _ => return Err(WebhookError::InvalidPayloadStructure),
    };

    Ok(PayloadData {
        data,
        timestamp,
        extra: fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use serde_json::json;

    fn headers_with(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn test_content_type() {
        assert!(check_content_type(&headers_with("application/json")).is_ok());
        assert!(check_content_type(&headers_with("application/json; charset=utf-8")).is_ok());
        assert_eq!(
            check_content_type(&headers_with("text/plain")),
            Err(WebhookError::InvalidContentType)
        );
        assert_eq!(
            check_content_type(&HeaderMap::new()),
            Err(WebhookError::InvalidContentType)
        );
    }

    #[test]
    fn test_valid_payload() {
        let payload = parse_payload(br#"{"data":"hello","timestamp":1700000000}"#).unwrap();
        assert_eq!(payload, PayloadData::new("hello", 1_700_000_000u64));
    }

    #[test]
    fn test_float_timestamp_accepted() {
        let payload = parse_payload(br#"{"data":"x","timestamp":1.5}"#).unwrap();
        assert_eq!(payload.timestamp.as_f64(), Some(1.5));
    }

    #[test]
    fn test_extra_members_preserved() {
        let payload = parse_payload(br#"{"data":"x","timestamp":1,"source":"ci"}"#).unwrap();
        assert_eq!(payload.extra.get("source"), Some(&json!("ci")));
    }

    #[test]
    fn test_invalid_payloads() {
        let cases: &[&[u8]] = &[
            br#"{"data": 123, "timestamp": "now"}"#,
            br#"{"data": "x"}"#,
            br#"{"timestamp": 1}"#,
            br#"{"data": "x", "timestamp": "1"}"#,
            br#"{"data": null, "timestamp": 1}"#,
            br#"["x", 1]"#,
            b"null",
            b"",
            b"{not json",
        ];

        for body in cases {
            assert_eq!(
                parse_payload(body),
                Err(WebhookError::InvalidPayloadStructure),
                "body: {}",
                String::from_utf8_lossy(body)
            );
        }
    }
}
