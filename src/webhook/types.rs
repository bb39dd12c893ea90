//! Payload and log entry types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::time::{SystemTime, UNIX_EPOCH};

/// A payload submitted by a webhook caller.
///
/// `timestamp` keeps the caller's numeric representation so the payload can
/// be echoed back unchanged. Members other than `data` and `timestamp` are
/// preserved in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadData {
    pub data: String,
    pub timestamp: Number,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PayloadData {
    pub fn new(data: impl Into<String>, timestamp: impl Into<Number>) -> Self {
        Self {
            data: data.into(),
            timestamp: timestamp.into(),
            extra: Map::new(),
        }
    }
}

/// A stored record of one accepted payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Server receipt time in milliseconds since the Unix epoch.
    pub timestamp: u64,
    pub payload: PayloadData,
    pub success: bool,
}

impl LogEntry {
    /// Stamp a payload with the current receipt time.
    pub fn received(payload: PayloadData) -> Self {
        Self {
            timestamp: now_millis(),
            payload,
            success: true,
        }
    }
}

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_serializes_flat() {
        let mut payload = PayloadData::new("hello", 1_700_000_000u64);
        payload.extra.insert("source".into(), json!("github"));

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({"data": "hello", "timestamp": 1700000000, "source": "github"})
        );
    }

    #[test]
    fn test_integer_timestamp_is_not_widened() {
        let payload = PayloadData::new("x", 42u64);
        assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"data":"x","timestamp":42}"#);
    }

    #[test]
    fn test_received_entry() {
        let before = now_millis();
        let entry = LogEntry::received(PayloadData::new("x", 1u64));
        assert!(entry.success);
        assert!(entry.timestamp >= before);
    }
}
