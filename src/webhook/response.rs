//! Response envelopes.
//!
//! Every body except the log listing uses the same envelope:
//! `{success, message, data?, timestamp?}`. `success` is derived from the
//! status code when the response is built and is never tracked separately.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::webhook::error::WebhookError;
use crate::webhook::types::{now_millis, LogEntry, PayloadData};

/// A status below 400 counts as success.
pub fn is_success(status: StatusCode) -> bool {
    status.as_u16() < 400
}

/// Standard response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<PayloadData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
}

/// Body returned when listing the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogsResponse {
    pub success: bool,
    pub logs: Vec<LogEntry>,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
}

/// Builds responses, optionally stamping them with construction time.
#[derive(Debug, Clone, Copy, Default)]
pub struct Responder {
    timestamped: bool,
}

impl Responder {
    pub fn new(timestamped: bool) -> Self {
        Self { timestamped }
    }

    fn stamp(&self) -> Option<u64> {
        self.timestamped.then(now_millis)
    }

    pub fn envelope(
        &self,
        status: StatusCode,
        message: impl Into<String>,
        data: Option<PayloadData>,
    ) -> Response {
        let body = Envelope {
            success: is_success(status),
            message: message.into(),
            data,
            timestamp: self.stamp(),
        };
        (status, Json(body)).into_response()
    }

    pub fn error(&self, err: WebhookError) -> Response {
        self.envelope(err.status(), err.to_string(), None)
    }

    pub fn logs(&self, logs: Vec<LogEntry>) -> Response {
        let body = LogsResponse {
            success: is_success(StatusCode::OK),
            count: logs.len(),
            logs,
            timestamp: self.stamp(),
        };
        (StatusCode::OK, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_success() {
        assert!(is_success(StatusCode::OK));
        assert!(is_success(StatusCode::NO_CONTENT));
        assert!(is_success(StatusCode::PERMANENT_REDIRECT));
        assert!(!is_success(StatusCode::BAD_REQUEST));
        assert!(!is_success(StatusCode::METHOD_NOT_ALLOWED));
        assert!(!is_success(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn test_envelope_omits_empty_fields() {
        let body = Envelope {
            success: false,
            message: "Invalid payload structure".into(),
            data: None,
            timestamp: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"success": false, "message": "Invalid payload structure"})
        );
    }

    #[test]
    fn test_error_response_status() {
        let response = Responder::default().error(WebhookError::MethodNotAllowed);
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
