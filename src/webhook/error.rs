//! Request-level error taxonomy.

use axum::http::StatusCode;
use thiserror::Error;

/// Reasons a webhook request is rejected. All are terminal for the request.
///
/// The `Display` text is the message sent to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WebhookError {
    /// Unsupported HTTP method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Non-POST method while the read API is disabled.
    #[error("Only POST method allowed")]
    PostOnly,

    /// Missing or non-JSON `Content-Type` header.
    #[error("Content-Type must be application/json")]
    InvalidContentType,

    /// Body is not an object with a string `data` and a numeric `timestamp`.
    #[error("Invalid payload structure")]
    InvalidPayloadStructure,

    /// Body exceeds the configured size limit.
    #[error("Payload too large")]
    PayloadTooLarge,
}

impl WebhookError {
    /// HTTP status reported for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            WebhookError::MethodNotAllowed | WebhookError::PostOnly => {
                StatusCode::METHOD_NOT_ALLOWED
            }
            WebhookError::InvalidContentType | WebhookError::InvalidPayloadStructure => {
                StatusCode::BAD_REQUEST
            }
            WebhookError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}
