//! Webhook endpoint handlers.
//!
//! Handlers run inside the request's trace span, so their events carry the
//! request ID.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{HeaderMap, StatusCode},
    response::Response,
};

use crate::http::server::AppState;
use crate::webhook::error::WebhookError;
use crate::webhook::validation::{check_content_type, parse_payload};

/// GET: list the log, newest first.
pub async fn list_logs(State(state): State<AppState>) -> Response {
    let logs = state.log.entries();
    tracing::debug!(count = logs.len(), "Listing webhook log");
    state.responder.logs(logs)
}

/// DELETE: empty the log.
pub async fn clear_logs(State(state): State<AppState>) -> Response {
    let removed = state.log.clear();
    tracing::info!(removed, "Webhook log cleared");
    state
        .responder
        .envelope(StatusCode::OK, "Logs cleared successfully", None)
}

/// POST: validate, store and echo a payload.
pub async fn receive_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    if let Err(err) = check_content_type(&headers) {
        return reject(&state, err);
    }

    let body = match body {
        Ok(body) => body,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return reject(&state, WebhookError::PayloadTooLarge);
        }
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Failed to read request body");
            return reject(&state, WebhookError::InvalidPayloadStructure);
        }
    };

    let payload = match parse_payload(&body) {
        Ok(payload) => payload,
        Err(err) => return reject(&state, err),
    };

    match serde_json::to_string(&payload) {
        Ok(json) => tracing::info!(payload = %json, "Webhook payload received"),
        Err(e) => tracing::warn!(error = %e, "Failed to serialize payload for logging"),
    }

    let entry = state.log.record(payload);

    state.responder.envelope(
        StatusCode::OK,
        "Payload received successfully",
        Some(entry.payload),
    )
}

/// Any method not routed above.
pub async fn method_not_allowed(State(state): State<AppState>) -> Response {
    let err = if state.read_api {
        WebhookError::MethodNotAllowed
    } else {
        WebhookError::PostOnly
    };
    reject(&state, err)
}

fn reject(state: &AppState, err: WebhookError) -> Response {
    tracing::warn!(error = %err, status = err.status().as_u16(), "Webhook request rejected");
    state.responder.error(err)
}
