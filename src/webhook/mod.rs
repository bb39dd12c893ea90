//! Webhook receiver subsystem.
//!
//! # Data Flow
//! ```text
//! POST request
//!     → validation.rs (content type, payload shape)
//!     → store.rs (insert at head, evict tail past capacity)
//!     → response.rs (envelope, success derived from status)
//!
//! GET / DELETE
//!     → store.rs (snapshot / clear)
//!     → response.rs
//! ```
//!
//! # Design Decisions
//! - The log is owned by the server and injected through state, never global
//! - Validation short-circuits on the first failure
//! - `success` in every response is derived from the status code

pub mod error;
pub mod handlers;
pub mod response;
pub mod store;
pub mod types;
pub mod validation;

use axum::{
    routing::{get, post},
    Router,
};

use crate::config::WebhookConfig;
use crate::http::server::AppState;
use self::handlers::*;

pub use error::WebhookError;
pub use store::WebhookLog;
pub use types::{LogEntry, PayloadData};

/// Mount the webhook endpoint on the configured path.
///
/// With the read API disabled only POST is routed; every other method lands
/// on the method fallback. HEAD is routed explicitly because axum would
/// otherwise answer it with the GET handler.
pub fn setup_webhook_router(config: &WebhookConfig) -> Router<AppState> {
    let methods = if config.read_api {
        get(list_logs)
            .head(method_not_allowed)
            .delete(clear_logs)
            .post(receive_webhook)
    } else {
        post(receive_webhook)
    };

    Router::new().route(&config.path, methods.fallback(method_not_allowed))
}
