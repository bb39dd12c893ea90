//! In-memory webhook receiver library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod webhook;

pub use config::ReceiverConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use webhook::{LogEntry, PayloadData, WebhookLog};
