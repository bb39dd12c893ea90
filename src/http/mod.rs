//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID generation, request span)
//!     → webhook handlers
//!     → Send to client (request ID echoed back)
//! ```

pub mod request;
pub mod server;

pub use request::{make_request_span, MakeRequestUuidV4, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
