//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and middleware produce:
//!     → logging.rs (structured log events, stdout)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Accepted payloads are logged as serialized JSON
//! - Request ID flows through the trace span of every request
//! - Metric macros are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
