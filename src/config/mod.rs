//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ReceiverConfig (validated, immutable)
//!     → cloned into the HTTP server at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::ReceiverConfig;
pub use schema::ListenerConfig;
pub use schema::WebhookConfig;
pub use schema::TimeoutConfig;
pub use schema::LimitsConfig;
pub use schema::ObservabilityConfig;
