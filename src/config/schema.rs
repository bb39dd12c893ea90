//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Default number of entries retained by the webhook log.
pub const DEFAULT_LOG_CAPACITY: usize = 500;

/// Root configuration for the webhook receiver.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ReceiverConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Webhook endpoint behavior.
    pub webhook: WebhookConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Request size limits.
    pub limits: LimitsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Webhook endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WebhookConfig {
    /// Path the endpoint is mounted on.
    pub path: String,

    /// Maximum number of log entries kept in memory.
    pub capacity: usize,

    /// Serve GET (list) and DELETE (clear) alongside POST.
    /// When disabled every non-POST method is rejected.
    pub read_api: bool,

    /// Add a top-level `timestamp` to every response body.
    pub response_timestamp: bool,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            path: "/api/webhook".to_string(),
            capacity: DEFAULT_LOG_CAPACITY,
            read_api: true,
            response_timestamp: false,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Request size limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum request body size in bytes.
    pub max_body_size: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_size: 1024 * 1024, // 1MB
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReceiverConfig::default();
        assert_eq!(config.webhook.capacity, 500);
        assert_eq!(config.webhook.path, "/api/webhook");
        assert!(config.webhook.read_api);
        assert!(!config.webhook.response_timestamp);
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ReceiverConfig = toml::from_str(
            r#"
            [webhook]
            capacity = 10
            read_api = false
            "#,
        )
        .unwrap();

        assert_eq!(config.webhook.capacity, 10);
        assert!(!config.webhook.read_api);
        assert_eq!(config.webhook.path, "/api/webhook");
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
        assert_eq!(config.timeouts.request_secs, 30);
    }
}
