//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the webhook endpoint
//! - Wire up middleware (tracing, request ID, timeout, body limit, metrics)
//! - Own the webhook log and inject it into handlers
//! - Serve on a listener until shutdown is signalled

use axum::{body::Body, extract::DefaultBodyLimit, middleware, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ReceiverConfig;
use crate::http::request::{make_request_span, MakeRequestUuidV4, X_REQUEST_ID};
use crate::observability::metrics;
use crate::webhook::{self, response::Responder, WebhookLog};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub log: Arc<WebhookLog>,
    pub responder: Responder,
    /// Whether GET and DELETE are served.
    pub read_api: bool,
}

/// HTTP server for the webhook receiver.
pub struct HttpServer {
    router: Router,
    config: ReceiverConfig,
    log: Arc<WebhookLog>,
}

impl HttpServer {
    /// Create a new HTTP server with a fresh log sized from the configuration.
    pub fn new(config: ReceiverConfig) -> Self {
        let log = Arc::new(WebhookLog::new(config.webhook.capacity));
        Self::with_log(config, log)
    }

    /// Create a server around an existing log.
    pub fn with_log(config: ReceiverConfig, log: Arc<WebhookLog>) -> Self {
        let state = AppState {
            log: log.clone(),
            responder: Responder::new(config.webhook.response_timestamp),
            read_api: config.webhook.read_api,
        };

        let router = Self::build_router(&config, state);
        Self {
            router,
            config,
            log,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ReceiverConfig, state: AppState) -> Router {
        webhook::setup_webhook_router(&config.webhook)
            .with_state(state)
            .layer(DefaultBodyLimit::max(config.limits.max_body_size))
            .layer(middleware::from_fn(metrics::track_requests))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuidV4))
    }

    /// Run the server until a shutdown signal arrives, then drain in-flight
    /// requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            path = %self.config.webhook.path,
            capacity = self.log.capacity(),
            read_api = self.config.webhook.read_api,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router, for driving the server in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Handle to the log this server writes to.
    pub fn log(&self) -> Arc<WebhookLog> {
        self.log.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ReceiverConfig {
        &self.config
    }
}
