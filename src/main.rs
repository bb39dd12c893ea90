//! Webhook receiver.
//!
//! Accepts JSON payloads on a single endpoint, keeps the most recent ones in
//! a bounded in-memory log, and serves that log back for inspection.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌────────────────────────────────────────────┐
//!                    │               WEBHOOK RECEIVER             │
//!                    │                                            │
//!   POST/GET/DELETE  │  ┌─────────┐    ┌──────────┐    ┌───────┐  │
//!   ─────────────────┼─▶│  http   │───▶│ webhook  │───▶│  log  │  │
//!                    │  │ server  │    │ handlers │    │ store │  │
//!   JSON envelope    │  └─────────┘    └──────────┘    └───────┘  │
//!   ◀────────────────┼──────────────────────┘                     │
//!                    │                                            │
//!                    │  config · observability · lifecycle        │
//!                    └────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;

use webhook_log::config::{load_config, ReceiverConfig};
use webhook_log::lifecycle::startup;
use webhook_log::observability::logging;

#[derive(Parser)]
#[command(name = "webhook-log")]
#[command(about = "Receive webhooks and keep the latest ones in memory", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ReceiverConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config_file = ?cli.config,
        bind_address = %config.listener.bind_address,
        capacity = config.webhook.capacity,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
