//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use webhook_log::{HttpServer, ReceiverConfig, Shutdown};

/// A receiver running on an ephemeral loopback port.
pub struct TestReceiver {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
}

impl TestReceiver {
    /// Webhook endpoint URL for this receiver.
    pub fn url(&self) -> String {
        format!("http://{}/api/webhook", self.addr)
    }
}

impl Drop for TestReceiver {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a receiver with the given configuration.
pub async fn start_receiver(config: ReceiverConfig) -> TestReceiver {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Give the accept loop a moment to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    TestReceiver { addr, shutdown }
}

/// HTTP client that bypasses any system proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
