//! Concurrent writers against a running receiver.

use serde_json::json;
use std::time::{Duration, Instant};
use webhook_log::webhook::response::LogsResponse;
use webhook_log::ReceiverConfig;

mod common;

#[tokio::test]
async fn test_concurrent_posts_respect_capacity() {
    let mut config = ReceiverConfig::default();
    config.webhook.capacity = 100;
    let receiver = common::start_receiver(config).await;
    let client = common::client();

    let concurrency = 20;
    let requests_per_task = 25;
    let start = Instant::now();

    let mut tasks = Vec::new();
    for task in 0..concurrency {
        let client = client.clone();
        let url = receiver.url();
        tasks.push(tokio::spawn(async move {
            let mut accepted = 0;
            for n in 0..requests_per_task {
                let res = client
                    .post(&url)
                    .json(&json!({"data": format!("task-{task}-{n}"), "timestamp": n}))
                    .send()
                    .await;
                if matches!(res, Ok(ref r) if r.status().is_success()) {
                    accepted += 1;
                }
            }
            accepted
        }));
    }

    let mut accepted = 0;
    for task in tasks {
        accepted += task.await.unwrap();
    }
    let duration = start.elapsed();

    assert_eq!(accepted, concurrency * requests_per_task);
    assert!(duration < Duration::from_secs(30), "took {duration:?}");

    let logs: LogsResponse = client.get(receiver.url()).send().await.unwrap().json().await.unwrap();
    assert_eq!(logs.count, 100);
    assert_eq!(logs.logs.len(), 100);

    // Each task writes in order, so its entries must appear newest first.
    for task in 0..concurrency {
        let prefix = format!("task-{task}-");
        let seq: Vec<u64> = logs
            .logs
            .iter()
            .filter(|e| e.payload.data.starts_with(&prefix))
            .map(|e| e.payload.timestamp.as_u64().unwrap())
            .collect();
        assert!(seq.windows(2).all(|w| w[0] > w[1]), "task {task}: {seq:?}");
    }
}
