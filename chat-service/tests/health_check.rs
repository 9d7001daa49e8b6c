//! Integration tests for chat-service liveness.
//!
//! Run with: cargo test -p chat-service --test health_check

use chat_service::config::Settings;
use chat_service::startup::Application;
use reqwest::Client;
use std::time::Duration;

/// Spawn the application on a random port and return the port number.
async fn spawn_app() -> u16 {
    let settings = Settings {
        host: "127.0.0.1".to_string(),
        port: 0,
        log_level: "info".to_string(),
        ollama: Default::default(),
        cors: Default::default(),
    };

    let app = Application::build(settings)
        .await
        .expect("Failed to build application");

    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    port
}

#[tokio::test]
async fn health_check_returns_ok() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/health", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "chat-service");
}
