//! Application lifecycle tests: dataset loading and a live HTTP server.

mod common;

use common::{test_config, test_entries, write_dataset, HOURS_ANSWER};
use faq_service::services::providers::mock::MockTextProvider;
use faq_service::startup::Application;
use reqwest::Client;
use service_core::error::AppError;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tempfile::NamedTempFile;

const UNUSED_API_BASE: &str = "http://127.0.0.1:9/v1beta";

/// Spawn the application on a random port and return the port number.
async fn spawn_app(dataset: &Path) -> (u16, Arc<MockTextProvider>) {
    let provider = Arc::new(MockTextProvider::echo());
    let app =
        Application::build_with_provider(test_config(dataset, UNUSED_API_BASE), provider.clone())
            .await
            .expect("Failed to build application");

    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    (port, provider)
}

#[tokio::test]
async fn missing_dataset_fails_startup() {
    let config = test_config(Path::new("/no/such/dir/faq_data.json"), UNUSED_API_BASE);
    let result =
        Application::build_with_provider(config, Arc::new(MockTextProvider::echo())).await;
    assert!(matches!(result, Err(AppError::ConfigError(_))));
}

#[tokio::test]
async fn empty_dataset_fails_startup() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[]").unwrap();

    let result = Application::build_with_provider(
        test_config(file.path(), UNUSED_API_BASE),
        Arc::new(MockTextProvider::echo()),
    )
    .await;
    assert!(matches!(result, Err(AppError::ConfigError(_))));
}

#[tokio::test]
async fn malformed_dataset_fails_startup() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"[{"question": "Q?", "answer": 7}]"#).unwrap();

    let result = Application::build_with_provider(
        test_config(file.path(), UNUSED_API_BASE),
        Arc::new(MockTextProvider::echo()),
    )
    .await;
    assert!(matches!(result, Err(AppError::ConfigError(_))));
}

#[tokio::test]
async fn blank_api_key_fails_startup() {
    let dataset = write_dataset(&test_entries());
    let mut config = test_config(dataset.path(), UNUSED_API_BASE);
    config.google.api_key = String::new();

    let result = Application::build(config).await;
    assert!(matches!(result, Err(AppError::ConfigError(_))));
}

#[tokio::test]
async fn build_with_gemini_provider_loads_catalog() {
    let dataset = write_dataset(&test_entries());

    let app = Application::build(test_config(dataset.path(), UNUSED_API_BASE))
        .await
        .expect("Failed to build application");

    assert_ne!(app.port(), 0);
    assert_eq!(app.state().catalog.len(), test_entries().len());
}

#[tokio::test]
async fn serves_ask_over_http() {
    let dataset = write_dataset(&test_entries());
    let (port, provider) = spawn_app(dataset.path()).await;

    let response = Client::new()
        .post(format!("http://127.0.0.1:{}/ask", port))
        .json(&serde_json::json!({ "question": "what r ur hours" }))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(!body["response"].as_str().unwrap().is_empty());
    assert!(provider.prompts().await[0].contains(HOURS_ANSWER));
}

#[tokio::test]
async fn health_check_returns_ok() {
    let dataset = write_dataset(&test_entries());
    let (port, _) = spawn_app(dataset.path()).await;
    let client = Client::new();

    let response = client
        .get(format!("http://127.0.0.1:{}/health", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "faq-service");
    assert_eq!(body["faq_entries"], 3);

    let response = client
        .get(format!("http://127.0.0.1:{}/ready", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}
