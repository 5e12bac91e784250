//! Shared helpers for faq-service integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use faq_service::config::{DatasetConfig, FaqConfig, GoogleConfig, ModelConfig};
use faq_service::models::{FaqCatalog, FaqEntry};
use faq_service::services::providers::mock::{MockBehavior, MockTextProvider};
use faq_service::startup::{build_router, AppState};
use http_body_util::BodyExt;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tempfile::NamedTempFile;
use tower::util::ServiceExt;

pub const HOURS_QUESTION: &str = "What are your business hours?";
pub const HOURS_ANSWER: &str = "We are open 9am-5pm, Monday to Friday.";

pub fn test_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry::new(HOURS_QUESTION, HOURS_ANSWER),
        FaqEntry::new(
            "How do I reset my password?",
            "Use the 'Forgot password' link on the login page.",
        ),
        FaqEntry::new(
            "Do you offer refunds?",
            "Refunds are available within 30 days of purchase.",
        ),
    ]
}

pub fn test_catalog() -> FaqCatalog {
    FaqCatalog::from_entries(test_entries()).expect("Test catalog is valid")
}

/// Router backed by the test catalog and a mock provider.
pub fn test_app(behavior: MockBehavior) -> (Router, Arc<MockTextProvider>) {
    let provider = Arc::new(MockTextProvider::new(behavior));
    let state = AppState::new(test_catalog(), provider.clone());
    (build_router(state), provider)
}

pub fn write_dataset(entries: &[FaqEntry]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp dataset");
    let json = serde_json::to_string(entries).expect("Failed to serialize dataset");
    file.write_all(json.as_bytes())
        .expect("Failed to write temp dataset");
    file
}

pub fn test_config(dataset: &Path, api_base: &str) -> FaqConfig {
    FaqConfig {
        common: service_core::config::Config {
            port: 0,
            log_level: "debug".to_string(),
        },
        models: ModelConfig {
            text_model: "gemini-2.0-flash".to_string(),
            api_base: api_base.to_string(),
        },
        google: GoogleConfig {
            api_key: "test-api-key".to_string(),
        },
        dataset: DatasetConfig {
            path: dataset.to_path_buf(),
        },
    }
}

pub async fn post_ask(app: Router, body: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/ask")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}
