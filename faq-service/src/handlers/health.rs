use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use service_core::error::AppError;

use crate::startup::AppState;

/// Health check endpoint for liveness probes.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "faq-service",
        "version": env!("CARGO_PKG_VERSION"),
        "faq_entries": state.catalog.len()
    }))
}

/// Readiness check: the completion provider must be reachable.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.text_provider.health_check().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Completion provider not ready");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(anyhow::anyhow!("No route for {}", uri.path()))
}
