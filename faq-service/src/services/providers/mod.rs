//! Completion provider abstractions and implementations.
//!
//! Request handlers only see [`TextProvider`], so the Gemini backend can be
//! swapped for the deterministic mock in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Content filtered")]
    ContentFiltered,

    #[error("Empty response from provider")]
    EmptyResponse,
}

/// Reason why generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Complete,
    Length,
    ContentFilter,
    Other,
}

/// Generated text plus usage accounting.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    /// Generated text; never empty.
    pub text: String,

    /// Input tokens consumed.
    pub input_tokens: i32,

    /// Output tokens generated.
    pub output_tokens: i32,

    pub finish_reason: FinishReason,
}

/// Trait for text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a completion for `prompt`. Single attempt, no retry.
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;
}

impl From<ProviderError> for service_core::error::AppError {
    fn from(err: ProviderError) -> Self {
        use service_core::error::AppError;

        match err {
            ProviderError::RateLimited => AppError::ServiceUnavailable(None),
            ProviderError::NetworkError(_)
            | ProviderError::ApiError(_)
            | ProviderError::ContentFiltered
            | ProviderError::EmptyResponse => AppError::BadGateway(err.to_string()),
            ProviderError::NotConfigured(_)
            | ProviderError::InvalidRequest(_)
            | ProviderError::Unauthorized(_) => AppError::InternalError(anyhow::Error::new(err)),
        }
    }
}
