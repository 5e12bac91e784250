//! Mock provider implementation for testing.

use super::{FinishReason, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use tokio::sync::Mutex;

/// What the mock does when asked to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehavior {
    /// Reply with `Mock response for: <prompt>`.
    Echo,
    NetworkFailure,
    RateLimited,
    Unauthorized,
    EmptyResponse,
}

/// Mock text provider for testing.
pub struct MockTextProvider {
    behavior: MockBehavior,
    prompts: Mutex<Vec<String>>,
}

impl MockTextProvider {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn echo() -> Self {
        Self::new(MockBehavior::Echo)
    }

    /// Every prompt received so far, in call order.
    pub async fn prompts(&self) -> Vec<String> {
        self.prompts.lock().await.clone()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        self.prompts.lock().await.push(prompt.to_string());

        match self.behavior {
            MockBehavior::Echo => Ok(ProviderResponse {
                text: format!("Mock response for: {}", prompt),
                input_tokens: prompt.len() as i32 / 4,
                output_tokens: 10,
                finish_reason: FinishReason::Complete,
            }),
            MockBehavior::NetworkFailure => Err(ProviderError::NetworkError(
                "connection refused (mock)".to_string(),
            )),
            MockBehavior::RateLimited => Err(ProviderError::RateLimited),
            MockBehavior::Unauthorized => Err(ProviderError::Unauthorized(
                "API key not valid (mock)".to_string(),
            )),
            MockBehavior::EmptyResponse => Err(ProviderError::EmptyResponse),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Echo => Ok(()),
            MockBehavior::NetworkFailure => Err(ProviderError::NetworkError(
                "connection refused (mock)".to_string(),
            )),
            _ => Err(ProviderError::NotConfigured(
                "Mock text provider not healthy".to_string(),
            )),
        }
    }
}
