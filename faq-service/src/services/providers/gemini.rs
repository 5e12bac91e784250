//! Gemini AI provider implementation.
//!
//! Sends prompts to Google's `generateContent` endpoint and returns the
//! first candidate's text.

use super::{FinishReason, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Gemini API base URL.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

const API_KEY_HEADER: &str = "x-goog-api-key";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Gemini provider configuration.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Gemini text provider.
pub struct GeminiTextProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiTextProvider {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        if config.api_key.trim().is_empty() {
            return Err(ProviderError::NotConfigured(
                "Gemini API key not configured".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                ProviderError::NotConfigured(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Build the API URL for the given model method.
    fn api_url(&self, method: &str) -> String {
        format!(
            "{}/models/{}:{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.model,
            method
        )
    }
}

/// Map a non-success upstream status to a provider error.
fn status_error(status: StatusCode, body: &str) -> ProviderError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimited,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            ProviderError::Unauthorized(format!("Gemini API rejected credentials: {}", status))
        }
        // Gemini reports a bad key as 400 with this reason.
        StatusCode::BAD_REQUEST if body.contains("API_KEY_INVALID") => {
            ProviderError::Unauthorized("Gemini API key is invalid".to_string())
        }
        _ => ProviderError::ApiError(format!("Gemini API error {}: {}", status, body)),
    }
}

fn finish_reason(raw: Option<&str>) -> FinishReason {
    match raw {
        Some("STOP") | None => FinishReason::Complete,
        Some("MAX_TOKENS") => FinishReason::Length,
        Some("SAFETY") | Some("PROHIBITED_CONTENT") | Some("BLOCKLIST") => {
            FinishReason::ContentFilter
        }
        Some(_) => FinishReason::Other,
    }
}

#[async_trait]
impl TextProvider for GeminiTextProvider {
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        if prompt.is_empty() {
            return Err(ProviderError::InvalidRequest(
                "Prompt must not be empty".to_string(),
            ));
        }

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![ContentPart {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(self.api_url("generateContent"))
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(status_error(status, &error_text));
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ApiError(format!("Failed to parse response: {}", e)))?;

        let candidate = match api_response.candidates.first() {
            Some(candidate) => candidate,
            None if api_response
                .prompt_feedback
                .as_ref()
                .is_some_and(|f| f.block_reason.is_some()) =>
            {
                return Err(ProviderError::ContentFiltered);
            }
            None => return Err(ProviderError::EmptyResponse),
        };

        let finish_reason = finish_reason(candidate.finish_reason.as_deref());
        if finish_reason == FinishReason::ContentFilter {
            return Err(ProviderError::ContentFiltered);
        }

        let text: String = candidate
            .content
            .as_ref()
            .map(|c| {
                c.parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(ProviderError::EmptyResponse);
        }

        let usage = api_response.usage_metadata.unwrap_or_default();

        Ok(ProviderResponse {
            text,
            input_tokens: usage.prompt_token_count.unwrap_or(0),
            output_tokens: usage.candidates_token_count.unwrap_or(0),
            finish_reason,
        })
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        // Listing models verifies both reachability and the key.
        let url = format!("{}/models", self.config.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(status_error(status, &error_text))
        }
    }
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContentPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    prompt_token_count: Option<i32>,
    candidates_token_count: Option<i32>,
}
