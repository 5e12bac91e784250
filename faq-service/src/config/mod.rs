use crate::services::providers::gemini::{GeminiConfig, GEMINI_API_BASE};
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::path::PathBuf;

const DEFAULT_TEXT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_FAQ_DATA_PATH: &str = "faq_data.json";

#[derive(Debug, Clone, Deserialize)]
pub struct FaqConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub models: ModelConfig,
    pub google: GoogleConfig,
    pub dataset: DatasetConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Model used to rephrase answers (e.g., gemini-2.0-flash)
    pub text_model: String,
    /// Base URL of the generative language API
    pub api_base: String,
}

#[derive(Clone, Deserialize)]
pub struct GoogleConfig {
    pub api_key: String,
}

impl std::fmt::Debug for GoogleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleConfig")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    /// JSON file holding the FAQ catalog
    pub path: PathBuf,
}

impl FaqConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let api_key = get_env("GOOGLE_API_KEY", None, is_prod)?;
        if api_key.trim().is_empty() {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "GOOGLE_API_KEY is set but empty"
            )));
        }

        Ok(FaqConfig {
            common: common_config,
            models: ModelConfig {
                text_model: get_env("GENAI_TEXT_MODEL", Some(DEFAULT_TEXT_MODEL), is_prod)?,
                api_base: get_env("GEMINI_API_BASE", Some(GEMINI_API_BASE), is_prod)?,
            },
            google: GoogleConfig { api_key },
            dataset: DatasetConfig {
                path: get_env("FAQ_DATA_PATH", Some(DEFAULT_FAQ_DATA_PATH), is_prod)?.into(),
            },
        })
    }

    /// Settings for the Gemini completion client.
    pub fn gemini(&self) -> GeminiConfig {
        GeminiConfig {
            api_key: self.google.api_key.clone(),
            model: self.models.text_model.clone(),
            base_url: self.models.api_base.clone(),
        }
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
