//! Completion-API configuration from environment variables.

use crate::error::AiError;
use std::env;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model to use.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Completion client configuration.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// API key sent as a bearer token.
    pub api_key: String,
    /// Model name (e.g., "gpt-4o").
    pub model: String,
    /// Base URL for the API, without the `/chat/completions` suffix.
    pub base_url: String,
}

impl AiConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `OPENAI_API_KEY`
    ///
    /// Optional:
    /// - `SOUSCHEF_AI_MODEL` (default: "gpt-4o")
    /// - `SOUSCHEF_AI_BASE_URL` (default: "https://api.openai.com/v1")
    pub fn from_env() -> Result<Self, AiError> {
        let api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| AiError::NotConfigured("OPENAI_API_KEY not set".to_string()))?;

        let model = env::var("SOUSCHEF_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let base_url =
            env::var("SOUSCHEF_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key,
            model,
            base_url,
        })
    }
}
