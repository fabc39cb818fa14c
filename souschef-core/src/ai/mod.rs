//! Completion-API client abstraction.
//!
//! This module provides:
//! - `CompletionClient` trait for abstracting chat-completion providers
//! - `OpenAiClient` implementation for OpenAI-compatible endpoints
//! - `FakeClient` for tests and offline development
//! - Configuration via environment variables
//!
//! # Configuration
//!
//! - `SOUSCHEF_AI_PROVIDER` (optional): "openai" (default) or "fake"
//! - `OPENAI_API_KEY` (required for the openai provider)
//! - `SOUSCHEF_AI_MODEL` (optional): model name, default "gpt-4o"
//! - `SOUSCHEF_AI_BASE_URL` (optional): API base URL, default
//!   "https://api.openai.com/v1"

mod client;
mod config;
mod fake;
mod types;

pub use client::{CompletionClient, OpenAiClient};
pub use config::AiConfig;
pub use fake::{CannedReply, FakeClient};
pub use types::{
    ChatMessage, CompletionRequest, CompletionResponse, FunctionCall, FunctionSpec, Role, Usage,
};

use crate::error::AiError;
use std::sync::Arc;

/// Build a completion client from environment variables.
///
/// The returned client holds only immutable configuration and a connection
/// pool; construct it once at process start and share it across requests.
pub fn create_client_from_env() -> Result<Arc<dyn CompletionClient>, AiError> {
    let provider =
        std::env::var("SOUSCHEF_AI_PROVIDER").unwrap_or_else(|_| "openai".to_string());

    match provider.as_str() {
        "openai" => {
            let config = AiConfig::from_env()?;
            Ok(Arc::new(OpenAiClient::new(config)))
        }
        "fake" => Ok(Arc::new(FakeClient::with_sample_recipe())),
        other => Err(AiError::NotConfigured(format!(
            "Unknown provider: {}",
            other
        ))),
    }
}
