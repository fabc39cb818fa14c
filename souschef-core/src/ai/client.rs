//! OpenAI-compatible chat-completion client.

use super::config::AiConfig;
use super::types::{
    ChatMessage, CompletionRequest, CompletionResponse, FunctionCall, FunctionSpec, Usage,
};
use crate::error::AiError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trait for chat-completion providers.
///
/// Implementations should be stateless after construction and thread-safe.
#[async_trait]
pub trait CompletionClient: Send + Sync + fmt::Debug {
    /// Send a completion request and return the model's answer.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AiError>;

    /// Get the provider name (e.g., "openai", "fake").
    fn provider_name(&self) -> &'static str;

    /// Get the model name (e.g., "gpt-4o").
    fn model_name(&self) -> &str;
}

/// Client for OpenAI-compatible `/chat/completions` endpoints.
#[derive(Debug)]
pub struct OpenAiClient {
    config: AiConfig,
    client: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(config: AiConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

/// Wire format for the completions request.
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    functions: Option<Vec<&'a FunctionSpec>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    function_call: Option<FunctionTarget<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct FunctionTarget<'a> {
    name: &'a str,
}

/// Wire format for the completions response.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
    function_call: Option<FunctionCall>,
}

/// Error body returned by OpenAI-compatible endpoints.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AiError> {
        let wire_request = ChatCompletionRequest {
            model: &self.config.model,
            messages: &request.messages,
            functions: request.function.as_ref().map(|f| vec![f]),
            function_call: request
                .function
                .as_ref()
                .map(|f| FunctionTarget { name: &f.name }),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        tracing::debug!(
            model = %self.config.model,
            forced_function = wire_request.function_call.as_ref().map(|f| f.name),
            "calling completion API"
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| AiError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();

        if status == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(AiError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| AiError::RequestFailed(e.to_string()))?;

        if status != 200 {
            if let Ok(error_response) = serde_json::from_str::<ApiErrorResponse>(&body) {
                return Err(AiError::ApiError {
                    status,
                    message: error_response.error.message,
                });
            }
            return Err(AiError::ApiError {
                status,
                message: body,
            });
        }

        let response: ChatCompletionResponse =
            serde_json::from_str(&body).map_err(|e| AiError::ParseError(e.to_string()))?;

        let message = response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message)
            .ok_or_else(|| AiError::ParseError("No choices in response".to_string()))?;

        Ok(CompletionResponse {
            content: message.content,
            function_call: message.function_call,
            usage: response.usage,
        })
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
