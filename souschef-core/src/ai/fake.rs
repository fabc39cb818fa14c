//! Fake completion client for tests and offline development.
//!
//! Replies are matched by checking whether any message in the request
//! contains a registered substring, so tests run without network access.

use super::types::{CompletionRequest, CompletionResponse, FunctionCall, Usage};
use super::CompletionClient;
use crate::error::AiError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// A canned reply returned by [`FakeClient`].
#[derive(Debug, Clone)]
pub enum CannedReply {
    /// Answer with a function call carrying these raw JSON arguments.
    FunctionArgs(String),
    /// Answer with free text and no function call.
    Content(String),
}

/// A fake completion client.
///
/// If no registered pattern matches, the default reply is returned, or an
/// error if none is set.
#[derive(Debug)]
pub struct FakeClient {
    /// Map of prompt substring -> reply.
    replies: RwLock<HashMap<String, CannedReply>>,
    default_reply: Option<CannedReply>,
}

impl FakeClient {
    /// Create a new FakeClient with no registered replies.
    pub fn new() -> Self {
        Self {
            replies: RwLock::new(HashMap::new()),
            default_reply: None,
        }
    }

    /// Create a FakeClient that replies with function-call arguments for
    /// prompts containing a substring.
    pub fn with_arguments(prompt_contains: &str, arguments: &str) -> Self {
        let client = Self::new();
        client.add_reply(
            prompt_contains,
            CannedReply::FunctionArgs(arguments.to_string()),
        );
        client
    }

    /// Create a FakeClient that replies with free text for prompts
    /// containing a substring.
    pub fn with_content(prompt_contains: &str, content: &str) -> Self {
        let client = Self::new();
        client.add_reply(prompt_contains, CannedReply::Content(content.to_string()));
        client
    }

    /// Register a reply for prompts containing a specific substring.
    pub fn add_reply(&self, prompt_contains: &str, reply: CannedReply) {
        self.replies
            .write()
            .unwrap()
            .insert(prompt_contains.to_string(), reply);
    }

    /// Set the default reply when no pattern matches.
    pub fn with_default_reply(mut self, reply: CannedReply) -> Self {
        self.default_reply = Some(reply);
        self
    }

    /// A client that always answers with a plausible, well-formed recipe.
    /// Used as the "fake" provider for development without an API key.
    pub fn with_sample_recipe() -> Self {
        Self::new().with_default_reply(CannedReply::FunctionArgs(
            r#"{
                "title": "Weeknight Tomato Pasta",
                "description": "A quick pantry pasta with a bright tomato sauce.",
                "preparation_time": 10,
                "cook_time": 20,
                "serves": 2,
                "ingredients": [
                    {"index": 1, "content": "200 g spaghetti"},
                    {"index": 2, "content": "1 can crushed tomatoes"},
                    {"index": 3, "content": "2 cloves garlic, sliced"}
                ],
                "directions": [
                    {"index": 1, "content": "Cook the spaghetti in salted water."},
                    {"index": 2, "content": "Simmer the tomatoes with the garlic."},
                    {"index": 3, "content": "Toss the pasta in the sauce and serve."}
                ]
            }"#
            .to_string(),
        ))
    }

    fn reply_to_response(reply: &CannedReply, function_name: Option<&str>) -> CompletionResponse {
        match reply {
            CannedReply::FunctionArgs(arguments) => CompletionResponse {
                content: None,
                function_call: Some(FunctionCall {
                    name: function_name.unwrap_or("create_recipe").to_string(),
                    arguments: arguments.clone(),
                }),
                usage: Usage::default(),
            },
            CannedReply::Content(content) => CompletionResponse {
                content: Some(content.clone()),
                function_call: None,
                usage: Usage::default(),
            },
        }
    }
}

impl Default for FakeClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionClient for FakeClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AiError> {
        let function_name = request.function.as_ref().map(|f| f.name.as_str());

        let prompt_lower = request
            .messages
            .iter()
            .map(|m| m.content.to_lowercase())
            .collect::<Vec<_>>()
            .join("\n");

        let replies = self.replies.read().unwrap();
        for (pattern, reply) in replies.iter() {
            if prompt_lower.contains(&pattern.to_lowercase()) {
                return Ok(Self::reply_to_response(reply, function_name));
            }
        }

        match &self.default_reply {
            Some(reply) => Ok(Self::reply_to_response(reply, function_name)),
            None => {
                let preview: String = prompt_lower.chars().take(100).collect();
                Err(AiError::RequestFailed(format!(
                    "FakeClient: no reply configured for prompt (first 100 chars): {}",
                    preview
                )))
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::ChatMessage;

    fn request(prompt: &str) -> CompletionRequest {
        CompletionRequest {
            messages: vec![ChatMessage::user(prompt)],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn matches_registered_substring() {
        let client = FakeClient::with_content("hello", "world");
        let response = client.complete(request("Say hello please")).await.unwrap();
        assert_eq!(response.content.as_deref(), Some("world"));
        assert!(response.function_call.is_none());
    }

    #[tokio::test]
    async fn matching_is_case_insensitive() {
        let client = FakeClient::with_content("HELLO", "world");
        let response = client.complete(request("hello there")).await.unwrap();
        assert_eq!(response.content.as_deref(), Some("world"));
    }

    #[tokio::test]
    async fn errors_without_match_or_default() {
        let client = FakeClient::new();
        assert!(client.complete(request("random prompt")).await.is_err());
    }

    #[tokio::test]
    async fn function_reply_uses_requested_name() {
        let client = FakeClient::with_arguments("chili", r#"{"title": "Chili"}"#);
        let response = client
            .complete(CompletionRequest {
                messages: vec![ChatMessage::user("vegan chili")],
                function: Some(crate::ai::FunctionSpec {
                    name: "create_recipe".to_string(),
                    description: String::new(),
                    parameters: serde_json::json!({}),
                }),
                ..Default::default()
            })
            .await
            .unwrap();

        let call = response.function_call.unwrap();
        assert_eq!(call.name, "create_recipe");
        assert_eq!(call.arguments, r#"{"title": "Chili"}"#);
    }
}
