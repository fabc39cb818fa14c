//! Recipe generation and improvement via the completion API.
//!
//! Both flows bind the model output to the `create_recipe` function schema,
//! extract the structured arguments, and validate them against the same
//! constraints as a manual creation payload. Nothing here touches storage;
//! callers persist the returned draft through the normal creation path.

use crate::ai::{ChatMessage, CompletionClient, CompletionRequest, FunctionSpec};
use crate::error::GenerateError;
use crate::language::LanguageProfile;
use crate::prompts;
use crate::recipe::RecipeDraft;

const MAX_TOKENS: u32 = 4096;

/// The function-call contract the model must answer with.
pub fn recipe_function() -> FunctionSpec {
    FunctionSpec {
        name: "create_recipe".to_string(),
        description: "Generate a detailed recipe in JSON format".to_string(),
        parameters: serde_json::json!({
            "type": "object",
            "properties": {
                "title": {"type": "string"},
                "description": {"type": "string"},
                "preparation_time": {"type": "integer"},
                "cook_time": {"type": "integer"},
                "serves": {"type": "integer"},
                "ingredients": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "content": {"type": "string"},
                            "index": {"type": "integer"},
                        },
                        "required": ["content", "index"],
                    },
                },
                "directions": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "content": {"type": "string"},
                            "index": {"type": "integer"},
                        },
                        "required": ["content", "index"],
                    },
                },
            },
            "required": [
                "title",
                "description",
                "preparation_time",
                "cook_time",
                "serves",
                "ingredients",
                "directions",
            ],
        }),
    }
}

/// Generate a new recipe from a free-text request.
///
/// The language tag selects the output language and unit system; an
/// unrecognized tag falls back to English with imperial units.
pub async fn generate_recipe(
    client: &dyn CompletionClient,
    user_input: &str,
    language: &str,
) -> Result<RecipeDraft, GenerateError> {
    let profile = LanguageProfile::resolve(language);

    let request = CompletionRequest {
        messages: vec![
            ChatMessage::system(prompts::render_generate_system_prompt(profile)),
            ChatMessage::user(prompts::render_generate_user_prompt(profile, user_input)),
        ],
        function: Some(recipe_function()),
        max_tokens: Some(MAX_TOKENS),
        temperature: None,
    };

    let response = client.complete(request).await?;
    extract_draft(response.function_call, response.content.as_deref())
}

/// Revise an existing recipe according to free-text instructions.
///
/// The original recipe is serialized into the prompt; the model returns the
/// complete recipe with the same field set, modified.
pub async fn improve_recipe(
    client: &dyn CompletionClient,
    original: &RecipeDraft,
    user_input: &str,
) -> Result<RecipeDraft, GenerateError> {
    let recipe_json = serde_json::to_string(original)
        .map_err(|e| GenerateError::Extraction(format!("Failed to serialize recipe: {}", e)))?;

    let request = CompletionRequest {
        messages: vec![
            ChatMessage::system(prompts::render_improve_system_prompt()),
            ChatMessage::user(prompts::render_improve_user_prompt(&recipe_json, user_input)),
        ],
        function: Some(recipe_function()),
        max_tokens: Some(MAX_TOKENS),
        temperature: None,
    };

    let response = client.complete(request).await?;
    extract_draft(response.function_call, response.content.as_deref())
}

/// Pull the structured arguments out of the model's answer and validate
/// them. The model response is untrusted input: anything that does not
/// conform to the creation schema is rejected, never coerced.
fn extract_draft(
    function_call: Option<crate::ai::FunctionCall>,
    content: Option<&str>,
) -> Result<RecipeDraft, GenerateError> {
    let call = function_call.ok_or_else(|| {
        tracing::warn!(
            has_content = content.is_some(),
            "completion carried no function call"
        );
        GenerateError::Extraction("No function call in completion".to_string())
    })?;

    let draft: RecipeDraft = serde_json::from_str(&call.arguments)
        .map_err(|e| GenerateError::Extraction(format!("Invalid arguments JSON: {}", e)))?;

    draft.validate().map_err(GenerateError::InvalidRecipe)?;

    Ok(draft)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_schema_requires_all_fields() {
        let spec = recipe_function();
        assert_eq!(spec.name, "create_recipe");

        let required = spec.parameters["required"].as_array().unwrap();
        for field in [
            "title",
            "description",
            "preparation_time",
            "cook_time",
            "serves",
            "ingredients",
            "directions",
        ] {
            assert!(required.iter().any(|v| v == field), "missing {}", field);
        }

        let ingredient_required =
            spec.parameters["properties"]["ingredients"]["items"]["required"]
                .as_array()
                .unwrap();
        assert!(ingredient_required.iter().any(|v| v == "content"));
        assert!(ingredient_required.iter().any(|v| v == "index"));
    }
}
