pub mod ai;
pub mod error;
pub mod generate;
pub mod language;
pub mod prompts;
pub mod recipe;

pub use ai::{
    create_client_from_env, CannedReply, ChatMessage, CompletionClient, CompletionRequest,
    CompletionResponse, FakeClient, FunctionCall, FunctionSpec, OpenAiClient, Role, Usage,
};
pub use error::{AiError, GenerateError};
pub use generate::{generate_recipe, improve_recipe};
pub use language::LanguageProfile;
pub use recipe::{DirectionDraft, IngredientDraft, RecipeDraft};
