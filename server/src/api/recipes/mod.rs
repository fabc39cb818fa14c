pub mod create;
pub mod delete;
pub mod generate;
pub mod generate_public;
pub mod get;
pub mod improve;
pub mod list;
pub mod store;
pub mod update;

use crate::api::ErrorResponse;
use crate::models::{Recipe, User};
use crate::AppState;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use souschef_core::{AiError, GenerateError};
use utoipa::OpenApi;

/// Returns the router for /recipes endpoints (mounted at /recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes).post(create::create_recipe))
        .route("/generate", post(generate::generate_recipe))
        .route(
            "/generate-public",
            post(generate_public::generate_recipe_public),
        )
        .route(
            "/{id}",
            get(get::get_recipe)
                .put(update::update_recipe)
                .delete(delete::delete_recipe),
        )
        .route("/{id}/improve", post(improve::improve_recipe))
}

/// A caller may touch a recipe they own; superusers may touch any.
pub(crate) fn can_access(user: &User, recipe: &Recipe) -> bool {
    user.is_superuser || recipe.user_id == user.id
}

/// Translate a generation failure into a response. Upstream failures are
/// gateway errors; a completion that cannot be parsed or validated is a
/// server error. In every case nothing was persisted.
pub(crate) fn generate_error_response(err: GenerateError) -> Response {
    let (status, error) = match &err {
        GenerateError::Ai(AiError::NotConfigured(_)) => (
            StatusCode::SERVICE_UNAVAILABLE,
            "AI service unavailable".to_string(),
        ),
        GenerateError::Ai(ai) => (
            StatusCode::BAD_GATEWAY,
            format!("Completion API error: {}", ai),
        ),
        GenerateError::Extraction(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to extract recipe: {}", msg),
        ),
        GenerateError::InvalidRecipe(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Generated recipe is invalid: {}", msg),
        ),
    };

    tracing::error!(status = %status.as_u16(), "recipe generation failed: {}", err);

    (status, Json(ErrorResponse { error })).into_response()
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_recipes,
        get::get_recipe,
        create::create_recipe,
        update::update_recipe,
        delete::delete_recipe,
        generate::generate_recipe,
        generate_public::generate_recipe_public,
        improve::improve_recipe,
    ),
    components(schemas(
        create::CreateRecipeRequest,
        update::UpdateRecipeRequest,
        list::ListRecipesResponse,
        generate::GenerateRecipeRequest,
        generate_public::GeneratePublicRequest,
        improve::ImproveRecipeRequest,
        improve::ImprovedRecipe,
        improve::ImprovedLine,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn user(id: Uuid, is_superuser: bool) -> User {
        User {
            id,
            email: "someone@example.com".to_string(),
            hashed_password: String::new(),
            is_superuser,
            api_token_hash: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        }
    }

    fn recipe(user_id: Uuid) -> Recipe {
        Recipe {
            id: Uuid::new_v4(),
            user_id,
            title: "Pancakes".to_string(),
            description: "Fluffy".to_string(),
            preparation_time: 10,
            cook_time: Some(5),
            serves: 2,
            is_favorite: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn owner_can_access() {
        let id = Uuid::new_v4();
        assert!(can_access(&user(id, false), &recipe(id)));
    }

    #[test]
    fn non_owner_cannot_access() {
        assert!(!can_access(&user(Uuid::new_v4(), false), &recipe(Uuid::new_v4())));
    }

    #[test]
    fn superuser_can_access_any() {
        assert!(can_access(&user(Uuid::new_v4(), true), &recipe(Uuid::new_v4())));
    }
}
