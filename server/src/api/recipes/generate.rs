use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::get_conn;
use crate::types::RecipePublic;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GenerateRecipeRequest {
    /// Free-text description of the recipe to generate
    pub user_input: String,
    /// Language tag selecting output language and unit system (e.g. "en", "fr")
    pub language: String,
}

#[utoipa::path(
    post,
    path = "/recipes/generate",
    tag = "recipes",
    request_body = GenerateRecipeRequest,
    responses(
        (status = 200, description = "Generated recipe, persisted under the caller", body = RecipePublic),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Completion could not be parsed or validated", body = ErrorResponse),
        (status = 502, description = "Completion API failure", body = ErrorResponse),
        (status = 503, description = "AI service unavailable", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn generate_recipe(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(request): Json<GenerateRecipeRequest>,
) -> impl IntoResponse {
    let Some(client) = state.ai.clone() else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "AI service unavailable".to_string(),
            }),
        )
            .into_response();
    };

    // The write happens only after the completion parsed and validated; a
    // failure here persists nothing.
    let draft = match souschef_core::generate_recipe(
        client.as_ref(),
        &request.user_input,
        &request.language,
    )
    .await
    {
        Ok(draft) => draft,
        Err(e) => return super::generate_error_response(e),
    };

    let mut conn = get_conn!(state.pool);

    let recipe_id = match super::store::insert_recipe(&mut conn, user.id, &draft) {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("Failed to persist generated recipe: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to persist generated recipe".to_string(),
                }),
            )
                .into_response();
        }
    };

    tracing::info!(recipe_id = %recipe_id, user_id = %user.id, "recipe generated");

    let stored = super::store::find_recipe(&mut conn, recipe_id)
        .ok()
        .flatten()
        .and_then(|recipe| super::store::load_recipe_public(&mut conn, recipe).ok());

    match stored {
        Some(response) => (StatusCode::OK, Json(response)).into_response(),
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to fetch generated recipe".to_string(),
            }),
        )
            .into_response(),
    }
}
