use crate::api::ErrorResponse;
use crate::db::guest_email;
use crate::get_conn;
use crate::models::User;
use crate::schema::users;
use crate::types::RecipePublic;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use diesel::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;

fn default_language() -> String {
    "fr".to_string()
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GeneratePublicRequest {
    /// Free-text description of the recipe to generate
    pub user_input: String,
    /// Language tag selecting output language and unit system (default: "fr")
    #[serde(default = "default_language")]
    pub language: String,
}

#[utoipa::path(
    post,
    path = "/recipes/generate-public",
    tag = "recipes",
    request_body = GeneratePublicRequest,
    responses(
        (status = 200, description = "Generated recipe, persisted under the guest account", body = RecipePublic),
        (status = 429, description = "Daily quota exhausted", body = ErrorResponse),
        (status = 500, description = "Completion could not be parsed or validated", body = ErrorResponse),
        (status = 502, description = "Completion API failure", body = ErrorResponse),
        (status = 503, description = "AI service unavailable", body = ErrorResponse)
    )
)]
pub async fn generate_recipe_public(
    State(state): State<AppState>,
    Json(request): Json<GeneratePublicRequest>,
) -> impl IntoResponse {
    // Check the daily ceiling before spending a completion call
    {
        let mut quota = state.public_quota.lock().unwrap();
        if !quota.try_acquire(Utc::now().date_naive()) {
            return (
                StatusCode::TOO_MANY_REQUESTS,
                Json(ErrorResponse {
                    error: "Daily generation quota exceeded".to_string(),
                }),
            )
                .into_response();
        }
    }

    let Some(client) = state.ai.clone() else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "AI service unavailable".to_string(),
            }),
        )
            .into_response();
    };

    let mut conn = get_conn!(state.pool);

    let guest: User = match users::table
        .filter(users::email.eq(guest_email()))
        .filter(users::deleted_at.is_null())
        .select(User::as_select())
        .first(&mut conn)
        .optional()
    {
        Ok(Some(u)) => u,
        Ok(None) => {
            tracing::error!("guest account missing; run startup seeding");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Guest account not configured".to_string(),
                }),
            )
                .into_response();
        }
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to look up guest account".to_string(),
                }),
            )
                .into_response();
        }
    };

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

    let recipe_id = match super::store::insert_recipe(&mut conn, guest.id, &draft) {
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

    tracing::info!(recipe_id = %recipe_id, "public recipe generated");

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
