use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::get_conn;
use crate::models::RecipeChangeset;
use crate::schema::recipes;
use crate::types::{DirectionCreate, IngredientCreate, RecipePublic};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use diesel::prelude::*;
use serde::Deserialize;
use souschef_core::recipe::{MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
use souschef_core::{DirectionDraft, IngredientDraft};
use utoipa::ToSchema;
use uuid::Uuid;

/// Partial update: only fields present in the JSON are applied. A present
/// `ingredients` or `directions` list (even empty) fully replaces the
/// stored child set; an absent one leaves it untouched.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateRecipeRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub preparation_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub serves: Option<i32>,
    pub is_favorite: Option<bool>,
    pub ingredients: Option<Vec<IngredientCreate>>,
    pub directions: Option<Vec<DirectionCreate>>,
}

#[utoipa::path(
    put,
    path = "/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    request_body = UpdateRecipeRequest,
    responses(
        (status = 200, description = "Recipe updated", body = RecipePublic),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Caller is neither owner nor superuser", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_recipe(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRecipeRequest>,
) -> impl IntoResponse {
    if let Some(ref title) = request.title {
        if title.trim().is_empty() || title.chars().count() > MAX_TITLE_LEN {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Invalid title".to_string(),
                }),
            )
                .into_response();
        }
    }

    if let Some(ref description) = request.description {
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Invalid description".to_string(),
                }),
            )
                .into_response();
        }
    }

    let mut conn = get_conn!(state.pool);

    let recipe = match super::store::find_recipe(&mut conn, id) {
        Ok(Some(r)) => r,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Recipe not found".to_string(),
                }),
            )
                .into_response()
        }
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch recipe".to_string(),
                }),
            )
                .into_response()
        }
    };

    if !super::can_access(&user, &recipe) {
        return (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse {
                error: "Not enough permissions".to_string(),
            }),
        )
            .into_response();
    }

    let ingredient_drafts: Option<Vec<IngredientDraft>> = request
        .ingredients
        .map(|items| items.into_iter().map(Into::into).collect());
    let direction_drafts: Option<Vec<DirectionDraft>> = request
        .directions
        .map(|items| items.into_iter().map(Into::into).collect());

    let result: Result<(), diesel::result::Error> = conn.transaction(|conn| {
        let changeset = RecipeChangeset {
            title: request.title.as_deref(),
            description: request.description.as_deref(),
            preparation_time: request.preparation_time,
            cook_time: request.cook_time,
            serves: request.serves,
            is_favorite: request.is_favorite,
            updated_at: Utc::now(),
        };

        diesel::update(recipes::table.find(recipe.id))
            .set(&changeset)
            .execute(conn)?;

        if let Some(ref items) = ingredient_drafts {
            super::store::replace_ingredients(conn, recipe.id, items)?;
        }
        if let Some(ref items) = direction_drafts {
            super::store::replace_directions(conn, recipe.id, items)?;
        }

        Ok(())
    });

    if let Err(e) = result {
        tracing::error!("Failed to update recipe: {}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to update recipe".to_string(),
            }),
        )
            .into_response();
    }

    let stored = super::store::find_recipe(&mut conn, recipe.id)
        .ok()
        .flatten()
        .and_then(|recipe| super::store::load_recipe_public(&mut conn, recipe).ok());

    match stored {
        Some(response) => (StatusCode::OK, Json(response)).into_response(),
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to fetch updated recipe".to_string(),
            }),
        )
            .into_response(),
    }
}
