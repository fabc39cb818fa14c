use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::get_conn;
use crate::types::RecipePublic;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe details", body = RecipePublic),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Caller is neither owner nor superuser", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_recipe(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
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

    match super::store::load_recipe_public(&mut conn, recipe) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to fetch recipe".to_string(),
            }),
        )
            .into_response(),
    }
}
