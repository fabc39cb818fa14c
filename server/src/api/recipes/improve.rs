use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::get_conn;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use souschef_core::RecipeDraft;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, serde::Deserialize, ToSchema)]
pub struct ImproveRecipeRequest {
    /// Free-text description of the desired change
    pub user_input: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ImprovedLine {
    pub index: i32,
    pub content: Option<String>,
}

/// The improved recipe content. Nothing is persisted; the client applies it
/// through the normal create or update path.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ImprovedRecipe {
    pub title: String,
    pub description: String,
    pub preparation_time: i32,
    pub cook_time: Option<i32>,
    pub serves: i32,
    pub ingredients: Vec<ImprovedLine>,
    pub directions: Vec<ImprovedLine>,
}

impl From<RecipeDraft> for ImprovedRecipe {
    fn from(draft: RecipeDraft) -> Self {
        ImprovedRecipe {
            title: draft.title,
            description: draft.description,
            preparation_time: draft.preparation_time,
            cook_time: draft.cook_time,
            serves: draft.serves,
            ingredients: draft
                .ingredients
                .into_iter()
                .map(|line| ImprovedLine {
                    index: line.index,
                    content: line.content,
                })
                .collect(),
            directions: draft
                .directions
                .into_iter()
                .map(|line| ImprovedLine {
                    index: line.index,
                    content: line.content,
                })
                .collect(),
        }
    }
}

#[utoipa::path(
    post,
    path = "/recipes/{id}/improve",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    request_body = ImproveRecipeRequest,
    responses(
        (status = 200, description = "Improved recipe content; the stored recipe is unchanged", body = ImprovedRecipe),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Caller is neither owner nor superuser", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 500, description = "Completion could not be parsed or validated", body = ErrorResponse),
        (status = 502, description = "Completion API failure", body = ErrorResponse),
        (status = 503, description = "AI service unavailable", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn improve_recipe(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ImproveRecipeRequest>,
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

    let original = {
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

        match super::store::draft_from_recipe(&mut conn, &recipe) {
            Ok(draft) => draft,
            Err(_) => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "Failed to fetch recipe".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    };

    match souschef_core::improve_recipe(client.as_ref(), &original, &request.user_input).await {
        Ok(draft) => (StatusCode::OK, Json(ImprovedRecipe::from(draft))).into_response(),
        Err(e) => super::generate_error_response(e),
    }
}
