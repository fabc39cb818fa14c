use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::get_conn;
use crate::types::{DirectionCreate, IngredientCreate, RecipePublic};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use souschef_core::RecipeDraft;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateRecipeRequest {
    pub title: String,
    pub description: String,
    pub preparation_time: i32,
    pub cook_time: Option<i32>,
    pub serves: i32,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub ingredients: Vec<IngredientCreate>,
    #[serde(default)]
    pub directions: Vec<DirectionCreate>,
}

impl From<CreateRecipeRequest> for RecipeDraft {
    fn from(request: CreateRecipeRequest) -> Self {
        RecipeDraft {
            title: request.title,
            description: request.description,
            preparation_time: request.preparation_time,
            cook_time: request.cook_time,
            serves: request.serves,
            is_favorite: request.is_favorite,
            ingredients: request.ingredients.into_iter().map(Into::into).collect(),
            directions: request.directions.into_iter().map(Into::into).collect(),
        }
    }
}

#[utoipa::path(
    post,
    path = "/recipes",
    tag = "recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 200, description = "Recipe created", body = RecipePublic),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_recipe(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(request): Json<CreateRecipeRequest>,
) -> impl IntoResponse {
    let draft = RecipeDraft::from(request);

    if let Err(message) = draft.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse { error: message }),
        )
            .into_response();
    }

    let mut conn = get_conn!(state.pool);

    let recipe_id = match super::store::insert_recipe(&mut conn, user.id, &draft) {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("Failed to create recipe: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create recipe".to_string(),
                }),
            )
                .into_response();
        }
    };

    // Read the stored row back so generated ids and timestamps are echoed
    let stored = super::store::find_recipe(&mut conn, recipe_id)
        .ok()
        .flatten()
        .and_then(|recipe| super::store::load_recipe_public(&mut conn, recipe).ok());

    match stored {
        Some(response) => (StatusCode::OK, Json(response)).into_response(),
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to fetch created recipe".to_string(),
            }),
        )
            .into_response(),
    }
}
