use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::get_conn;
use crate::models::{Direction, Ingredient, Recipe};
use crate::schema::recipes;
use crate::types::RecipePublic;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListRecipesParams {
    /// Number of items to skip (default: 0)
    pub skip: Option<i64>,
    /// Number of items to return (default: 100, max: 1000)
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListRecipesResponse {
    pub data: Vec<RecipePublic>,
    /// Total number of matching recipes, independent of pagination
    pub count: i64,
}

#[utoipa::path(
    get,
    path = "/recipes",
    tag = "recipes",
    params(ListRecipesParams),
    responses(
        (status = 200, description = "Recipes owned by the caller (all recipes for superusers)", body = ListRecipesResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_recipes(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListRecipesParams>,
) -> impl IntoResponse {
    let skip = params.skip.unwrap_or(0).max(0);
    let limit = params.limit.unwrap_or(100).clamp(1, 1000);

    let mut conn = get_conn!(state.pool);

    // Count over the same ownership filter, independent of the page
    let count_result: Result<i64, _> = if user.is_superuser {
        recipes::table.count().get_result(&mut conn)
    } else {
        recipes::table
            .filter(recipes::user_id.eq(user.id))
            .count()
            .get_result(&mut conn)
    };

    let count = match count_result {
        Ok(c) => c,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to count recipes".to_string(),
                }),
            )
                .into_response()
        }
    };

    let mut query = recipes::table.select(Recipe::as_select()).into_boxed();
    if !user.is_superuser {
        query = query.filter(recipes::user_id.eq(user.id));
    }

    let page: Vec<Recipe> = match query
        .order(recipes::updated_at.desc())
        .offset(skip)
        .limit(limit)
        .load(&mut conn)
    {
        Ok(r) => r,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch recipes".to_string(),
                }),
            )
                .into_response()
        }
    };

    let recipe_ids: Vec<Uuid> = page.iter().map(|r| r.id).collect();
    let (ingredient_rows, direction_rows) =
        match super::store::load_children(&mut conn, &recipe_ids) {
            Ok(children) => children,
            Err(_) => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "Failed to fetch recipes".to_string(),
                    }),
                )
                    .into_response()
            }
        };

    // Rows arrive ordered by (recipe_id, index), so per-recipe order is
    // preserved while grouping.
    let mut ingredients_by_recipe: HashMap<Uuid, Vec<Ingredient>> = HashMap::new();
    for row in ingredient_rows {
        ingredients_by_recipe
            .entry(row.recipe_id)
            .or_default()
            .push(row);
    }
    let mut directions_by_recipe: HashMap<Uuid, Vec<Direction>> = HashMap::new();
    for row in direction_rows {
        directions_by_recipe
            .entry(row.recipe_id)
            .or_default()
            .push(row);
    }

    let data: Vec<RecipePublic> = page
        .into_iter()
        .map(|recipe| {
            let ingredient_rows = ingredients_by_recipe.remove(&recipe.id).unwrap_or_default();
            let direction_rows = directions_by_recipe.remove(&recipe.id).unwrap_or_default();
            RecipePublic::assemble(recipe, ingredient_rows, direction_rows)
        })
        .collect();

    (StatusCode::OK, Json(ListRecipesResponse { data, count })).into_response()
}
