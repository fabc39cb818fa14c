//! Request and response shapes shared across recipe endpoints.

use crate::models::{Direction, Ingredient, Recipe};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use souschef_core::{DirectionDraft, IngredientDraft};
use utoipa::ToSchema;
use uuid::Uuid;

/// An ingredient line in a create/update payload.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct IngredientCreate {
    pub index: i32,
    pub content: Option<String>,
}

/// A direction line in a create/update payload.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct DirectionCreate {
    pub index: i32,
    pub content: Option<String>,
}

impl From<IngredientCreate> for IngredientDraft {
    fn from(value: IngredientCreate) -> Self {
        IngredientDraft {
            index: value.index,
            content: value.content,
        }
    }
}

impl From<DirectionCreate> for DirectionDraft {
    fn from(value: DirectionCreate) -> Self {
        DirectionDraft {
            index: value.index,
            content: value.content,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IngredientPublic {
    pub id: Uuid,
    pub index: i32,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DirectionPublic {
    pub id: Uuid,
    pub index: i32,
    pub content: Option<String>,
}

impl From<Ingredient> for IngredientPublic {
    fn from(row: Ingredient) -> Self {
        IngredientPublic {
            id: row.id,
            index: row.index,
            content: row.content,
        }
    }
}

impl From<Direction> for DirectionPublic {
    fn from(row: Direction) -> Self {
        DirectionPublic {
            id: row.id,
            index: row.index,
            content: row.content,
        }
    }
}

/// A stored recipe with its ordered children, as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipePublic {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub preparation_time: i32,
    pub cook_time: Option<i32>,
    pub serves: i32,
    pub is_favorite: bool,
    pub ingredients: Vec<IngredientPublic>,
    pub directions: Vec<DirectionPublic>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RecipePublic {
    pub fn assemble(
        recipe: Recipe,
        ingredients: Vec<Ingredient>,
        directions: Vec<Direction>,
    ) -> Self {
        RecipePublic {
            id: recipe.id,
            title: recipe.title,
            description: recipe.description,
            preparation_time: recipe.preparation_time,
            cook_time: recipe.cook_time,
            serves: recipe.serves,
            is_favorite: recipe.is_favorite,
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            directions: directions.into_iter().map(Into::into).collect(),
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
        }
    }
}
