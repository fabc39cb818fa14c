//! Persistence helpers shared by the recipe endpoints.
//!
//! Manual creation and AI generation go through the same insert path: the
//! recipe row is written first to obtain its id, then the children, all
//! inside one transaction so a failure leaves nothing behind.

use crate::models::{
    Direction, Ingredient, NewDirection, NewIngredient, NewRecipe, Recipe,
};
use crate::schema::{directions, ingredients, recipes};
use crate::types::RecipePublic;
use diesel::prelude::*;
use souschef_core::{DirectionDraft, IngredientDraft, RecipeDraft};
use uuid::Uuid;

/// Insert a recipe and its children atomically, returning the new id.
pub fn insert_recipe(
    conn: &mut PgConnection,
    user_id: Uuid,
    draft: &RecipeDraft,
) -> Result<Uuid, diesel::result::Error> {
    conn.transaction(|conn| {
        let new_recipe = NewRecipe {
            user_id,
            title: &draft.title,
            description: &draft.description,
            preparation_time: draft.preparation_time,
            cook_time: draft.cook_time,
            serves: draft.serves,
            is_favorite: draft.is_favorite,
        };

        let recipe_id: Uuid = diesel::insert_into(recipes::table)
            .values(&new_recipe)
            .returning(recipes::id)
            .get_result(conn)?;

        insert_ingredients(conn, recipe_id, &draft.ingredients)?;
        insert_directions(conn, recipe_id, &draft.directions)?;

        Ok(recipe_id)
    })
}

pub fn insert_ingredients(
    conn: &mut PgConnection,
    recipe_id: Uuid,
    items: &[IngredientDraft],
) -> QueryResult<()> {
    let rows: Vec<NewIngredient> = items
        .iter()
        .map(|item| NewIngredient {
            recipe_id,
            index: item.index,
            content: item.content.as_deref(),
        })
        .collect();

    diesel::insert_into(ingredients::table)
        .values(&rows)
        .execute(conn)?;
    Ok(())
}

pub fn insert_directions(
    conn: &mut PgConnection,
    recipe_id: Uuid,
    items: &[DirectionDraft],
) -> QueryResult<()> {
    let rows: Vec<NewDirection> = items
        .iter()
        .map(|item| NewDirection {
            recipe_id,
            index: item.index,
            content: item.content.as_deref(),
        })
        .collect();

    diesel::insert_into(directions::table)
        .values(&rows)
        .execute(conn)?;
    Ok(())
}

/// Replace a recipe's ingredient set wholesale.
pub fn replace_ingredients(
    conn: &mut PgConnection,
    recipe_id: Uuid,
    items: &[IngredientDraft],
) -> QueryResult<()> {
    diesel::delete(ingredients::table.filter(ingredients::recipe_id.eq(recipe_id)))
        .execute(conn)?;
    insert_ingredients(conn, recipe_id, items)
}

/// Replace a recipe's direction set wholesale.
pub fn replace_directions(
    conn: &mut PgConnection,
    recipe_id: Uuid,
    items: &[DirectionDraft],
) -> QueryResult<()> {
    diesel::delete(directions::table.filter(directions::recipe_id.eq(recipe_id)))
        .execute(conn)?;
    insert_directions(conn, recipe_id, items)
}

pub fn find_recipe(conn: &mut PgConnection, id: Uuid) -> QueryResult<Option<Recipe>> {
    recipes::table
        .find(id)
        .select(Recipe::as_select())
        .first(conn)
        .optional()
}

/// Load the ordered children for a set of recipes.
pub fn load_children(
    conn: &mut PgConnection,
    recipe_ids: &[Uuid],
) -> QueryResult<(Vec<Ingredient>, Vec<Direction>)> {
    let ingredient_rows: Vec<Ingredient> = ingredients::table
        .filter(ingredients::recipe_id.eq_any(recipe_ids))
        .order((ingredients::recipe_id.asc(), ingredients::index.asc()))
        .select(Ingredient::as_select())
        .load(conn)?;

    let direction_rows: Vec<Direction> = directions::table
        .filter(directions::recipe_id.eq_any(recipe_ids))
        .order((directions::recipe_id.asc(), directions::index.asc()))
        .select(Direction::as_select())
        .load(conn)?;

    Ok((ingredient_rows, direction_rows))
}

/// Load one stored recipe with its children in display order.
pub fn load_recipe_public(conn: &mut PgConnection, recipe: Recipe) -> QueryResult<RecipePublic> {
    let (ingredient_rows, direction_rows) = load_children(conn, &[recipe.id])?;
    Ok(RecipePublic::assemble(recipe, ingredient_rows, direction_rows))
}

/// Snapshot a stored recipe as a draft, e.g. to embed it in an improvement
/// prompt.
pub fn draft_from_recipe(conn: &mut PgConnection, recipe: &Recipe) -> QueryResult<RecipeDraft> {
    let (ingredient_rows, direction_rows) = load_children(conn, &[recipe.id])?;

    Ok(RecipeDraft {
        title: recipe.title.clone(),
        description: recipe.description.clone(),
        preparation_time: recipe.preparation_time,
        cook_time: recipe.cook_time,
        serves: recipe.serves,
        is_favorite: recipe.is_favorite,
        ingredients: ingredient_rows
            .into_iter()
            .map(|row| IngredientDraft {
                index: row.index,
                content: row.content,
            })
            .collect(),
        directions: direction_rows
            .into_iter()
            .map(|row| DirectionDraft {
                index: row.index,
                content: row.content,
            })
            .collect(),
    })
}
