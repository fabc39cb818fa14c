use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub hashed_password: String,
    pub is_superuser: bool,
    pub api_token_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub email: &'a str,
    pub hashed_password: &'a str,
    pub is_superuser: bool,
    pub api_token_hash: Option<&'a str>,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Recipe {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub preparation_time: i32,
    pub cook_time: Option<i32>,
    pub serves: i32,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipe<'a> {
    pub user_id: Uuid,
    pub title: &'a str,
    pub description: &'a str,
    pub preparation_time: i32,
    pub cook_time: Option<i32>,
    pub serves: i32,
    pub is_favorite: bool,
}

/// Partial update: `None` fields are left untouched. `updated_at` is always
/// refreshed.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::recipes)]
pub struct RecipeChangeset<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub preparation_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub serves: Option<i32>,
    pub is_favorite: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Ingredient {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub index: i32,
    pub content: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::ingredients)]
pub struct NewIngredient<'a> {
    pub recipe_id: Uuid,
    pub index: i32,
    pub content: Option<&'a str>,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::directions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Direction {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub index: i32,
    pub content: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::directions)]
pub struct NewDirection<'a> {
    pub recipe_id: Uuid,
    pub index: i32,
    pub content: Option<&'a str>,
}
