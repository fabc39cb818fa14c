use crate::db::DbPool;
use crate::models::User;
use crate::schema::users;
use diesel::prelude::*;

use super::crypto::hash_token;

/// Resolve a bearer token to its user. Soft-deleted users never match.
pub fn get_user_from_token(pool: &DbPool, token: &str) -> Option<User> {
    let mut conn = pool.get().ok()?;
    let token_hash = hash_token(token);

    users::table
        .filter(users::api_token_hash.eq(&token_hash))
        .filter(users::deleted_at.is_null())
        .select(User::as_select())
        .first(&mut conn)
        .ok()
}
