use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::auth::{hash_password, hash_token};
use crate::models::NewUser;
use crate::schema::users;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("../migrations");

/// Email of the account that owns recipes generated through the public,
/// unauthenticated endpoint. Overridable via SOUSCHEF_GUEST_EMAIL.
pub const DEFAULT_GUEST_EMAIL: &str = "guest@souschef.dev";

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;

pub fn create_pool(database_url: &str) -> DbPool {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = r2d2::Pool::builder()
        .build(manager)
        .expect("Failed to create database pool");

    // Run pending migrations on startup
    let mut conn = pool
        .get()
        .expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");

    pool
}

pub fn guest_email() -> String {
    std::env::var("SOUSCHEF_GUEST_EMAIL").unwrap_or_else(|_| DEFAULT_GUEST_EMAIL.to_string())
}

/// Ensure the accounts the server depends on exist: the guest account that
/// owns publicly generated recipes, and optionally a superuser configured
/// through SOUSCHEF_SUPERUSER_EMAIL / _PASSWORD / _TOKEN.
pub fn seed(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get DB connection for seeding");

    let guest = NewUser {
        email: &guest_email(),
        // The guest account has no credentials and no API token
        hashed_password: "",
        is_superuser: false,
        api_token_hash: None,
    };
    diesel::insert_into(users::table)
        .values(&guest)
        .on_conflict(users::email)
        .do_nothing()
        .execute(&mut conn)
        .expect("Failed to seed guest account");

    if let (Ok(email), Ok(password)) = (
        std::env::var("SOUSCHEF_SUPERUSER_EMAIL"),
        std::env::var("SOUSCHEF_SUPERUSER_PASSWORD"),
    ) {
        let hashed = hash_password(&password).expect("Failed to hash superuser password");
        let token_hash = std::env::var("SOUSCHEF_SUPERUSER_TOKEN")
            .ok()
            .map(|t| hash_token(&t));

        let superuser = NewUser {
            email: &email,
            hashed_password: &hashed,
            is_superuser: true,
            api_token_hash: token_hash.as_deref(),
        };
        diesel::insert_into(users::table)
            .values(&superuser)
            .on_conflict(users::email)
            .do_nothing()
            .execute(&mut conn)
            .expect("Failed to seed superuser account");

        tracing::info!(email = %email, "superuser account ensured");
    }
}

/// Get a pooled connection or bail out of the handler with a 500.
#[macro_export]
macro_rules! get_conn {
    ($pool:expr) => {
        match $pool.get() {
            Ok(conn) => conn,
            Err(_) => {
                return (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json($crate::api::ErrorResponse {
                        error: "Database connection failed".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    };
}
