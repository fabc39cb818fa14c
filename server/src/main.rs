mod api;
mod auth;
mod db;
mod models;
mod quota;
mod schema;
mod telemetry;
mod types;

use axum::extract::{FromRef, MatchedPath};
use axum::http::Request;
use axum::Router;
use quota::{DailyQuota, PUBLIC_GENERATE_DAILY_LIMIT};
use souschef_core::CompletionClient;
use std::env;
use std::sync::{Arc, Mutex};
use tower_http::trace::TraceLayer;
use tracing::Span;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across all handlers. Everything in here is
/// either a pool or immutable after startup, except the quota counter.
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<db::DbPool>,
    pub ai: Option<Arc<dyn CompletionClient>>,
    pub public_quota: Arc<Mutex<DailyQuota>>,
}

impl FromRef<AppState> for Arc<db::DbPool> {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

#[tokio::main]
async fn main() {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        let spec = api::openapi().to_pretty_json().unwrap();
        println!("{}", spec);
        return;
    }

    telemetry::init();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = Arc::new(db::create_pool(&database_url));
    db::seed(&pool);

    let ai = match souschef_core::create_client_from_env() {
        Ok(client) => {
            tracing::info!(
                provider = client.provider_name(),
                model = client.model_name(),
                "completion client ready"
            );
            Some(client)
        }
        Err(e) => {
            tracing::warn!("completion client unavailable: {}", e);
            None
        }
    };

    let state = AppState {
        pool,
        ai,
        public_quota: Arc::new(Mutex::new(DailyQuota::new(PUBLIC_GENERATE_DAILY_LIMIT))),
    };

    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::openapi());

    let app = Router::new()
        .nest("/recipes", api::recipes::router())
        .merge(swagger_ui)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let matched_path = request
                        .extensions()
                        .get::<MatchedPath>()
                        .map(MatchedPath::as_str)
                        .unwrap_or(request.uri().path());

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %matched_path,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &Span| {
                        let status = response.status().as_u16();
                        if status >= 500 {
                            tracing::error!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request failed with server error"
                            );
                        } else {
                            tracing::info!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request completed"
                            );
                        }
                    },
                ),
        );

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();

    tracing::info!("Server listening on {}", listener.local_addr().unwrap());
    tracing::info!("Swagger UI available at http://localhost:3000/swagger-ui/");

    axum::serve(listener, app).await.unwrap();
}
