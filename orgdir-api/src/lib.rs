//! orgdir-api library - read-only HTTP API over the organization directory

use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod pagination;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool; handlers check out one connection per request
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
///
/// All routes are read-only; `/` and `/db-check` are diagnostics, the rest
/// are entity lookups.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/", get(api::root))
        .route("/organizations/", get(api::list_organizations))
        .route("/organizations/:uid", get(api::get_organization))
        .route("/companies/", get(api::list_companies))
        .route("/companies/:uid", get(api::get_company))
        .route("/db-check", get(api::db_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
