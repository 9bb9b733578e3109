//! Liveness and store diagnostic endpoints

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::ApiError;
use crate::AppState;

/// Liveness response for `GET /`
#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// GET /
///
/// Liveness message; does not touch the store.
pub async fn root() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "ok".to_string(),
        service: "orgdir-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Store diagnostic response for `GET /db-check`
#[derive(Debug, Serialize)]
pub struct DbCheckResponse {
    pub status: String,
    pub organizations: i64,
    pub companies: i64,
}

/// GET /db-check
///
/// Store reachability probe. Deliberately issues raw COUNT(*) queries
/// instead of going through the typed query layer: the point is to prove
/// the store answers at all, with as little machinery in between as
/// possible. A failure here is a 500, never a 404.
pub async fn db_check(State(state): State<AppState>) -> Result<Json<DbCheckResponse>, ApiError> {
    let mut conn = state
        .db
        .acquire()
        .await
        .map_err(|e| ApiError::database("db_check", e))?;

    let organizations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM organizations")
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| ApiError::database("db_check", e))?;

    let companies: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM companies")
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| ApiError::database("db_check", e))?;

    Ok(Json(DbCheckResponse {
        status: "ok".to_string(),
        organizations,
        companies,
    }))
}
