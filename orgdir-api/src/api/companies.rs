//! Company endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use orgdir_common::db::{self, Company};

use crate::api::ApiError;
use crate::pagination::PageParams;
use crate::AppState;

/// GET /companies/?skip=&limit=
pub async fn list_companies(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> Result<Json<Vec<Company>>, ApiError> {
    let (skip, limit) = page.clamped();

    let mut conn = state
        .db
        .acquire()
        .await
        .map_err(|e| ApiError::database("list_companies", e))?;

    let companies = db::list_companies(&mut conn, skip, limit)
        .await
        .map_err(|e| ApiError::database("list_companies", e))?;

    Ok(Json(companies))
}

/// GET /companies/:uid
///
/// Single company or 404.
pub async fn get_company(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<Company>, ApiError> {
    let mut conn = state
        .db
        .acquire()
        .await
        .map_err(|e| ApiError::database(&format!("get_company {}", uid), e))?;

    let company = db::get_company(&mut conn, &uid)
        .await
        .map_err(|e| ApiError::database(&format!("get_company {}", uid), e))?;

    company
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Company {} not found", uid)))
}
