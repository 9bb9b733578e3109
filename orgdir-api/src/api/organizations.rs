//! Organization endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use orgdir_common::db::{self, Organization};

use crate::api::ApiError;
use crate::pagination::PageParams;
use crate::AppState;

/// GET /organizations/?skip=&limit=
///
/// Paginated organization listing in stable primary-key order. An empty
/// page is a valid result.
pub async fn list_organizations(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> Result<Json<Vec<Organization>>, ApiError> {
    let (skip, limit) = page.clamped();

    let mut conn = state
        .db
        .acquire()
        .await
        .map_err(|e| ApiError::database("list_organizations", e))?;

    let organizations = db::list_organizations(&mut conn, skip, limit)
        .await
        .map_err(|e| ApiError::database("list_organizations", e))?;

    Ok(Json(organizations))
}

/// GET /organizations/:uid
///
/// Single organization or 404.
pub async fn get_organization(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<Organization>, ApiError> {
    let mut conn = state
        .db
        .acquire()
        .await
        .map_err(|e| ApiError::database(&format!("get_organization {}", uid), e))?;

    let organization = db::get_organization(&mut conn, &uid)
        .await
        .map_err(|e| ApiError::database(&format!("get_organization {}", uid), e))?;

    organization
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Organization {} not found", uid)))
}
