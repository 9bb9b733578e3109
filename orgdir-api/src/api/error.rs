//! Handler-boundary error translation
//!
//! Store failures never reach the caller raw; they are logged where they
//! happen and collapse into one of two client-visible categories: a 404
//! for a by-id miss, a 500 for anything the store itself got wrong.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// Errors a request handler can surface to a client
#[derive(Debug)]
pub enum ApiError {
    /// By-id lookup matched nothing (client-facing, no retry)
    NotFound(String),
    /// Store unreachable or query failed (server-facing, logged)
    Database(String),
}

impl ApiError {
    /// Record a store failure with its operation context, then wrap it
    pub fn database(operation: &str, err: impl std::fmt::Display) -> Self {
        error!("{}: database error: {}", operation, err);
        ApiError::Database(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Database(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", msg),
            ),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
