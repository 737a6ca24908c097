//! API error type and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Failures an API handler can produce.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body failed boundary validation.
    #[error("{0}")]
    Validation(String),

    /// The store rejected or could not execute the query.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(msg) => {
                tracing::warn!(error = %msg, "Request rejected at boundary");
                (StatusCode::UNPROCESSABLE_ENTITY, msg.clone())
            }
            ApiError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
