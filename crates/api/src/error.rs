use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog_core::error::CoreError;

use crate::response::ApiResponse;

/// Message returned for every 400.
pub const INVALID_FIELDS: &str = "invalid fields";
/// Message returned for every 500.
pub const INTERNAL_ERROR: &str = "internal server error";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] so every failure leaves the server in the
/// standard envelope, and this is the only place that decides what detail a
/// client gets to see.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `catalog_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request body or path could not be decoded.
    #[error("Malformed request: {0}")]
    Request(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                format!("{entity} with id {id} not found"),
            ),
            AppError::Core(CoreError::Validation(msg)) => {
                tracing::debug!(reason = %msg, "Rejected invalid payload");
                (StatusCode::BAD_REQUEST, INVALID_FIELDS.to_string())
            }
            // Missing rows are turned into `CoreError::NotFound` by the
            // services, so anything left here is a storage failure.
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal()
            }
            AppError::Request(msg) => {
                tracing::error!(error = %msg, "Malformed request");
                internal()
            }
        };

        ApiResponse::with_status(status, Some(message)).into_response()
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Request(rejection.body_text())
    }
}

fn internal() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        INTERNAL_ERROR.to_string(),
    )
}
