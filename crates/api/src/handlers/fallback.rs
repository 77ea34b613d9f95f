//! Envelope responses for requests that match no handler.

use axum::http::StatusCode;

use crate::response::ApiResponse;

/// Unknown path.
pub async fn not_found() -> ApiResponse<String> {
    ApiResponse::with_status(StatusCode::NOT_FOUND, Some("route not found".into()))
}

/// Known path, unsupported method.
pub async fn method_not_allowed() -> ApiResponse<String> {
    ApiResponse::with_status(
        StatusCode::METHOD_NOT_ALLOWED,
        Some("method not allowed".into()),
    )
}
