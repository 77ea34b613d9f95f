//! Static API-key gate applied in front of every route.

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::response::ApiResponse;
use crate::state::AppState;

/// Header carrying the pre-shared key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Forward the request only when `X-API-Key` equals the configured key.
///
/// Anything else, including a missing or non-UTF-8 header, is answered with
/// a bare 401 envelope before routing or storage are touched.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let presented = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    if presented == Some(state.config.api_key.as_str()) {
        return next.run(request).await;
    }

    tracing::warn!(
        method = %request.method(),
        path = %request.uri().path(),
        header_present = presented.is_some(),
        "Rejected request with missing or invalid API key"
    );
    ApiResponse::<()>::with_status(StatusCode::UNAUTHORIZED, None).into_response()
}
