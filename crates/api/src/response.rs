//! Shared response envelope for API handlers.
//!
//! Every response, success or failure, is `{ "code", "status", "data" }`.
//! `data` is omitted when there is nothing to return.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Standard `{ code, status, data }` response envelope.
///
/// ```ignore
/// Ok(ApiResponse::ok(category))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: u16,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// A 200 response carrying `data`.
    pub fn ok(data: T) -> Self {
        Self::with_status(StatusCode::OK, Some(data))
    }

    /// An arbitrary status with optional payload.
    pub fn with_status(status: StatusCode, data: Option<T>) -> Self {
        Self {
            code: status.as_u16(),
            status: status_text(status),
            data,
        }
    }
}

impl ApiResponse<()> {
    /// A 200 response with no `data` field.
    pub fn empty() -> Self {
        Self::with_status(StatusCode::OK, None)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Upper-cased reason phrase, e.g. `"NOT FOUND"`.
fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("UNKNOWN")
        .to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn ok_envelope_carries_data() {
        let value = serde_json::to_value(ApiResponse::ok(json!({"id": 1, "name": "Fashion"})))
            .unwrap();
        assert_eq!(
            value,
            json!({"code": 200, "status": "OK", "data": {"id": 1, "name": "Fashion"}})
        );
    }

    #[test]
    fn empty_envelope_omits_data() {
        let value = serde_json::to_value(ApiResponse::empty()).unwrap();
        assert_eq!(value, json!({"code": 200, "status": "OK"}));
    }

    #[test]
    fn status_text_matches_wire_format() {
        assert_eq!(status_text(StatusCode::NOT_FOUND), "NOT FOUND");
        assert_eq!(status_text(StatusCode::BAD_REQUEST), "BAD REQUEST");
        assert_eq!(status_text(StatusCode::UNAUTHORIZED), "UNAUTHORIZED");
        assert_eq!(
            status_text(StatusCode::INTERNAL_SERVER_ERROR),
            "INTERNAL SERVER ERROR"
        );
    }

    #[test]
    fn into_response_uses_envelope_code() {
        let response = ApiResponse::<String>::with_status(StatusCode::NOT_FOUND, None)
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
    }
}
