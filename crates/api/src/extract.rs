//! Extractors whose rejections flow through [`AppError`].
//!
//! Axum's stock `Json` and `Path` reject with plain-text bodies; these
//! wrappers keep malformed requests inside the response envelope.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Request};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON request body.
///
/// The body is decoded whatever the `Content-Type` header says.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Request(rejection.body_text()))?;
        let value = serde_json::from_slice(&bytes)
            .map_err(|err| AppError::Request(format!("Invalid JSON body: {err}")))?;
        Ok(ApiJson(value))
    }
}

/// Typed path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
