//! Request handlers.
//!
//! Handlers unpack the request, delegate to a service, and wrap the result
//! in [`ApiResponse`](crate::response::ApiResponse). Failures are returned
//! as [`AppError`](crate::error::AppError).

pub mod category;
pub mod fallback;
