//! Request middleware.
//!
//! - [`api_key::require_api_key`] -- Rejects requests without the configured `X-API-Key`.

pub mod api_key;
