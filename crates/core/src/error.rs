use crate::types::DbId;

/// Failure kinds raised below the HTTP layer.
///
/// Variants carry enough detail for logging; deciding what reaches the
/// client is left to the API crate.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),
}
