//! Structural validation of inbound payloads.
//!
//! Payload structs declare their constraints with `#[derive(Validate)]`;
//! these helpers run them and fold the outcome into [`CoreError::Validation`]
//! so callers never handle `validator` types directly.

use validator::Validate;

use crate::error::CoreError;
use crate::types::DbId;

/// Run the declared constraints on `input`.
///
/// The resulting message names the offending fields (sorted) and is meant
/// for logs only.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input.validate().map_err(|errors| {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();
        CoreError::Validation(format!("invalid fields: {}", fields.join(", ")))
    })
}

/// Reject the zero id, which no row can carry.
pub fn validate_id(id: DbId) -> Result<(), CoreError> {
    if id == 0 {
        return Err(CoreError::Validation("id is required".into()));
    }
    Ok(())
}
