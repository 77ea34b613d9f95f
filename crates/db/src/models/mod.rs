//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - `Deserialize` + `Validate` request DTOs
//! - The `Serialize` projection returned to clients

pub mod category;
