//! Category model.

use catalog_core::types::DbId;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new category.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategory {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, max = 200))]
    pub name: String,
}

/// DTO for renaming a category. The id comes from the request path.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCategory {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, max = 200))]
    pub name: String,
}

/// Client-facing view of a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryResponse {
    pub id: DbId,
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

/// Absent and `null` names decode as `""` so the length rule rejects them.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_name_decodes_as_empty() {
        let input: CreateCategory = serde_json::from_str("{}").unwrap();
        assert_eq!(input.name, "");
        assert!(input.validate().is_err());
    }

    #[test]
    fn null_name_decodes_as_empty() {
        let input: UpdateCategory = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(input.name, "");
        assert!(input.validate().is_err());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let input: CreateCategory =
            serde_json::from_str(r#"{"title": "x", "name": "Fashion"}"#).unwrap();
        assert_eq!(input.name, "Fashion");
        assert!(input.validate().is_ok());
    }

    #[test]
    fn non_string_name_is_a_decode_error() {
        assert!(serde_json::from_str::<CreateCategory>(r#"{"name": 5}"#).is_err());
    }
}
