//! Repository for the `categories` table.
//!
//! Missing rows are reported as [`sqlx::Error::RowNotFound`], including
//! updates and deletes that affect nothing.

use catalog_core::types::DbId;
use sqlx::PgConnection;

use crate::models::category::Category;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row with its id.
    pub async fn create(conn: &mut PgConnection, name: &str) -> Result<Category, sqlx::Error> {
        let query = format!("INSERT INTO categories (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .fetch_one(&mut *conn)
            .await
    }

    /// Find a category by its ID.
    pub async fn find_by_id(conn: &mut PgConnection, id: DbId) -> Result<Category, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_one(&mut *conn)
            .await
    }

    /// List every category in storage order.
    pub async fn find_all(conn: &mut PgConnection) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories");
        sqlx::query_as::<_, Category>(&query)
            .fetch_all(&mut *conn)
            .await
    }

    /// Rename a category, returning the updated row.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        name: &str,
    ) -> Result<Category, sqlx::Error> {
        let query = format!("UPDATE categories SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(name)
            .fetch_one(&mut *conn)
            .await
    }

    /// Delete a category by ID.
    pub async fn delete_by_id(conn: &mut PgConnection, id: DbId) -> Result<(), sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }
        Ok(())
    }
}
