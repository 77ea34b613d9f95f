//! Category operations, one transaction per call.
//!
//! Payloads are validated before a connection is taken from the pool. Each
//! operation then runs inside a transaction that is committed on success
//! and rolled back on any error.

use catalog_core::error::CoreError;
use catalog_core::types::DbId;
use catalog_core::validation::{validate_id, validate_input};
use catalog_db::models::category::{Category, CategoryResponse, CreateCategory, UpdateCategory};
use catalog_db::repositories::CategoryRepo;
use catalog_db::DbPool;
use sqlx::{PgConnection, Postgres, Transaction};

use crate::error::{AppError, AppResult};

/// Entity label used in not-found messages.
const ENTITY: &str = "category";

/// Provides the category use cases on top of [`CategoryRepo`].
pub struct CategoryService;

impl CategoryService {
    /// Validate and insert a new category.
    pub async fn create(pool: &DbPool, input: &CreateCategory) -> AppResult<CategoryResponse> {
        validate_input(input)?;

        let mut tx = pool.begin().await?;
        let result = CategoryRepo::create(&mut tx, &input.name)
            .await
            .map_err(AppError::from);
        let category = finish(tx, result).await?;

        tracing::info!(category_id = category.id, "Category created");
        Ok(category.into())
    }

    /// Rename an existing category.
    ///
    /// The id is looked up first so a missing row is reported as not found
    /// before any write is attempted.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateCategory,
    ) -> AppResult<CategoryResponse> {
        validate_id(id)?;
        validate_input(input)?;

        let mut tx = pool.begin().await?;
        let result = rename(&mut tx, id, &input.name).await;
        let category = finish(tx, result).await?;

        tracing::info!(category_id = category.id, "Category updated");
        Ok(category.into())
    }

    /// Fetch a single category.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> AppResult<CategoryResponse> {
        let mut tx = pool.begin().await?;
        let result = CategoryRepo::find_by_id(&mut tx, id)
            .await
            .map_err(missing(id));
        finish(tx, result).await.map(CategoryResponse::from)
    }

    /// Fetch every category.
    pub async fn find_all(pool: &DbPool) -> AppResult<Vec<CategoryResponse>> {
        let mut tx = pool.begin().await?;
        let result = CategoryRepo::find_all(&mut tx).await.map_err(AppError::from);
        let categories = finish(tx, result).await?;
        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    /// Delete a category. Zero affected rows means it did not exist.
    pub async fn delete_by_id(pool: &DbPool, id: DbId) -> AppResult<()> {
        let mut tx = pool.begin().await?;
        let result = CategoryRepo::delete_by_id(&mut tx, id)
            .await
            .map_err(missing(id));
        finish(tx, result).await?;

        tracing::info!(category_id = id, "Category deleted");
        Ok(())
    }
}

async fn rename(conn: &mut PgConnection, id: DbId, name: &str) -> AppResult<Category> {
    CategoryRepo::find_by_id(&mut *conn, id)
        .await
        .map_err(missing(id))?;
    CategoryRepo::update(&mut *conn, id, name)
        .await
        .map_err(missing(id))
}

/// Commit on success, roll back on failure, and hand the result back.
async fn finish<T>(tx: Transaction<'_, Postgres>, result: AppResult<T>) -> AppResult<T> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!(error = %rollback_err, "Failed to roll back transaction");
            }
            Err(err)
        }
    }
}

/// Turn `RowNotFound` into a not-found for `id`; other errors pass through.
fn missing(id: DbId) -> impl FnOnce(sqlx::Error) -> AppError {
    move |err| match err {
        sqlx::Error::RowNotFound => AppError::Core(CoreError::NotFound { entity: ENTITY, id }),
        other => AppError::Database(other),
    }
}
