//! Handlers for the `/categories` resource.

use axum::extract::State;
use catalog_core::types::DbId;
use catalog_db::models::category::{CategoryResponse, CreateCategory, UpdateCategory};

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath};
use crate::response::ApiResponse;
use crate::services::CategoryService;
use crate::state::AppState;

/// GET /api/categories
pub async fn list(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<CategoryResponse>>> {
    let categories = CategoryService::find_all(&state.pool).await?;
    Ok(ApiResponse::ok(categories))
}

/// GET /api/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<ApiResponse<CategoryResponse>> {
    let category = CategoryService::find_by_id(&state.pool, id).await?;
    Ok(ApiResponse::ok(category))
}

/// POST /api/categories
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateCategory>,
) -> AppResult<ApiResponse<CategoryResponse>> {
    let category = CategoryService::create(&state.pool, &input).await?;
    Ok(ApiResponse::ok(category))
}

/// PUT /api/categories/{id}
///
/// Any `id` in the body is ignored; the path wins.
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateCategory>,
) -> AppResult<ApiResponse<CategoryResponse>> {
    let category = CategoryService::update(&state.pool, id, &input).await?;
    Ok(ApiResponse::ok(category))
}

/// DELETE /api/categories/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<ApiResponse<()>> {
    CategoryService::delete_by_id(&state.pool, id).await?;
    Ok(ApiResponse::empty())
}
