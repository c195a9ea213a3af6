//! Category handlers.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;

use super::parse_id;
use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::domain::{Category, EntityKind};
use crate::errors::AppResult;
use crate::types::ApiResponse;

/// Category create/update request
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CategoryRequest {
    #[schema(example = "Streaming")]
    pub name: String,
}

/// Create category routes
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/category", post(create_category))
        .route(
            "/category/:id",
            get(get_category).put(update_category).delete(delete_category),
        )
        .route("/categories", get(list_categories))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/api/category",
    tag = "Categories",
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Envelope carrying the created category", body = Category)
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CategoryRequest>,
) -> AppResult<ApiResponse<Category>> {
    let category = state
        .category_service
        .create(Category::new(payload.name))
        .await?;

    Ok(ApiResponse::success(category))
}

/// Get a category by id
#[utoipa::path(
    get,
    path = "/api/category/{id}",
    tag = "Categories",
    params(("id" = u64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Envelope carrying the category", body = Category)
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Category>> {
    let id = parse_id(&id, EntityKind::Category)?;
    let category = state.category_service.get(&id).await?;

    Ok(ApiResponse::success(category))
}

/// List all categories
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Categories",
    responses(
        (status = 200, description = "Envelope carrying every category", body = [Category])
    )
)]
pub async fn list_categories(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<Category>>> {
    let categories = state.category_service.list().await?;
    Ok(ApiResponse::success(categories))
}

/// Rename a category
#[utoipa::path(
    put,
    path = "/api/category/{id}",
    tag = "Categories",
    params(("id" = u64, Path, description = "Category id")),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Envelope carrying the updated category", body = Category)
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<CategoryRequest>,
) -> AppResult<ApiResponse<Category>> {
    let id = parse_id(&id, EntityKind::Category)?;

    let mut category = state.category_service.get(&id).await?;
    category.name = payload.name;
    let category = state.category_service.update(category).await?;

    Ok(ApiResponse::success(category))
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/api/category/{id}",
    tag = "Categories",
    params(("id" = u64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Success envelope without data")
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    let id = parse_id(&id, EntityKind::Category)?;
    state.category_service.delete(&id).await?;

    Ok(ApiResponse::empty())
}
