//! Product API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use shared::models::{Product, ProductCreate, ProductUpdate};

use crate::core::ServerState;
use crate::query::{self, ProductQuery};
use crate::utils::{AppError, AppResult, MessageResponse};

const PRODUCT_NOT_FOUND: &str = "Product not found";

/// GET /api/products - 获取商品列表 (支持分类/搜索/排序)
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<ProductQuery>,
) -> Json<Vec<Product>> {
    Json(query::list(state.catalog.list(), &params))
}

/// GET /api/products/:id - 获取单个商品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let product = state
        .catalog
        .get(&id)
        .ok_or_else(|| AppError::not_found(PRODUCT_NOT_FOUND))?;
    Ok(Json(product))
}

/// POST /api/products - 创建商品
///
/// 数字字段接受字符串或数字；无法解析时请求在反序列化阶段以 400 被拒。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> (StatusCode, Json<Product>) {
    let product = state.catalog.create(payload);

    tracing::info!(id = %product.id, name = %product.name, "Product created");

    (StatusCode::CREATED, Json(product))
}

/// PUT /api/products/:id - 更新商品 (浅合并，id 不可变)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    let product = state
        .catalog
        .update(&id, payload)
        .ok_or_else(|| AppError::not_found(PRODUCT_NOT_FOUND))?;

    tracing::info!(id = %id, "Product updated");

    Ok(Json(product))
}

/// DELETE /api/products/:id - 删除商品
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    if !state.catalog.delete(&id) {
        return Err(AppError::not_found(PRODUCT_NOT_FOUND));
    }

    tracing::info!(id = %id, "Product deleted");

    Ok(Json(MessageResponse::new("Product deleted successfully")))
}
