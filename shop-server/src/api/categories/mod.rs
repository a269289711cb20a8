//! Category API 模块
//!
//! 分类是商品上的自由文本标签，这里按首次出现顺序去重列出。

use axum::{Json, Router, extract::State, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/categories", get(list))
}

/// GET /api/categories - 获取所有分类
pub async fn list(State(state): State<ServerState>) -> Json<Vec<String>> {
    Json(state.catalog.categories())
}
