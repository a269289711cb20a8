//! Order API Handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::models::{Order, OrderCreate};

use crate::core::ServerState;

/// POST /api/orders - 创建订单
///
/// 购物车快照和客户端计算的金额原样入库；不扣减库存。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> (StatusCode, Json<Order>) {
    let order = state.orders.create(payload);

    tracing::info!(id = %order.id, total = order.total, "Order placed");

    (StatusCode::CREATED, Json(order))
}

/// GET /api/orders - 获取所有订单 (管理面板)
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Order>> {
    Json(state.orders.list())
}
