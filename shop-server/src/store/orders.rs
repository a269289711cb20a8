//! Order Store
//!
//! 订单的仓储抽象和内存实现。订单创建后不可变。

use chrono::Utc;
use parking_lot::RwLock;
use shared::models::{Order, OrderCreate, OrderStatus};

/// Order repository
pub trait Orders: Send + Sync {
    /// All orders in submission order
    fn list(&self) -> Vec<Order>;

    /// Append an order; the store assigns a sequential id and timestamp
    fn create(&self, data: OrderCreate) -> Order;
}

struct OrdersInner {
    orders: Vec<Order>,
    next_id: u64,
}

/// In-memory order store
///
/// `total` 按提交值原样保存，不做重新计算；库存也不在下单时扣减。
pub struct MemoryOrders {
    inner: RwLock<OrdersInner>,
}

impl MemoryOrders {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(OrdersInner {
                orders: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryOrders {
    fn default() -> Self {
        Self::new()
    }
}

impl Orders for MemoryOrders {
    fn list(&self) -> Vec<Order> {
        self.inner.read().orders.clone()
    }

    fn create(&self, data: OrderCreate) -> Order {
        let mut inner = self.inner.write();

        let id = inner.next_id.to_string();
        inner.next_id += 1;

        let order = Order {
            id,
            items: data.items,
            total: data.total,
            customer_info: data.customer_info,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        };

        inner.orders.push(order.clone());
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::CustomerInfo;

    fn order_payload(total: f64) -> OrderCreate {
        OrderCreate {
            items: Vec::new(),
            total,
            customer_info: CustomerInfo::default(),
        }
    }

    #[test]
    fn ids_are_sequential_from_one() {
        let store = MemoryOrders::new();

        let first = store.create(order_payload(10.0));
        let second = store.create(order_payload(20.0));

        assert_eq!(first.id, "1");
        assert_eq!(second.id, "2");
        assert_eq!(first.status, OrderStatus::Pending);
    }

    #[test]
    fn total_is_stored_as_submitted() {
        let store = MemoryOrders::new();

        // 客户端计算的金额原样信任，哪怕和条目对不上
        let order = store.create(order_payload(65.97));
        assert_eq!(order.total, 65.97);
        assert_eq!(store.list().len(), 1);
    }
}
