//! Domain models
//!
//! - [`Product`] - 商品实体及创建/更新载荷
//! - [`Order`] - 订单实体 (创建后不可变)
//! - [`CartItem`] - 购物车条目 (商品快照 + 数量)

pub mod cart;
pub mod order;
pub mod product;
pub mod serde_helpers;

pub use cart::CartItem;
pub use order::{CustomerInfo, Order, OrderCreate, OrderStatus};
pub use product::{Product, ProductCreate, ProductUpdate};
