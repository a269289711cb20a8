//! 内存存储层
//!
//! 商品目录和订单都保存在进程内存中，进程退出即消失 (无持久化)。
//! 存储以 trait 抽象 ([`Catalog`], [`Orders`])，API 层只依赖抽象，
//! 将来替换为持久化实现时无需改动查询引擎和处理器。

pub mod catalog;
pub mod orders;
pub mod seed;

pub use catalog::{Catalog, MemoryCatalog};
pub use orders::{MemoryOrders, Orders};
