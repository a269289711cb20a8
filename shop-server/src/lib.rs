//! ShopHub Server - 店铺后端服务
//!
//! # 架构概述
//!
//! 本模块是 ShopHub 的 REST 后端，提供以下核心功能：
//!
//! - **商品目录** (`store::catalog`): 进程内商品存储，带种子数据
//! - **订单存储** (`store::orders`): 进程内订单存储，结账时追加
//! - **查询引擎** (`query`): 商品列表的过滤/排序
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! shop-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── store/         # 内存存储 (仓储抽象 + 种子数据)
//! ├── query/         # 商品查询引擎
//! └── utils/         # 错误、日志
//! ```

pub mod api;
pub mod core;
pub mod query;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState, build_app, setup_environment};
pub use query::ProductQuery;
pub use store::{Catalog, MemoryCatalog, MemoryOrders, Orders};
pub use utils::{AppError, AppResult, MessageResponse};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   _____ __                 __  __      __
  / ___// /_  ____  ____   / / / /_  __/ /_
  \__ \/ __ \/ __ \/ __ \ / /_/ / / / / __ \
 ___/ / / / / /_/ / /_/ // __  / /_/ / /_/ /
/____/_/ /_/\____/ .___//_/ /_/\__,_/_.___/
                /_/
    "#
    );
}
