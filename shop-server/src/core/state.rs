use std::sync::Arc;

use crate::core::Config;
use crate::store::{Catalog, MemoryCatalog, MemoryOrders, Orders};

/// 服务器状态 - 持有所有存储的共享引用
///
/// ServerState 是后端的核心数据结构。使用 Arc 实现浅拷贝，
/// 每个请求处理器持有同一份存储。
///
/// # 组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | catalog | Arc<dyn Catalog> | 商品目录存储 |
/// | orders | Arc<dyn Orders> | 订单存储 |
///
/// 存储以 trait 对象持有，替换为持久化实现时无需改动
/// 查询引擎和 API 层。
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 商品目录存储
    pub catalog: Arc<dyn Catalog>,
    /// 订单存储
    pub orders: Arc<dyn Orders>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替
    pub fn new(config: Config, catalog: Arc<dyn Catalog>, orders: Arc<dyn Orders>) -> Self {
        Self {
            config,
            catalog,
            orders,
        }
    }

    /// 初始化服务器状态
    ///
    /// 商品目录以种子数据填充，订单存储从空开始。
    pub fn initialize(config: &Config) -> Self {
        Self::new(
            config.clone(),
            Arc::new(MemoryCatalog::with_seed()),
            Arc::new(MemoryOrders::new()),
        )
    }
}
