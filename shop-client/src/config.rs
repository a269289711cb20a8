use std::path::PathBuf;

/// 客户端配置
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | SHOPHUB_API_URL | http://localhost:5000 | 服务端地址 |
/// | SHOPHUB_DATA_DIR | ./.shophub | 购物车等本地数据目录 |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// 服务端基础 URL
    pub api_url: String,
    /// 本地数据目录
    pub data_dir: PathBuf,
}

impl ClientConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("SHOPHUB_API_URL")
                .unwrap_or_else(|_| "http://localhost:5000".into()),
            data_dir: std::env::var("SHOPHUB_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./.shophub")),
        }
    }

    /// 购物车文件路径
    pub fn cart_path(&self) -> PathBuf {
        self.data_dir.join("cart.json")
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
