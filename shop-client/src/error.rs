//! Client-side error types

use thiserror::Error;

/// 客户端错误
///
/// 网络失败和服务端错误响应都归到这里；调用方 (TUI) 以阻塞提示
/// 呈现给用户，不做重试。
#[derive(Debug, Error)]
pub enum ClientError {
    /// 网络层失败 (连接、超时、解码)
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// 服务端返回的错误响应 (4xx/5xx 带 message 体)
    #[error("{message}")]
    Api { status: u16, message: String },
}

impl ClientError {
    /// 是否为 404
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status: 404, .. })
    }
}

/// Client-level Result type
pub type ClientResult<T> = Result<T, ClientError>;
