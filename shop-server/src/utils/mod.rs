//! 工具模块 - 错误处理和日志
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型
//! - [`MessageResponse`] - `{"message": ...}` 响应体
//! - [`logger`] - 日志初始化

pub mod error;
pub mod logger;
pub mod result;

pub use error::{AppError, MessageResponse};
pub use result::AppResult;
