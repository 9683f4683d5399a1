//! jobsite-errors - 统一错误处理
//!
//! 估算引擎对数据质量问题一律降级为零值或空结果，这里的错误类型只覆盖真正的故障：
//! 契约违规、配置错误、未知标识符。

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// 错误类别编码（用于日志字段和运行器输出）
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::Validation(_) => "validation",
            Self::Config(_) => "config",
            Self::Internal(_) => "internal",
        }
    }

    /// 转换为可序列化的错误摘要
    pub fn to_summary(&self) -> ErrorSummary {
        ErrorSummary {
            code: self.code().to_string(),
            detail: self.to_string(),
        }
    }
}

/// 错误摘要
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSummary {
    pub code: String,
    pub detail: String,
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;
