// ==========================================
// 生产计划与库存分析引擎 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，将引擎/配置错误转换为面向调用方的错误消息
// 约定: 错误以返回值传递给表现层, 不跨边界 panic
// ==========================================

use crate::config::error::ConfigError;
use crate::engine::error::EngineError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    // ==========================================
    // 配置错误
    // ==========================================
    #[error(transparent)]
    Config(#[from] ConfigError),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 EngineError 转换
// ==========================================
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidInput { field, reason } => {
                ApiError::InvalidInput(format!("字段{}错误: {}", field, reason))
            }
            EngineError::UnknownMaterial { product, material } => {
                ApiError::NotFound(format!("产品{}的BOM物料{}不在物料目录中", product, material))
            }
            EngineError::EmptyCatalog => ApiError::NotFound("产品目录为空".to_string()),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_conversion() {
        let err: ApiError = EngineError::invalid("capacity_h", "不能为负数").into();
        assert!(matches!(err, ApiError::InvalidInput(ref m) if m.contains("capacity_h")));

        let err: ApiError = EngineError::UnknownMaterial {
            product: "Sedan".to_string(),
            material: "Chrome".to_string(),
        }
        .into();
        assert!(matches!(err, ApiError::NotFound(ref m) if m.contains("Chrome")));
    }
}
