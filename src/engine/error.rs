// ==========================================
// 生产计划与库存分析引擎 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 约定: 无定义结果 (不稳定队列 / EOQ 无定义) 不是错误, 以值返回
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    // ===== 输入校验错误 =====
    #[error("无效输入 (字段 {field}): {reason}")]
    InvalidInput { field: String, reason: String },

    // ===== 参考数据错误 =====
    #[error("未知物料: product={product}, material={material}")]
    UnknownMaterial { product: String, material: String },

    #[error("产品目录为空")]
    EmptyCatalog,
}

impl EngineError {
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

/// 引擎层 Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;

// ==========================================
// 输入校验辅助
// ==========================================

/// 要求有限且 >= 0
pub(crate) fn ensure_non_negative(field: &str, value: f64) -> EngineResult<()> {
    if !value.is_finite() {
        return Err(EngineError::invalid(field, format!("必须为有限数值, 实际 {}", value)));
    }
    if value < 0.0 {
        return Err(EngineError::invalid(field, format!("不能为负数, 实际 {}", value)));
    }
    Ok(())
}

/// 要求有限且 > 0
pub(crate) fn ensure_positive(field: &str, value: f64) -> EngineResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(EngineError::invalid(field, format!("必须大于 0, 实际 {}", value)));
    }
    Ok(())
}
