// ==========================================
// 生产计划与库存分析引擎 - 配置层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    // ===== 文件相关错误 =====
    #[error("配置文件不存在: {0}")]
    FileNotFound(String),

    #[error("配置文件读写失败 ({path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ===== 解析错误 =====
    #[error("配置解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    // ===== 校验错误 =====
    #[error("配置校验失败: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// 配置层 Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
