// ==========================================
// 生产计划与库存分析引擎 - 配置层
// ==========================================
// 职责: 目录与分析参数的加载、校验、保存
// 存储: JSON 配置文件
// ==========================================

pub mod config_manager;
pub mod engine_config;
pub mod error;

// 重导出核心配置类型
pub use config_manager::{default_config_path, ConfigManager, CONFIG_PATH_ENV};
pub use engine_config::{
    EngineConfig, InventoryConfig, ProductionConfig, QueueConfig, SimulationConfig,
};
pub use error::{ConfigError, ConfigResult};
