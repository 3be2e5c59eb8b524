// ==========================================
// 生产计划与库存分析引擎 - 核心库
// ==========================================
// 系统定位: 决策支持计算层 (表现层在外部)
// 范围: 标准时间 / EOQ / ROP / 排队 / 产品组合 / 模拟表 / 敏感性
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 值对象与类型
pub mod domain;

// 引擎层 - 计算规则
pub mod engine;

// 配置层 - 目录与参数
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 场景评估接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{DemandPeriod, MissingMaterialPolicy, QueueMetricKind, SweepParameter};

// 领域实体
pub use domain::{
    Demand, InventoryPlan, Material, OptimizationResult, PlanEntry, Product, ProductionPlan,
    QueueMetrics, QueueOutcome, SensitivitySeries, SimulationRow,
};

// 引擎
pub use engine::{
    EngineError, EngineResult, InventoryPlanner, ProductionOptimizer, SensitivityAnalyzer,
    SimulationTableBuilder, TimeModel,
};

// 配置
pub use config::{ConfigManager, EngineConfig};

// API
pub use api::{ApiError, ApiResult, PlanningApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "生产计划与库存分析引擎";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
