// ==========================================
// 生产计划与库存分析引擎 - 领域模型层
// ==========================================
// 职责: 定义值对象与共享类型
// 红线: 不含计算逻辑, 不含 I/O
// ==========================================

pub mod material;
pub mod plan;
pub mod product;
pub mod queue;
pub mod simulation;
pub mod types;

// 重导出核心类型
pub use material::{
    Demand, InventoryParameters, InventoryPlan, Material, MaterialInventoryPlan, SkippedMaterial,
};
pub use plan::{OptimizationResult, PlanEntry, ProductionPlan};
pub use product::Product;
pub use queue::{QueueMetrics, QueueOutcome};
pub use simulation::{
    ActivitySensitivity, DailyOutput, SensitivityPoint, SensitivitySeries, SimulationRow,
};
pub use types::{DemandPeriod, MissingMaterialPolicy, QueueMetricKind, SweepParameter};
