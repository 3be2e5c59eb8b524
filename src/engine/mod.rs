// ==========================================
// 生产计划与库存分析引擎 - 引擎层
// ==========================================
// 职责: 实现计算规则, 不做 I/O
// 红线: 所有引擎无状态, 同输入同输出
// ==========================================

pub mod error;
pub mod formula;
pub mod inventory;
pub mod optimizer;
pub mod sensitivity;
pub mod simulation;

// 重导出核心引擎
pub use error::{EngineError, EngineResult};
pub use formula::TimeModel;
pub use inventory::InventoryPlanner;
pub use optimizer::ProductionOptimizer;
pub use sensitivity::{EoqScenario, SensitivityAnalyzer};
pub use simulation::{SimulationRanges, SimulationTableBuilder, StepRange};
