// ==========================================
// 生产计划与库存分析引擎 - API 层
// ==========================================
// 职责: 提供场景评估 API, 供外部表现层调用
// ==========================================

pub mod dto;
pub mod error;
pub mod planning_api;

// 重导出核心类型
pub use dto::{
    QueueReport, QueueRequest, ScenarioReport, ScenarioRequest, SensitivityReport,
    StandardTimeReport, StandardTimeRequest,
};
pub use error::{ApiError, ApiResult};
pub use planning_api::PlanningApi;
