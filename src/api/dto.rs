// ==========================================
// 生产计划与库存分析引擎 - PlanningApi DTO 定义
// ==========================================
// 职责: 定义场景评估的请求和响应结构
// 约定: 请求字段均可缺省, 缺省时取配置中的值
// ==========================================

use crate::domain::material::{Demand, InventoryPlan};
use crate::domain::plan::ProductionPlan;
use crate::domain::queue::QueueOutcome;
use crate::domain::simulation::{
    ActivitySensitivity, DailyOutput, SensitivitySeries, SimulationRow,
};
use crate::engine::formula::TimeModel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// 场景请求
// ==========================================

/// 场景评估请求
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioRequest {
    /// 日产能 (小时)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_h: Option<f64>,

    /// 做库存计划的产品 (缺省取排名第一的产品)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,

    /// 产品需求
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demand: Option<Demand>,

    /// 标准时间输入
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_time: Option<StandardTimeRequest>,

    /// 排队输入
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue: Option<QueueRequest>,
}

/// 标准时间请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardTimeRequest {
    pub activity_x_h: f64,
    pub activity_y_h: f64,
    /// 宽放率, 百分数 (15 = 15%)
    pub tolerance_pct: f64,
    pub workforce: u32,
    pub shift_hours: f64,
}

/// 排队请求
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QueueRequest {
    pub arrival_rate: f64,
    pub service_rate: f64,
    pub servers: u32,
}

// ==========================================
// 场景响应
// ==========================================

/// 标准时间报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardTimeReport {
    pub time_model: TimeModel,
    pub activity_x_h: f64,
    pub activity_y_h: f64,
    /// 总工时 (正常时间)
    pub total_time_h: f64,
    /// 偏导柱状数据
    pub gradient: Vec<ActivitySensitivity>,
    pub tolerance_pct: f64,
    pub standard_time_h: f64,
    pub daily_output: DailyOutput,
}

/// 排队报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueReport {
    pub arrival_rate: f64,
    pub service_rate: f64,
    pub servers: u32,
    pub outcome: QueueOutcome,
}

/// 敏感性报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensitivityReport {
    /// EOQ 随年需求 (取库存计划中第一个 EOQ 有定义的物料; 没有时为 None)
    pub eoq_material: Option<String>,
    pub eoq_vs_demand: Option<SensitivitySeries>,
    pub queue_vs_utilization: SensitivitySeries,
    pub standard_time_vs_tolerance: SensitivitySeries,
}

/// 场景评估报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub production_plan: ProductionPlan,
    pub inventory_plan: InventoryPlan,
    pub standard_time: StandardTimeReport,
    pub simulation_table: Vec<SimulationRow>,
    pub queue: QueueReport,
    pub sensitivity: SensitivityReport,
}
