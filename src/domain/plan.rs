// ==========================================
// 生产计划与库存分析引擎 - 生产计划领域模型
// ==========================================
// 职责: 产品排名结果 + 贪心产能分配计划
// 生命周期: 每次优化运行构建一次, 之后不再修改
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// OptimizationResult - 产品排名
// ==========================================
// rank = 1 表示单位工时利润最高; 并列时保持目录顺序
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub product: String,
    pub profit_per_unit: f64,
    pub profit_per_hour: f64,
    pub production_time_h: f64,
    pub rank: usize,
    pub loss_making: bool,
}

// ==========================================
// PlanEntry - 计划明细
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub product: String,
    pub rank: usize,
    pub units: u64,        // floor(剩余产能 / 单位工时)
    pub time_used_h: f64,
    pub profit: f64,
}

// ==========================================
// ProductionPlan - 生产计划
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionPlan {
    pub rankings: Vec<OptimizationResult>,
    pub entries: Vec<PlanEntry>,
    pub capacity_h: f64,
    pub total_time_used_h: f64,
    pub remaining_capacity_h: f64,
    pub total_profit: f64,
    pub utilization: f64,  // used / capacity, capacity 为 0 时为 0
}

impl ProductionPlan {
    /// 排名第一的产品
    pub fn top_ranked(&self) -> Option<&OptimizationResult> {
        self.rankings.first()
    }

    /// 按产品名称查找计划明细
    pub fn entry(&self, product: &str) -> Option<&PlanEntry> {
        self.entries.iter().find(|e| e.product == product)
    }
}
