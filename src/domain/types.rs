// ==========================================
// 生产计划与库存分析引擎 - 领域类型定义
// ==========================================
// 职责: 跨模块共享的枚举类型
// 序列化格式: SCREAMING_SNAKE_CASE (与配置文件一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 需求周期 (Demand Period)
// ==========================================
// 月需求 × 12 = 年需求
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DemandPeriod {
    Monthly, // 月需求
    Annual,  // 年需求
}

impl DemandPeriod {
    /// 换算为年需求的倍数
    pub fn periods_per_year(&self) -> f64 {
        match self {
            DemandPeriod::Monthly => 12.0,
            DemandPeriod::Annual => 1.0,
        }
    }
}

impl fmt::Display for DemandPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemandPeriod::Monthly => write!(f, "MONTHLY"),
            DemandPeriod::Annual => write!(f, "ANNUAL"),
        }
    }
}

// ==========================================
// 缺失物料处理策略 (Missing Material Policy)
// ==========================================
// BOM 引用了物料目录中不存在的物料时的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MissingMaterialPolicy {
    #[default]
    Skip,   // 跳过并记录原因
    Reject, // 直接报错
}

impl fmt::Display for MissingMaterialPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingMaterialPolicy::Skip => write!(f, "SKIP"),
            MissingMaterialPolicy::Reject => write!(f, "REJECT"),
        }
    }
}

// ==========================================
// 排队指标类型 (Queue Metric Kind)
// ==========================================
// 敏感性分析时选择输出哪一个排队指标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueueMetricKind {
    AvgQueueLength,  // Lq
    AvgSystemLength, // Ls
    AvgWaitTime,     // Wq
    AvgSystemTime,   // Ws
}

impl fmt::Display for QueueMetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueMetricKind::AvgQueueLength => write!(f, "LQ"),
            QueueMetricKind::AvgSystemLength => write!(f, "LS"),
            QueueMetricKind::AvgWaitTime => write!(f, "WQ"),
            QueueMetricKind::AvgSystemTime => write!(f, "WS"),
        }
    }
}

// ==========================================
// 扫描参数 (Sweep Parameter)
// ==========================================
// 敏感性分析中被扫描的输入
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SweepParameter {
    AnnualDemand, // 年需求 -> EOQ
    Utilization,  // 利用率 -> 排队指标
    Tolerance,    // 宽放率 -> 标准时间
}

impl fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepParameter::AnnualDemand => write!(f, "ANNUAL_DEMAND"),
            SweepParameter::Utilization => write!(f, "UTILIZATION"),
            SweepParameter::Tolerance => write!(f, "TOLERANCE"),
        }
    }
}
