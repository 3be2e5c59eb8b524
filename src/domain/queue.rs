// ==========================================
// 生产计划与库存分析引擎 - 排队模型领域对象
// ==========================================
// M/M/1 精确解; M/M/c 为简化近似 (非 Erlang-C)
// ==========================================

use crate::domain::types::QueueMetricKind;
use serde::{Deserialize, Serialize};

// ==========================================
// QueueMetrics - 稳态排队指标
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueueMetrics {
    pub servers: u32,
    pub utilization: f64,        // ρ
    pub avg_queue_length: f64,   // Lq
    pub avg_system_length: f64,  // Ls
    pub avg_wait_time: f64,      // Wq
    pub avg_system_time: f64,    // Ws
    pub approximate: bool,       // c > 1 时为 true
}

impl QueueMetrics {
    pub fn metric(&self, kind: QueueMetricKind) -> f64 {
        match kind {
            QueueMetricKind::AvgQueueLength => self.avg_queue_length,
            QueueMetricKind::AvgSystemLength => self.avg_system_length,
            QueueMetricKind::AvgWaitTime => self.avg_wait_time,
            QueueMetricKind::AvgSystemTime => self.avg_system_time,
        }
    }
}

// ==========================================
// QueueOutcome - 排队计算结果
// ==========================================
// ρ >= 1 时系统不存在稳态, 返回 Unstable 而不是错误
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueueOutcome {
    Stable(QueueMetrics),
    Unstable { utilization: f64 },
}

impl QueueOutcome {
    pub fn is_stable(&self) -> bool {
        matches!(self, QueueOutcome::Stable(_))
    }

    pub fn metrics(&self) -> Option<&QueueMetrics> {
        match self {
            QueueOutcome::Stable(m) => Some(m),
            QueueOutcome::Unstable { .. } => None,
        }
    }

    pub fn utilization(&self) -> f64 {
        match self {
            QueueOutcome::Stable(m) => m.utilization,
            QueueOutcome::Unstable { utilization } => *utilization,
        }
    }
}
