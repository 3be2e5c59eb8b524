// ==========================================
// 生产计划与库存分析引擎 - 模拟/分析结果对象
// ==========================================
// 职责: 模拟表行、敏感性序列、标准时间派生结果
// ==========================================

use crate::domain::types::SweepParameter;
use serde::{Deserialize, Serialize};

// ==========================================
// SimulationRow - 模拟表行
// ==========================================
// (宽放率, 人数, 班长) -> (标准时间, 总工时, 日产量)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRow {
    pub tolerance_pct: f64,
    pub workforce: u32,
    pub shift_hours: f64,
    pub standard_time_h: f64,
    pub total_hours: f64,
    pub units_per_day: f64,
}

// ==========================================
// SensitivityPoint / SensitivitySeries
// ==========================================
// output 为 f64::INFINITY 表示该采样点公式无定义; JSON 中写为 null
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    pub input: f64,
    #[serde(with = "undefined_as_null")]
    pub output: f64,
}

impl SensitivityPoint {
    pub fn is_defined(&self) -> bool {
        self.output.is_finite()
    }
}

/// 非有限值 <-> null
mod undefined_as_null {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        let value = if value.is_finite() { Some(*value) } else { None };
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivitySeries {
    pub parameter: SweepParameter,
    pub points: Vec<SensitivityPoint>,
}

impl SensitivitySeries {
    pub fn inputs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.input).collect()
    }

    pub fn outputs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.output).collect()
    }

    /// 无定义采样点数量
    pub fn undefined_count(&self) -> usize {
        self.points.iter().filter(|p| !p.is_defined()).count()
    }
}

// ==========================================
// ActivitySensitivity - 活动对总工时的偏导
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySensitivity {
    pub activity: String,
    pub partial_derivative: f64,
}

// ==========================================
// DailyOutput - 日产能估算
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyOutput {
    pub workforce: u32,
    pub shift_hours: f64,
    pub total_hours: f64,
    pub standard_time_h: f64,
    pub units_per_day: f64,                 // 整机
    pub first_activity_units_per_day: f64,  // 仅第一道活动 (如发动机装配)
}
