// ==========================================
// 生产计划与库存分析引擎 - 模拟表构建器
// ==========================================
// 职责: 枚举 (宽放率, 人数, 班长) 全组合, 逐行计算产能指标
// 输出顺序: 宽放率外层 -> 人数中层 -> 班长内层 (与嵌套循环一致)
// ==========================================

use crate::domain::simulation::SimulationRow;
use crate::engine::error::{ensure_non_negative, EngineError, EngineResult};
use crate::engine::formula;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

// ==========================================
// StepRange - 含端点的步进区间
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepRange {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl StepRange {
    pub fn new(start: f64, end: f64, step: f64) -> Self {
        Self { start, end, step }
    }

    /// 展开为取值序列 (包含 end, 若 end 恰好落在步长上)
    pub fn values(&self) -> EngineResult<Vec<f64>> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(EngineError::invalid("range", "区间端点必须为有限数值"));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(EngineError::invalid("step", format!("步长必须大于 0, 实际 {}", self.step)));
        }
        if self.start > self.end {
            return Err(EngineError::invalid(
                "range",
                format!("起点 {} 大于终点 {}", self.start, self.end),
            ));
        }

        let count = ((self.end - self.start) / self.step + 1e-9).floor() as usize + 1;
        Ok((0..count).map(|i| self.start + self.step * i as f64).collect())
    }
}

// ==========================================
// SimulationRanges - 模拟参数取值集合
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRanges {
    pub tolerances_pct: Vec<f64>, // 宽放率, 百分数 (0-100)
    pub workforce: Vec<u32>,      // 人数
    pub shift_hours: Vec<f64>,    // 每日工作小时
}

impl Default for SimulationRanges {
    /// 宽放率 0..=30 步长 5, 人数 5..=50 步长 5, 班长 4..=12 步长 2
    fn default() -> Self {
        Self {
            tolerances_pct: (0i32..=30).step_by(5).map(f64::from).collect(),
            workforce: (5u32..=50).step_by(5).collect(),
            shift_hours: (4i32..=12).step_by(2).map(f64::from).collect(),
        }
    }
}

impl SimulationRanges {
    /// 由三个步进区间构建
    ///
    /// 人数区间的起点与步长必须为非负整数, 保证展开后各取值互不相同
    pub fn from_steps(
        tolerances_pct: StepRange,
        workforce: StepRange,
        shift_hours: StepRange,
    ) -> EngineResult<Self> {
        if workforce.start < 0.0 {
            return Err(EngineError::invalid("workforce", "人数不能为负数"));
        }
        if workforce.start.fract() != 0.0 || workforce.step.fract() != 0.0 {
            return Err(EngineError::invalid(
                "workforce",
                format!(
                    "人数起点与步长必须为整数, 实际起点 {} 步长 {}",
                    workforce.start, workforce.step
                ),
            ));
        }
        let workforce_values = workforce.values()?;
        Ok(Self {
            tolerances_pct: tolerances_pct.values()?,
            workforce: workforce_values.into_iter().map(|w| w as u32).collect(),
            shift_hours: shift_hours.values()?,
        })
    }

    /// 全组合行数
    pub fn combination_count(&self) -> usize {
        self.tolerances_pct.len() * self.workforce.len() * self.shift_hours.len()
    }
}

// ==========================================
// SimulationTableBuilder - 模拟表构建器
// ==========================================
#[derive(Debug, Default)]
pub struct SimulationTableBuilder {
    // 无状态引擎，不需要注入依赖
}

impl SimulationTableBuilder {
    pub fn new() -> Self {
        Self {}
    }

    /// 构建全组合模拟表
    ///
    /// 每行:
    /// - standard_time = base_normal_time × (1 + tol/100)
    /// - total_hours = workforce × shift
    /// - units_per_day = total_hours / standard_time (standard_time <= 0 时为 0)
    #[instrument(skip(self, ranges), fields(rows = ranges.combination_count()))]
    pub fn build(
        &self,
        base_normal_time: f64,
        ranges: &SimulationRanges,
    ) -> EngineResult<Vec<SimulationRow>> {
        ensure_non_negative("base_normal_time", base_normal_time)?;
        for shift in &ranges.shift_hours {
            ensure_non_negative("shift_hours", *shift)?;
        }

        let mut rows = Vec::with_capacity(ranges.combination_count());
        for &tolerance_pct in &ranges.tolerances_pct {
            let standard_time_h = formula::standard_time(base_normal_time, tolerance_pct / 100.0)?;
            for &workforce in &ranges.workforce {
                for &shift_hours in &ranges.shift_hours {
                    let total_hours = workforce as f64 * shift_hours;
                    rows.push(SimulationRow {
                        tolerance_pct,
                        workforce,
                        shift_hours,
                        standard_time_h,
                        total_hours,
                        units_per_day: formula::safe_div(total_hours, standard_time_h),
                    });
                }
            }
        }

        info!(rows = rows.len(), "模拟表构建完成");
        Ok(rows)
    }
}
