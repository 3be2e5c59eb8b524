// ==========================================
// 生产计划与库存分析引擎 - 公式库
// ==========================================
// 职责: 标准时间、总工时模型及偏导、EOQ/ROP、排队指标
// 红线: 纯函数, 无状态, 无 I/O; 无定义结果以值返回
// ==========================================

use crate::domain::queue::{QueueMetrics, QueueOutcome};
use crate::domain::simulation::{ActivitySensitivity, DailyOutput};
use crate::engine::error::{ensure_non_negative, ensure_positive, EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 标准时间 (Waktu Baku)
// ==========================================

/// 标准时间 = 正常时间 × (1 + 宽放率)
///
/// # 参数
/// - `normal_time`: 正常时间 (>= 0)
/// - `tolerance`: 宽放率, 小数形式 (0.15 = 15%, >= 0)
pub fn standard_time(normal_time: f64, tolerance: f64) -> EngineResult<f64> {
    ensure_non_negative("normal_time", normal_time)?;
    ensure_non_negative("tolerance", tolerance)?;
    Ok(normal_time * (1.0 + tolerance))
}

// ==========================================
// TimeModel - 两道活动的总工时模型
// ==========================================
// Quadratic:     T = 2x² + 3xy + y²  (规范模型, 与偏导 4x+3y / 3x+2y 一致)
// LiteralLinear: T = 4x + 3xy + 2y   (按字面读取 2*x*2 与 y*2 的写法)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeModel {
    #[default]
    Quadratic,
    LiteralLinear,
}

impl TimeModel {
    /// 总工时 T(x, y)
    pub fn total_time(&self, x: f64, y: f64) -> EngineResult<f64> {
        ensure_non_negative("x", x)?;
        ensure_non_negative("y", y)?;
        let total = match self {
            TimeModel::Quadratic => 2.0 * x * x + 3.0 * x * y + y * y,
            TimeModel::LiteralLinear => 4.0 * x + 3.0 * x * y + 2.0 * y,
        };
        Ok(total)
    }

    /// 偏导 (∂T/∂x, ∂T/∂y), 手工推导的闭式解
    pub fn gradient(&self, x: f64, y: f64) -> EngineResult<(f64, f64)> {
        ensure_non_negative("x", x)?;
        ensure_non_negative("y", y)?;
        let grad = match self {
            TimeModel::Quadratic => (4.0 * x + 3.0 * y, 3.0 * x + 2.0 * y),
            TimeModel::LiteralLinear => (4.0 + 3.0 * y, 3.0 * x + 2.0),
        };
        Ok(grad)
    }
}

impl fmt::Display for TimeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeModel::Quadratic => write!(f, "QUADRATIC"),
            TimeModel::LiteralLinear => write!(f, "LITERAL_LINEAR"),
        }
    }
}

/// 总工时 (规范模型 2x² + 3xy + y²)
pub fn total_production_time(x: f64, y: f64) -> EngineResult<f64> {
    TimeModel::Quadratic.total_time(x, y)
}

/// 偏导 (规范模型)
pub fn partial_derivatives(x: f64, y: f64) -> EngineResult<(f64, f64)> {
    TimeModel::Quadratic.gradient(x, y)
}

/// 偏导转为带标签的柱状数据, 仅作敏感性指示
pub fn activity_sensitivity(
    model: TimeModel,
    x: f64,
    y: f64,
) -> EngineResult<Vec<ActivitySensitivity>> {
    let (d_dx, d_dy) = model.gradient(x, y)?;
    Ok(vec![
        ActivitySensitivity {
            activity: "x".to_string(),
            partial_derivative: d_dx,
        },
        ActivitySensitivity {
            activity: "y".to_string(),
            partial_derivative: d_dy,
        },
    ])
}

/// 日产能估算
///
/// - 日总工时 = 人数 × 班长
/// - 整机日产量 = 日总工时 / 标准时间 (标准时间 <= 0 时为 0)
/// - 第一道活动日产量 = 日总工时 / x (x <= 0 时为 0)
pub fn daily_output(
    normal_time: f64,
    tolerance: f64,
    workforce: u32,
    shift_hours: f64,
    first_activity_h: f64,
) -> EngineResult<DailyOutput> {
    ensure_non_negative("shift_hours", shift_hours)?;
    ensure_non_negative("first_activity_h", first_activity_h)?;
    let standard_time_h = standard_time(normal_time, tolerance)?;
    let total_hours = workforce as f64 * shift_hours;

    Ok(DailyOutput {
        workforce,
        shift_hours,
        total_hours,
        standard_time_h,
        units_per_day: safe_div(total_hours, standard_time_h),
        first_activity_units_per_day: safe_div(total_hours, first_activity_h),
    })
}

// ==========================================
// 库存公式 (EOQ / ROP / 总成本)
// ==========================================

/// 经济订货批量 EOQ = sqrt(2DS / (H·C))
///
/// # 返回
/// - `Ok(Some(eoq))`: 正常结果
/// - `Ok(None)`: H·C <= 0, EOQ 无定义
/// - `Err(InvalidInput)`: D 或 S 为负/非有限值
pub fn economic_order_quantity(
    annual_demand: f64,
    order_cost: f64,
    holding_cost_rate: f64,
    unit_cost: f64,
) -> EngineResult<Option<f64>> {
    ensure_non_negative("annual_demand", annual_demand)?;
    ensure_non_negative("order_cost", order_cost)?;
    if !holding_cost_rate.is_finite() || !unit_cost.is_finite() {
        return Err(EngineError::invalid("holding_cost", "必须为有限数值"));
    }

    let holding_cost = holding_cost_rate * unit_cost;
    if holding_cost <= 0.0 {
        return Ok(None);
    }
    Ok(Some((2.0 * annual_demand * order_cost / holding_cost).sqrt()))
}

/// 再订货点 ROP = 日需求 × 提前期 + 安全库存
pub fn reorder_point(daily_demand: f64, lead_time: f64, safety_stock: f64) -> EngineResult<f64> {
    ensure_non_negative("daily_demand", daily_demand)?;
    ensure_non_negative("lead_time", lead_time)?;
    ensure_non_negative("safety_stock", safety_stock)?;
    Ok(daily_demand * lead_time + safety_stock)
}

/// 年库存总成本 = (D/Q)·S + (Q/2)·H·C
///
/// Q <= 0 时订货成本项记为 0
pub fn total_inventory_cost(
    annual_demand: f64,
    order_cost: f64,
    holding_cost_rate: f64,
    unit_cost: f64,
    order_quantity: f64,
) -> f64 {
    let ordering = safe_div(annual_demand, order_quantity) * order_cost;
    let holding = (order_quantity.max(0.0) / 2.0) * holding_cost_rate * unit_cost;
    ordering + holding
}

// ==========================================
// 排队模型
// ==========================================

/// 排队指标
///
/// - c == 1: M/M/1 精确解
/// - c > 1: 简化近似 Ls = λ/(μ − λ/c), 不是 Erlang-C;
///   Lq = Ls − λ/μ, 结果带 `approximate = true`
///
/// ρ >= 1 时返回 `QueueOutcome::Unstable`
pub fn queue_metrics(arrival_rate: f64, service_rate: f64, servers: u32) -> EngineResult<QueueOutcome> {
    ensure_positive("arrival_rate", arrival_rate)?;
    ensure_positive("service_rate", service_rate)?;
    if servers == 0 {
        return Err(EngineError::invalid("servers", "服务台数量至少为 1"));
    }

    let lambda = arrival_rate;
    let mu = service_rate;
    let c = servers as f64;
    let rho = lambda / (c * mu);

    if rho >= 1.0 {
        return Ok(QueueOutcome::Unstable { utilization: rho });
    }

    let metrics = if servers == 1 {
        let lq = rho * rho / (1.0 - rho);
        let ls = rho / (1.0 - rho);
        QueueMetrics {
            servers,
            utilization: rho,
            avg_queue_length: lq,
            avg_system_length: ls,
            avg_wait_time: lq / lambda,
            avg_system_time: ls / lambda,
            approximate: false,
        }
    } else {
        let ls = lambda / (mu - lambda / c);
        let lq = (ls - lambda / mu).max(0.0);
        QueueMetrics {
            servers,
            utilization: rho,
            avg_queue_length: lq,
            avg_system_length: ls,
            avg_wait_time: lq / lambda,
            avg_system_time: ls / lambda,
            approximate: true,
        }
    };

    Ok(QueueOutcome::Stable(metrics))
}

// ==========================================
// 数值辅助
// ==========================================

/// 等间距采样, 包含两端点
///
/// samples == 1 时只返回 start
pub fn linspace(start: f64, end: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// 分母 <= 0 时返回 0
pub(crate) fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}
