// ==========================================
// 生产计划与库存分析引擎 - 敏感性分析器
// ==========================================
// 职责: 在给定区间内等间距扫描单个输入, 重算对应公式
// 红线: 序列长度恒等于采样数; 无定义点记为 f64::INFINITY, 不丢弃
// ==========================================

use crate::domain::simulation::{SensitivityPoint, SensitivitySeries};
use crate::domain::types::{QueueMetricKind, SweepParameter};
use crate::engine::error::{ensure_non_negative, ensure_positive, EngineError, EngineResult};
use crate::engine::formula;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// EOQ 扫描默认区间: 基准年需求的 50% - 150%
pub const DEFAULT_DEMAND_LOW_FACTOR: f64 = 0.5;
pub const DEFAULT_DEMAND_HIGH_FACTOR: f64 = 1.5;
pub const DEFAULT_DEMAND_SAMPLES: usize = 10;

/// 排队扫描默认区间: 利用率 0.1 - 0.95
pub const DEFAULT_UTILIZATION_START: f64 = 0.1;
pub const DEFAULT_UTILIZATION_END: f64 = 0.95;
pub const DEFAULT_UTILIZATION_SAMPLES: usize = 20;

// ==========================================
// EoqScenario - EOQ 基准场景
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EoqScenario {
    pub annual_demand: f64,
    pub order_cost: f64,
    pub holding_cost_rate: f64,
    pub unit_cost: f64,
}

impl EoqScenario {
    /// 基准场景的 EOQ
    pub fn eoq(&self) -> EngineResult<Option<f64>> {
        formula::economic_order_quantity(
            self.annual_demand,
            self.order_cost,
            self.holding_cost_rate,
            self.unit_cost,
        )
    }
}

// ==========================================
// SensitivityAnalyzer - 敏感性分析器
// ==========================================
#[derive(Debug, Default)]
pub struct SensitivityAnalyzer {
    // 无状态引擎，不需要注入依赖
}

impl SensitivityAnalyzer {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 通用扫描
    // ==========================================

    /// 在 [start, end] 上等间距采样 samples 个点, 对每个点求 f
    ///
    /// f 返回 None 时该点输出记为 f64::INFINITY
    pub fn sweep<F>(
        &self,
        parameter: SweepParameter,
        start: f64,
        end: f64,
        samples: usize,
        f: F,
    ) -> EngineResult<SensitivitySeries>
    where
        F: Fn(f64) -> EngineResult<Option<f64>>,
    {
        if samples == 0 {
            return Err(EngineError::invalid("samples", "采样数至少为 1"));
        }
        if !start.is_finite() || !end.is_finite() || start > end {
            return Err(EngineError::invalid(
                "range",
                format!("扫描区间无效: [{}, {}]", start, end),
            ));
        }

        let mut points = Vec::with_capacity(samples);
        for input in formula::linspace(start, end, samples) {
            let output = f(input)?.unwrap_or(f64::INFINITY);
            points.push(SensitivityPoint { input, output });
        }

        let series = SensitivitySeries { parameter, points };
        debug!(
            parameter = %parameter,
            samples,
            undefined = series.undefined_count(),
            "敏感性扫描完成"
        );
        Ok(series)
    }

    // ==========================================
    // 具体扫描
    // ==========================================

    /// 年需求 -> EOQ
    ///
    /// 扫描区间为基准年需求的 [low_factor, high_factor] 倍
    #[instrument(skip(self))]
    pub fn eoq_vs_demand(
        &self,
        base: &EoqScenario,
        low_factor: f64,
        high_factor: f64,
        samples: usize,
    ) -> EngineResult<SensitivitySeries> {
        ensure_non_negative("annual_demand", base.annual_demand)?;
        ensure_non_negative("low_factor", low_factor)?;
        ensure_non_negative("high_factor", high_factor)?;

        let scenario = *base;
        self.sweep(
            SweepParameter::AnnualDemand,
            base.annual_demand * low_factor,
            base.annual_demand * high_factor,
            samples,
            move |demand| {
                formula::economic_order_quantity(
                    demand,
                    scenario.order_cost,
                    scenario.holding_cost_rate,
                    scenario.unit_cost,
                )
            },
        )
    }

    /// 利用率 -> 排队指标
    ///
    /// 每个采样点 λ = ρ·c·μ; ρ >= 1 的点记为 INFINITY
    #[instrument(skip(self))]
    pub fn queue_vs_utilization(
        &self,
        service_rate: f64,
        servers: u32,
        metric: QueueMetricKind,
        start: f64,
        end: f64,
        samples: usize,
    ) -> EngineResult<SensitivitySeries> {
        ensure_positive("service_rate", service_rate)?;
        if servers == 0 {
            return Err(EngineError::invalid("servers", "服务台数量至少为 1"));
        }
        if start <= 0.0 {
            return Err(EngineError::invalid("utilization", "利用率起点必须大于 0"));
        }

        let capacity = servers as f64 * service_rate;
        self.sweep(SweepParameter::Utilization, start, end, samples, move |rho| {
            let outcome = formula::queue_metrics(rho * capacity, service_rate, servers)?;
            Ok(outcome.metrics().map(|m| m.metric(metric)))
        })
    }

    /// 宽放率 (小数) -> 标准时间
    #[instrument(skip(self))]
    pub fn standard_time_vs_tolerance(
        &self,
        normal_time: f64,
        start: f64,
        end: f64,
        samples: usize,
    ) -> EngineResult<SensitivitySeries> {
        ensure_non_negative("normal_time", normal_time)?;
        self.sweep(SweepParameter::Tolerance, start, end, samples, move |tol| {
            formula::standard_time(normal_time, tol).map(Some)
        })
    }
}
