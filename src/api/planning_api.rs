// ==========================================
// 生产计划与库存分析引擎 - 计划分析 API
// ==========================================
// 职责: 以配置为输入, 串联各引擎, 输出可序列化报告供表现层渲染
// 数据流: ProductionOptimizer -> (选定产品) -> InventoryPlanner
//         SimulationTableBuilder / SensitivityAnalyzer 独立调用公式库
// ==========================================

use crate::api::dto::{
    QueueReport, QueueRequest, ScenarioReport, ScenarioRequest, SensitivityReport,
    StandardTimeReport, StandardTimeRequest,
};
use crate::api::error::{ApiError, ApiResult};
use crate::config::engine_config::EngineConfig;
use crate::domain::material::{Demand, InventoryPlan};
use crate::domain::plan::{OptimizationResult, ProductionPlan};
use crate::domain::simulation::{SensitivitySeries, SimulationRow};
use crate::engine::formula;
use crate::engine::{
    EoqScenario, InventoryPlanner, ProductionOptimizer, SensitivityAnalyzer,
    SimulationTableBuilder,
};
use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// 宽放率扫描区间 (小数): 0% - 30%, 与模拟表默认区间一致
const TOLERANCE_SWEEP_START: f64 = 0.0;
const TOLERANCE_SWEEP_END: f64 = 0.30;
const TOLERANCE_SWEEP_SAMPLES: usize = 7;

// ==========================================
// PlanningApi - 计划分析 API
// ==========================================
pub struct PlanningApi {
    config: EngineConfig,
    optimizer: ProductionOptimizer,
    inventory_planner: InventoryPlanner,
    simulation_builder: SimulationTableBuilder,
    sensitivity_analyzer: SensitivityAnalyzer,
}

impl PlanningApi {
    /// 创建新的 PlanningApi 实例
    ///
    /// # 参数
    /// - config: 引擎配置 (会先校验)
    pub fn new(config: EngineConfig) -> ApiResult<Self> {
        config.validate()?;
        let inventory_planner = InventoryPlanner::new(
            config.inventory.days_per_year,
            config.inventory.missing_material_policy,
        )?;

        Ok(Self {
            config,
            optimizer: ProductionOptimizer::new(),
            inventory_planner,
            simulation_builder: SimulationTableBuilder::new(),
            sensitivity_analyzer: SensitivityAnalyzer::new(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ==========================================
    // 生产优化
    // ==========================================

    /// 产品排名
    pub fn rank_products(&self) -> ApiResult<Vec<OptimizationResult>> {
        Ok(self.optimizer.rank(&self.config.products)?)
    }

    /// 生产计划优化
    ///
    /// # 参数
    /// - capacity_h: 日产能, None 时取配置值
    pub fn optimize_production(&self, capacity_h: Option<f64>) -> ApiResult<ProductionPlan> {
        let capacity_h = capacity_h.unwrap_or(self.config.production.daily_capacity_h);
        Ok(self.optimizer.optimize(&self.config.products, capacity_h)?)
    }

    // ==========================================
    // 库存计划
    // ==========================================

    /// 库存计划
    ///
    /// # 参数
    /// - product: 产品名称, None 时取排名第一的产品
    /// - demand: 产品需求, None 时取配置默认需求
    pub fn plan_inventory(
        &self,
        product: Option<&str>,
        demand: Option<Demand>,
    ) -> ApiResult<InventoryPlan> {
        let product_name = match product {
            Some(name) => name.to_string(),
            None => self
                .rank_products()?
                .into_iter()
                .next()
                .map(|r| r.product)
                .ok_or_else(|| ApiError::NotFound("产品目录为空".to_string()))?,
        };

        let product = self
            .config
            .product(&product_name)
            .ok_or_else(|| ApiError::NotFound(format!("产品{}不存在", product_name)))?;

        let demand = demand.unwrap_or(self.config.inventory.default_demand);
        Ok(self
            .inventory_planner
            .plan(product, demand, &self.config.materials)?)
    }

    // ==========================================
    // 标准时间 / 模拟表
    // ==========================================

    /// 标准时间报告 (总工时 + 偏导 + 标准时间 + 日产能)
    pub fn standard_time_report(
        &self,
        request: Option<&StandardTimeRequest>,
    ) -> ApiResult<StandardTimeReport> {
        let sim = &self.config.simulation;
        let request = request.cloned().unwrap_or(StandardTimeRequest {
            activity_x_h: sim.activity_x_h,
            activity_y_h: sim.activity_y_h,
            tolerance_pct: sim.tolerance_pct,
            workforce: sim.workforce,
            shift_hours: sim.shift_hours,
        });

        let model = sim.time_model;
        let total_time_h = model.total_time(request.activity_x_h, request.activity_y_h)?;
        let gradient =
            formula::activity_sensitivity(model, request.activity_x_h, request.activity_y_h)?;
        let tolerance = request.tolerance_pct / 100.0;
        let standard_time_h = formula::standard_time(total_time_h, tolerance)?;
        let daily_output = formula::daily_output(
            total_time_h,
            tolerance,
            request.workforce,
            request.shift_hours,
            request.activity_x_h,
        )?;

        Ok(StandardTimeReport {
            time_model: model,
            activity_x_h: request.activity_x_h,
            activity_y_h: request.activity_y_h,
            total_time_h,
            gradient,
            tolerance_pct: request.tolerance_pct,
            standard_time_h,
            daily_output,
        })
    }

    /// 模拟表 (使用配置中的取值区间)
    pub fn simulation_table(&self, base_normal_time: f64) -> ApiResult<Vec<SimulationRow>> {
        Ok(self
            .simulation_builder
            .build(base_normal_time, &self.config.simulation.ranges)?)
    }

    // ==========================================
    // 排队
    // ==========================================

    /// 排队报告
    pub fn queue_report(&self, request: Option<QueueRequest>) -> ApiResult<QueueReport> {
        let q = &self.config.queue;
        let request = request.unwrap_or(QueueRequest {
            arrival_rate: q.arrival_rate,
            service_rate: q.service_rate,
            servers: q.servers,
        });

        let outcome =
            formula::queue_metrics(request.arrival_rate, request.service_rate, request.servers)?;
        if !outcome.is_stable() {
            warn!(
                utilization = outcome.utilization(),
                "排队系统不稳定 (ρ >= 1), 无稳态指标"
            );
        }

        Ok(QueueReport {
            arrival_rate: request.arrival_rate,
            service_rate: request.service_rate,
            servers: request.servers,
            outcome,
        })
    }

    // ==========================================
    // 敏感性分析
    // ==========================================

    /// EOQ 随年需求变化
    pub fn eoq_sensitivity(&self, scenario: &EoqScenario) -> ApiResult<SensitivitySeries> {
        let inv = &self.config.inventory;
        Ok(self.sensitivity_analyzer.eoq_vs_demand(
            scenario,
            inv.demand_low_factor,
            inv.demand_high_factor,
            inv.demand_samples,
        )?)
    }

    /// 排队指标随利用率变化
    pub fn queue_sensitivity(&self, service_rate: f64, servers: u32) -> ApiResult<SensitivitySeries> {
        let q = &self.config.queue;
        Ok(self.sensitivity_analyzer.queue_vs_utilization(
            service_rate,
            servers,
            q.sweep_metric,
            q.utilization_start,
            q.utilization_end,
            q.utilization_samples,
        )?)
    }

    /// 标准时间随宽放率变化
    pub fn tolerance_sensitivity(&self, normal_time: f64) -> ApiResult<SensitivitySeries> {
        Ok(self.sensitivity_analyzer.standard_time_vs_tolerance(
            normal_time,
            TOLERANCE_SWEEP_START,
            TOLERANCE_SWEEP_END,
            TOLERANCE_SWEEP_SAMPLES,
        )?)
    }

    // ==========================================
    // 场景评估
    // ==========================================

    /// 一次性评估完整场景
    #[instrument(skip(self, request))]
    pub fn evaluate(&self, request: &ScenarioRequest) -> ApiResult<ScenarioReport> {
        let production_plan = self.optimize_production(request.capacity_h)?;

        // 未指定产品时使用本次优化排名第一的产品
        let product = match &request.product {
            Some(name) => name.clone(),
            None => production_plan
                .top_ranked()
                .map(|r| r.product.clone())
                .ok_or_else(|| ApiError::NotFound("产品目录为空".to_string()))?,
        };
        let inventory_plan = self.plan_inventory(Some(&product), request.demand)?;

        let standard_time = self.standard_time_report(request.standard_time.as_ref())?;
        let simulation_table = self.simulation_table(standard_time.total_time_h)?;
        let queue = self.queue_report(request.queue)?;

        let eoq_base = inventory_plan
            .materials
            .iter()
            .find(|m| m.eoq.is_some())
            .map(|m| {
                (
                    m.parameters.material.clone(),
                    EoqScenario {
                        annual_demand: m.parameters.annual_demand,
                        order_cost: m.parameters.order_cost,
                        holding_cost_rate: m.parameters.holding_cost_rate,
                        unit_cost: m.parameters.unit_price,
                    },
                )
            });
        let (eoq_material, eoq_vs_demand) = match eoq_base {
            Some((material, scenario)) => (Some(material), Some(self.eoq_sensitivity(&scenario)?)),
            None => (None, None),
        };

        let sensitivity = SensitivityReport {
            eoq_material,
            eoq_vs_demand,
            queue_vs_utilization: self.queue_sensitivity(queue.service_rate, queue.servers)?,
            standard_time_vs_tolerance: self.tolerance_sensitivity(standard_time.total_time_h)?,
        };

        let report = ScenarioReport {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            production_plan,
            inventory_plan,
            standard_time,
            simulation_table,
            queue,
            sensitivity,
        };

        info!(
            report_id = %report.report_id,
            product = %report.inventory_plan.product,
            simulation_rows = report.simulation_table.len(),
            "场景评估完成"
        );
        Ok(report)
    }
}
