// ==========================================
// 生产计划与库存分析引擎 - 引擎配置
// ==========================================
// 职责: 产品/物料目录与各分析模块参数, 构造时显式注入引擎
// 格式: JSON, 所有分节均可缺省 (使用内置默认值)
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::material::{Demand, Material};
use crate::domain::product::Product;
use crate::domain::types::{MissingMaterialPolicy, QueueMetricKind};
use crate::engine::formula::TimeModel;
use crate::engine::inventory::DEFAULT_DAYS_PER_YEAR;
use crate::engine::sensitivity::{
    DEFAULT_DEMAND_HIGH_FACTOR, DEFAULT_DEMAND_LOW_FACTOR, DEFAULT_DEMAND_SAMPLES,
    DEFAULT_UTILIZATION_END, DEFAULT_UTILIZATION_SAMPLES, DEFAULT_UTILIZATION_START,
};
use crate::engine::simulation::SimulationRanges;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ==========================================
// EngineConfig - 顶层配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub products: Vec<Product>,
    pub materials: Vec<Material>,
    pub production: ProductionConfig,
    pub inventory: InventoryConfig,
    pub simulation: SimulationConfig,
    pub queue: QueueConfig,
}

/// 生产优化参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductionConfig {
    /// 日产能 (小时)
    pub daily_capacity_h: f64,
}

/// 库存计划参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    pub days_per_year: f64,
    pub missing_material_policy: MissingMaterialPolicy,
    /// 未指定需求时使用的默认需求
    pub default_demand: Demand,
    pub demand_low_factor: f64,
    pub demand_high_factor: f64,
    pub demand_samples: usize,
}

/// 标准时间与模拟表参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub time_model: TimeModel,
    /// 第一道活动工时 x (小时), 如发动机装配
    pub activity_x_h: f64,
    /// 第二道活动工时 y (小时), 如车身安装
    pub activity_y_h: f64,
    /// 宽放率, 百分数
    pub tolerance_pct: f64,
    pub workforce: u32,
    pub shift_hours: f64,
    pub ranges: SimulationRanges,
}

/// 排队模型参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    pub arrival_rate: f64,
    pub service_rate: f64,
    pub servers: u32,
    pub sweep_metric: QueueMetricKind,
    pub utilization_start: f64,
    pub utilization_end: f64,
    pub utilization_samples: usize,
}

// ==========================================
// 默认值
// ==========================================

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            products: default_products(),
            materials: default_materials(),
            production: ProductionConfig::default(),
            inventory: InventoryConfig::default(),
            simulation: SimulationConfig::default(),
            queue: QueueConfig::default(),
        }
    }
}

impl Default for ProductionConfig {
    fn default() -> Self {
        Self {
            daily_capacity_h: 80.0,
        }
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            days_per_year: DEFAULT_DAYS_PER_YEAR,
            missing_material_policy: MissingMaterialPolicy::Skip,
            default_demand: Demand::monthly(100.0),
            demand_low_factor: DEFAULT_DEMAND_LOW_FACTOR,
            demand_high_factor: DEFAULT_DEMAND_HIGH_FACTOR,
            demand_samples: DEFAULT_DEMAND_SAMPLES,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_model: TimeModel::Quadratic,
            activity_x_h: 2.0,
            activity_y_h: 3.0,
            tolerance_pct: 15.0,
            workforce: 10,
            shift_hours: 8.0,
            ranges: SimulationRanges::default(),
        }
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            arrival_rate: 4.0,
            service_rate: 5.0,
            servers: 1,
            sweep_metric: QueueMetricKind::AvgWaitTime,
            utilization_start: DEFAULT_UTILIZATION_START,
            utilization_end: DEFAULT_UTILIZATION_END,
            utilization_samples: DEFAULT_UTILIZATION_SAMPLES,
        }
    }
}

/// 内置演示产品目录
fn default_products() -> Vec<Product> {
    vec![
        Product::new("Sedan", 250.0, 180.0, 3.5)
            .with_bom_line("Steel Sheet", 1.2)
            .with_bom_line("Tire", 4.0)
            .with_bom_line("Engine Block", 1.0)
            .with_bom_line("Glass Panel", 6.0),
        Product::new("SUV", 340.0, 250.0, 4.5)
            .with_bom_line("Steel Sheet", 1.8)
            .with_bom_line("Tire", 4.0)
            .with_bom_line("Engine Block", 1.0)
            .with_bom_line("Glass Panel", 7.0),
        Product::new("Pickup", 290.0, 215.0, 4.0)
            .with_bom_line("Steel Sheet", 1.6)
            .with_bom_line("Tire", 4.0)
            .with_bom_line("Engine Block", 1.0)
            .with_bom_line("Glass Panel", 4.0),
    ]
}

/// 内置演示物料目录
fn default_materials() -> Vec<Material> {
    vec![
        Material::new("Steel Sheet", 12.0, 5.0, 0.20, 45.0).with_safety_stock(20.0),
        Material::new("Tire", 1.5, 3.0, 0.25, 30.0).with_safety_stock(40.0),
        Material::new("Engine Block", 40.0, 10.0, 0.15, 80.0).with_safety_stock(5.0),
        Material::new("Glass Panel", 0.8, 4.0, 0.30, 25.0),
    ]
}

// ==========================================
// 校验
// ==========================================

impl EngineConfig {
    /// 按名称查找产品
    pub fn product(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// 按名称查找物料
    pub fn material(&self, name: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.name == name)
    }

    /// 校验配置, 一次性收集全部违规项
    pub fn validate(&self) -> ConfigResult<()> {
        let mut violations = Vec::new();

        // 产品目录
        let mut product_names = HashSet::new();
        for p in &self.products {
            if p.name.trim().is_empty() {
                violations.push("产品名称不能为空".to_string());
            }
            if !product_names.insert(p.name.as_str()) {
                violations.push(format!("产品名称重复: {}", p.name));
            }
            if !(p.production_time_h.is_finite() && p.production_time_h > 0.0) {
                violations.push(format!("产品 {} 的单位工时必须大于 0", p.name));
            }
            if !p.sale_price.is_finite() || !p.production_cost.is_finite() {
                violations.push(format!("产品 {} 的售价/成本必须为有限数值", p.name));
            }
            for (material, qty) in &p.bom {
                if !(qty.is_finite() && *qty >= 0.0) {
                    violations.push(format!("产品 {} 的 BOM 用量无效: {}={}", p.name, material, qty));
                }
            }
        }

        // 物料目录
        let mut material_names = HashSet::new();
        for m in &self.materials {
            if !material_names.insert(m.name.as_str()) {
                violations.push(format!("物料名称重复: {}", m.name));
            }
            let fields = [
                ("unit_price", m.unit_price),
                ("lead_time_days", m.lead_time_days),
                ("holding_cost_rate", m.holding_cost_rate),
                ("order_cost", m.order_cost),
                ("safety_stock", m.safety_stock),
            ];
            for (field, value) in fields {
                if !(value.is_finite() && value >= 0.0) {
                    violations.push(format!("物料 {} 的 {} 不能为负数: {}", m.name, field, value));
                }
            }
        }

        // 分析参数
        if !(self.production.daily_capacity_h.is_finite() && self.production.daily_capacity_h >= 0.0) {
            violations.push("daily_capacity_h 不能为负数".to_string());
        }
        if !(self.inventory.days_per_year.is_finite() && self.inventory.days_per_year > 0.0) {
            violations.push("days_per_year 必须大于 0".to_string());
        }
        if self.inventory.demand_samples == 0 || self.queue.utilization_samples == 0 {
            violations.push("采样数至少为 1".to_string());
        }
        if self.queue.servers == 0 {
            violations.push("servers 至少为 1".to_string());
        }
        if self.simulation.tolerance_pct < 0.0 {
            violations.push("tolerance_pct 不能为负数".to_string());
        }
        let ranges = &self.simulation.ranges;
        if ranges.tolerances_pct.iter().any(|t| !(t.is_finite() && *t >= 0.0)) {
            violations.push("simulation.ranges.tolerances_pct 不能含负数".to_string());
        }
        if ranges.shift_hours.iter().any(|h| !(h.is_finite() && *h >= 0.0)) {
            violations.push("simulation.ranges.shift_hours 不能含负数".to_string());
        }

        // 排队
        let q = &self.queue;
        if !(q.arrival_rate.is_finite() && q.arrival_rate > 0.0) {
            violations.push(format!("arrival_rate 必须大于 0: {}", q.arrival_rate));
        }
        if !(q.service_rate.is_finite() && q.service_rate > 0.0) {
            violations.push(format!("service_rate 必须大于 0: {}", q.service_rate));
        }
        if !(q.utilization_start > 0.0 && q.utilization_start <= q.utilization_end) {
            violations.push(format!(
                "利用率扫描区间无效: [{}, {}]",
                q.utilization_start, q.utilization_end
            ));
        }

        // 需求扫描
        let inv = &self.inventory;
        if !(inv.demand_low_factor >= 0.0 && inv.demand_low_factor <= inv.demand_high_factor) {
            violations.push(format!(
                "需求扫描倍数无效: low={} high={}",
                inv.demand_low_factor, inv.demand_high_factor
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(violations))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.products.len(), 3);
        // 内置目录中 BOM 引用的物料全部存在
        for p in &config.products {
            for material in p.bom.keys() {
                assert!(config.material(material).is_some(), "missing {}", material);
            }
        }
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{ "production": { "daily_capacity_h": 16.0 } }"#).unwrap();
        assert_eq!(config.production.daily_capacity_h, 16.0);
        assert_eq!(config.queue.servers, 1);
        assert_eq!(config.products.len(), 3);
    }

    #[test]
    fn test_validation_collects_all_violations() {
        let mut config = EngineConfig::default();
        config.products.push(Product::new("Sedan", 1.0, 1.0, 0.0));
        config.materials[0].unit_price = -1.0;

        match config.validate() {
            Err(ConfigError::Validation(v)) => {
                assert!(v.iter().any(|s| s.contains("产品名称重复")));
                assert!(v.iter().any(|s| s.contains("单位工时")));
                assert!(v.iter().any(|s| s.contains("unit_price")));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_validation_covers_analysis_parameters() {
        let mut config = EngineConfig::default();
        config.queue.arrival_rate = 0.0;
        config.queue.service_rate = -2.0;
        config.simulation.ranges.tolerances_pct.push(-5.0);
        config.inventory.demand_low_factor = 2.0;
        config.inventory.demand_high_factor = 1.0;

        match config.validate() {
            Err(ConfigError::Validation(v)) => {
                assert!(v.iter().any(|s| s.contains("arrival_rate")));
                assert!(v.iter().any(|s| s.contains("service_rate")));
                assert!(v.iter().any(|s| s.contains("tolerances_pct")));
                assert!(v.iter().any(|s| s.contains("需求扫描倍数")));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
