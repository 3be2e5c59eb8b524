// ==========================================
// 生产计划与库存分析引擎 - 库存计划引擎
// ==========================================
// 职责: 由产品 BOM 派生物料年需求, 计算 EOQ/ROP/总成本
// 输入: 产品 + 需求量 + 物料目录
// 输出: InventoryPlan (逐物料计划 + 跳过记录 + 总成本)
// ==========================================

use crate::domain::material::{
    Demand, InventoryParameters, InventoryPlan, Material, MaterialInventoryPlan, SkippedMaterial,
};
use crate::domain::product::Product;
use crate::domain::types::MissingMaterialPolicy;
use crate::engine::error::{ensure_non_negative, ensure_positive, EngineError, EngineResult};
use crate::engine::formula;
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

/// 年工作天数默认值 (年需求 -> 日需求)
pub const DEFAULT_DAYS_PER_YEAR: f64 = 365.0;

// ==========================================
// InventoryPlanner - 库存计划引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct InventoryPlanner {
    days_per_year: f64,
    missing_material_policy: MissingMaterialPolicy,
}

impl Default for InventoryPlanner {
    fn default() -> Self {
        Self {
            days_per_year: DEFAULT_DAYS_PER_YEAR,
            missing_material_policy: MissingMaterialPolicy::Skip,
        }
    }
}

impl InventoryPlanner {
    /// 构造函数
    ///
    /// # 参数
    /// - `days_per_year`: 年工作天数 (> 0)
    /// - `missing_material_policy`: BOM 物料不在目录中时的处理方式
    pub fn new(days_per_year: f64, missing_material_policy: MissingMaterialPolicy) -> EngineResult<Self> {
        ensure_positive("days_per_year", days_per_year)?;
        Ok(Self {
            days_per_year,
            missing_material_policy,
        })
    }

    pub fn days_per_year(&self) -> f64 {
        self.days_per_year
    }

    pub fn missing_material_policy(&self) -> MissingMaterialPolicy {
        self.missing_material_policy
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 为单个产品生成库存计划
    ///
    /// 规则:
    /// 1) 物料年需求 = 产品年需求 × BOM 用量
    /// 2) EOQ/ROP 使用该物料自身的订货成本、持有成本率、单价、提前期
    /// 3) 单物料总成本 = (D/EOQ)·S + (EOQ/2)·H·C, 累加为 total_inventory_cost
    /// 4) 目录中不存在的物料: Skip 策略记录原因并跳过, Reject 策略报错
    /// 5) EOQ 无定义 (H·C <= 0) 的物料不计入总成本
    #[instrument(skip(self, product, catalog), fields(
        product = %product.name,
        bom_lines = product.bom.len(),
        policy = %self.missing_material_policy
    ))]
    pub fn plan(
        &self,
        product: &Product,
        demand: Demand,
        catalog: &[Material],
    ) -> EngineResult<InventoryPlan> {
        ensure_non_negative("demand", demand.quantity)?;
        let product_annual_demand = demand.annual_quantity();

        let lookup: HashMap<&str, &Material> =
            catalog.iter().map(|m| (m.name.as_str(), m)).collect();

        let mut materials = Vec::new();
        let mut skipped_materials = Vec::new();
        let mut total_inventory_cost = 0.0;

        // BTreeMap 按物料名称有序遍历
        for (material_name, &quantity_per_unit) in &product.bom {
            let material = match lookup.get(material_name.as_str()) {
                Some(m) => *m,
                None => match self.missing_material_policy {
                    MissingMaterialPolicy::Reject => {
                        return Err(EngineError::UnknownMaterial {
                            product: product.name.clone(),
                            material: material_name.clone(),
                        });
                    }
                    MissingMaterialPolicy::Skip => {
                        warn!(material = %material_name, "BOM 物料不在物料目录中, 跳过");
                        skipped_materials.push(SkippedMaterial {
                            material: material_name.clone(),
                            reason: "MATERIAL_NOT_IN_CATALOG".to_string(),
                        });
                        continue;
                    }
                },
            };

            ensure_non_negative("bom_quantity", quantity_per_unit)?;
            let annual_demand = product_annual_demand * quantity_per_unit;
            let plan = self.plan_material(material, annual_demand)?;

            if let Some(cost) = plan.total_cost {
                total_inventory_cost += cost;
            } else {
                debug!(material = %material.name, "EOQ 无定义 (H·C <= 0), 不计入总成本");
            }
            materials.push(plan);
        }

        info!(
            planned = materials.len(),
            skipped = skipped_materials.len(),
            total_inventory_cost,
            "库存计划计算完成"
        );

        Ok(InventoryPlan {
            product: product.name.clone(),
            product_annual_demand,
            materials,
            skipped_materials,
            total_inventory_cost,
        })
    }

    /// 单物料库存计划
    pub fn plan_material(
        &self,
        material: &Material,
        annual_demand: f64,
    ) -> EngineResult<MaterialInventoryPlan> {
        let parameters = InventoryParameters::from_material(material, annual_demand);

        let eoq = formula::economic_order_quantity(
            parameters.annual_demand,
            parameters.order_cost,
            parameters.holding_cost_rate,
            parameters.unit_price,
        )?;

        let daily_demand = parameters.annual_demand / self.days_per_year;
        let reorder_point = formula::reorder_point(
            daily_demand,
            parameters.lead_time_days,
            parameters.safety_stock,
        )?;

        let orders_per_year = eoq.map(|q| formula::safe_div(parameters.annual_demand, q));
        let total_cost = eoq.map(|q| {
            formula::total_inventory_cost(
                parameters.annual_demand,
                parameters.order_cost,
                parameters.holding_cost_rate,
                parameters.unit_price,
                q,
            )
        });

        Ok(MaterialInventoryPlan {
            parameters,
            eoq,
            orders_per_year,
            reorder_point,
            total_cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steel() -> Material {
        Material::new("Steel", 25.0, 7.0, 0.2, 50.0)
    }

    #[test]
    fn test_new_rejects_non_positive_days() {
        assert!(InventoryPlanner::new(0.0, MissingMaterialPolicy::Skip).is_err());
        assert!(InventoryPlanner::new(250.0, MissingMaterialPolicy::Skip).is_ok());
    }

    #[test]
    fn test_plan_material_values() {
        let planner = InventoryPlanner::default();
        let plan = planner.plan_material(&steel(), 3650.0).unwrap();

        let expected_eoq = (2.0_f64 * 3650.0 * 50.0 / (0.2 * 25.0)).sqrt();
        assert!((plan.eoq.unwrap() - expected_eoq).abs() < 1e-9);
        // 日需求 10 × 提前期 7
        assert!((plan.reorder_point - 70.0).abs() < 1e-9);
        assert!(plan.total_cost.unwrap() > 0.0);
    }

    #[test]
    fn test_plan_material_undefined_eoq() {
        let planner = InventoryPlanner::default();
        let free = Material::new("Free", 0.0, 3.0, 0.2, 50.0);
        let plan = planner.plan_material(&free, 1000.0).unwrap();
        assert!(plan.eoq.is_none());
        assert!(plan.total_cost.is_none());
        assert!(plan.orders_per_year.is_none());
    }
}
