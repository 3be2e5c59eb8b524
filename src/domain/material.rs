// ==========================================
// 生产计划与库存分析引擎 - 物料与库存领域模型
// ==========================================
// 职责: 物料主数据、库存参数、库存计划结果
// ==========================================

use crate::domain::types::DemandPeriod;
use serde::{Deserialize, Serialize};

// ==========================================
// Material - 物料 (原材料)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,              // 物料名称 (唯一)
    pub unit_price: f64,           // 单价
    pub lead_time_days: f64,       // 采购提前期 (天, >= 0)
    pub holding_cost_rate: f64,    // 年持有成本率 (占单价比例, >= 0)
    pub order_cost: f64,           // 单次订货成本 (>= 0)

    #[serde(default)]
    pub safety_stock: f64,         // 安全库存 (单位, 默认 0)
}

impl Material {
    pub fn new(
        name: &str,
        unit_price: f64,
        lead_time_days: f64,
        holding_cost_rate: f64,
        order_cost: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            unit_price,
            lead_time_days,
            holding_cost_rate,
            order_cost,
            safety_stock: 0.0,
        }
    }

    pub fn with_safety_stock(mut self, safety_stock: f64) -> Self {
        self.safety_stock = safety_stock;
        self
    }

    /// 单位年持有成本 H·C
    pub fn holding_cost_per_unit(&self) -> f64 {
        self.holding_cost_rate * self.unit_price
    }
}

// ==========================================
// Demand - 产品需求量
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Demand {
    pub quantity: f64,
    pub period: DemandPeriod,
}

impl Demand {
    pub fn monthly(quantity: f64) -> Self {
        Self {
            quantity,
            period: DemandPeriod::Monthly,
        }
    }

    pub fn annual(quantity: f64) -> Self {
        Self {
            quantity,
            period: DemandPeriod::Annual,
        }
    }

    /// 折算年需求
    pub fn annual_quantity(&self) -> f64 {
        self.quantity * self.period.periods_per_year()
    }
}

// ==========================================
// InventoryParameters - 单物料库存参数
// ==========================================
// annual_demand 为派生值: 产品年需求 × BOM 用量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryParameters {
    pub material: String,
    pub annual_demand: f64,
    pub order_cost: f64,
    pub holding_cost_rate: f64,
    pub unit_price: f64,
    pub lead_time_days: f64,
    pub safety_stock: f64,
}

impl InventoryParameters {
    /// 由物料主数据和派生年需求组装
    pub fn from_material(material: &Material, annual_demand: f64) -> Self {
        Self {
            material: material.name.clone(),
            annual_demand,
            order_cost: material.order_cost,
            holding_cost_rate: material.holding_cost_rate,
            unit_price: material.unit_price,
            lead_time_days: material.lead_time_days,
            safety_stock: material.safety_stock,
        }
    }
}

// ==========================================
// MaterialInventoryPlan - 单物料库存计划
// ==========================================
// eoq/total_cost 为 None 表示 H·C <= 0, EOQ 无定义
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialInventoryPlan {
    pub parameters: InventoryParameters,
    pub eoq: Option<f64>,
    pub orders_per_year: Option<f64>,
    pub reorder_point: f64,
    pub total_cost: Option<f64>,
}

// ==========================================
// SkippedMaterial - 被跳过的 BOM 物料
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedMaterial {
    pub material: String,
    pub reason: String,
}

// ==========================================
// InventoryPlan - 产品级库存计划
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryPlan {
    pub product: String,
    pub product_annual_demand: f64,
    pub materials: Vec<MaterialInventoryPlan>,
    pub skipped_materials: Vec<SkippedMaterial>,
    pub total_inventory_cost: f64,
}

impl InventoryPlan {
    /// 按物料名称查找计划
    pub fn material(&self, name: &str) -> Option<&MaterialInventoryPlan> {
        self.materials.iter().find(|m| m.parameters.material == name)
    }
}
