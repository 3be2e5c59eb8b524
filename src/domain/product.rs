// ==========================================
// 生产计划与库存分析引擎 - 产品领域模型
// ==========================================
// 职责: 产品主数据 + 物料清单 (BOM)
// 红线: production_time_h > 0 (作为除数)
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// Product - 产品
// ==========================================
// 利润可以为负: 只标记, 不拒绝
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,              // 产品名称 (唯一)
    pub sale_price: f64,           // 单位售价
    pub production_cost: f64,      // 单位生产成本
    pub production_time_h: f64,    // 单位生产时间 (小时)

    // 物料名称 -> 单位产品消耗量
    #[serde(default)]
    pub bom: BTreeMap<String, f64>,
}

impl Product {
    pub fn new(name: &str, sale_price: f64, production_cost: f64, production_time_h: f64) -> Self {
        Self {
            name: name.to_string(),
            sale_price,
            production_cost,
            production_time_h,
            bom: BTreeMap::new(),
        }
    }

    /// 追加一条 BOM 记录 (构建器风格)
    pub fn with_bom_line(mut self, material: &str, quantity_per_unit: f64) -> Self {
        self.bom.insert(material.to_string(), quantity_per_unit);
        self
    }

    /// 单位利润 = 售价 - 成本
    pub fn profit_per_unit(&self) -> f64 {
        self.sale_price - self.production_cost
    }

    /// 是否亏损产品
    pub fn is_loss_making(&self) -> bool {
        self.profit_per_unit() < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profit_and_loss_flag() {
        let p = Product::new("Sedan", 100.0, 80.0, 2.0);
        assert_eq!(p.profit_per_unit(), 20.0);
        assert!(!p.is_loss_making());

        let loss = Product::new("Prototype", 50.0, 70.0, 1.0);
        assert!(loss.is_loss_making());
    }

    #[test]
    fn test_bom_builder() {
        let p = Product::new("SUV", 1.0, 0.5, 1.0)
            .with_bom_line("Tire", 4.0)
            .with_bom_line("Engine Block", 1.0);
        assert_eq!(p.bom.len(), 2);
        assert_eq!(p.bom["Tire"], 4.0);
    }
}
