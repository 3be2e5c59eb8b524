// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use production_analytics::config::EngineConfig;
use production_analytics::domain::material::Material;
use production_analytics::domain::product::Product;

// ==========================================
// Product 构建器
// ==========================================

pub struct ProductBuilder {
    name: String,
    sale_price: f64,
    production_cost: f64,
    production_time_h: f64,
    bom: Vec<(String, f64)>,
}

impl ProductBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            sale_price: 100.0,
            production_cost: 50.0,
            production_time_h: 1.0,
            bom: Vec::new(),
        }
    }

    pub fn price(mut self, sale_price: f64, production_cost: f64) -> Self {
        self.sale_price = sale_price;
        self.production_cost = production_cost;
        self
    }

    /// 按目标单位利润设置价格 (成本固定 100)
    pub fn profit(mut self, profit: f64) -> Self {
        self.production_cost = 100.0;
        self.sale_price = 100.0 + profit;
        self
    }

    pub fn hours(mut self, production_time_h: f64) -> Self {
        self.production_time_h = production_time_h;
        self
    }

    pub fn bom(mut self, material: &str, quantity_per_unit: f64) -> Self {
        self.bom.push((material.to_string(), quantity_per_unit));
        self
    }

    pub fn build(self) -> Product {
        let mut product = Product::new(
            &self.name,
            self.sale_price,
            self.production_cost,
            self.production_time_h,
        );
        for (material, qty) in self.bom {
            product = product.with_bom_line(&material, qty);
        }
        product
    }
}

// ==========================================
// Material 构建器
// ==========================================

pub struct MaterialBuilder {
    name: String,
    unit_price: f64,
    lead_time_days: f64,
    holding_cost_rate: f64,
    order_cost: f64,
    safety_stock: f64,
}

impl MaterialBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            unit_price: 10.0,
            lead_time_days: 5.0,
            holding_cost_rate: 0.2,
            order_cost: 50.0,
            safety_stock: 0.0,
        }
    }

    pub fn unit_price(mut self, unit_price: f64) -> Self {
        self.unit_price = unit_price;
        self
    }

    pub fn lead_time(mut self, days: f64) -> Self {
        self.lead_time_days = days;
        self
    }

    pub fn holding_rate(mut self, rate: f64) -> Self {
        self.holding_cost_rate = rate;
        self
    }

    pub fn order_cost(mut self, order_cost: f64) -> Self {
        self.order_cost = order_cost;
        self
    }

    pub fn safety_stock(mut self, safety_stock: f64) -> Self {
        self.safety_stock = safety_stock;
        self
    }

    pub fn build(self) -> Material {
        Material::new(
            &self.name,
            self.unit_price,
            self.lead_time_days,
            self.holding_cost_rate,
            self.order_cost,
        )
        .with_safety_stock(self.safety_stock)
    }
}

// ==========================================
// 配置构建
// ==========================================

/// 三产品 / 两物料的小型配置, 单位工时利润分别为 10 / 30 / 20
pub fn small_config() -> EngineConfig {
    EngineConfig {
        products: vec![
            ProductBuilder::new("Alpha").profit(10.0).hours(1.0).bom("Bolt", 2.0).build(),
            ProductBuilder::new("Beta")
                .profit(60.0)
                .hours(2.0)
                .bom("Bolt", 4.0)
                .bom("Panel", 1.0)
                .build(),
            ProductBuilder::new("Gamma").profit(20.0).hours(1.0).bom("Panel", 3.0).build(),
        ],
        materials: vec![
            MaterialBuilder::new("Bolt").unit_price(2.0).lead_time(3.0).build(),
            MaterialBuilder::new("Panel").unit_price(20.0).lead_time(7.0).safety_stock(10.0).build(),
        ],
        ..EngineConfig::default()
    }
}

/// 浮点近似断言
pub fn assert_approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
