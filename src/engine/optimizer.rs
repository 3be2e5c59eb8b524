// ==========================================
// 生产计划与库存分析引擎 - 产品组合优化引擎
// ==========================================
// 职责: 按单位工时利润排名 + 贪心分配日产能
// 输入: 产品目录 + 日产能 (小时)
// 输出: ProductionPlan (排名 + 计划明细 + 汇总)
// 红线: 任何产品分配的工时不超过当时剩余产能
// ==========================================

use crate::domain::plan::{OptimizationResult, PlanEntry, ProductionPlan};
use crate::domain::product::Product;
use crate::engine::error::{ensure_non_negative, EngineError, EngineResult};
use std::cmp::Ordering;
use tracing::{debug, info, instrument};

// 浮点误差容忍 (如 8.0 / 0.1 = 79.999...)
const CAPACITY_EPSILON: f64 = 1e-9;

// ==========================================
// ProductionOptimizer - 产品组合优化引擎
// ==========================================
#[derive(Debug, Default)]
pub struct ProductionOptimizer {
    // 无状态引擎，不需要注入依赖
}

impl ProductionOptimizer {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 产品排名
    ///
    /// 排序键: profit_per_hour 降序; 相同值保持目录原顺序 (稳定排序)
    ///
    /// # 返回
    /// 排名列表, rank 从 1 开始
    pub fn rank(&self, products: &[Product]) -> EngineResult<Vec<OptimizationResult>> {
        self.validate_catalog(products)?;

        let mut rankings: Vec<OptimizationResult> = products
            .iter()
            .map(|p| {
                let profit_per_unit = p.profit_per_unit();
                OptimizationResult {
                    product: p.name.clone(),
                    profit_per_unit,
                    profit_per_hour: profit_per_unit / p.production_time_h,
                    production_time_h: p.production_time_h,
                    rank: 0,
                    loss_making: p.is_loss_making(),
                }
            })
            .collect();

        // sort_by 为稳定排序
        rankings.sort_by(|a, b| self.compare(a, b));
        for (idx, result) in rankings.iter_mut().enumerate() {
            result.rank = idx + 1;
        }

        Ok(rankings)
    }

    /// 优化生产计划（贪心分配）
    ///
    /// 规则:
    /// 1) 按排名顺序遍历产品
    /// 2) max_units = floor(剩余产能 / 单位工时)
    /// 3) max_units > 0 时生成计划明细并扣减产能, 否则跳过 (不扣减)
    ///
    /// 按比值贪心, 对不可分的工时块不保证全局最优, 但结果确定可复现
    #[instrument(skip(self, products), fields(products_count = products.len()))]
    pub fn optimize(&self, products: &[Product], capacity_h: f64) -> EngineResult<ProductionPlan> {
        ensure_non_negative("capacity_h", capacity_h)?;
        let rankings = self.rank(products)?;

        let mut entries = Vec::new();
        let mut remaining = capacity_h;
        let mut total_profit = 0.0;

        for ranked in &rankings {
            let unit_time = ranked.production_time_h;
            let max_units = ((remaining + CAPACITY_EPSILON) / unit_time).floor();

            if max_units < 1.0 {
                debug!(
                    product = %ranked.product,
                    remaining_h = remaining,
                    unit_time_h = unit_time,
                    "剩余产能不足一个单位, 跳过"
                );
                continue;
            }

            let units = max_units as u64;
            let time_used_h = (units as f64 * unit_time).min(remaining + CAPACITY_EPSILON);
            let profit = units as f64 * ranked.profit_per_unit;

            remaining = (remaining - time_used_h).max(0.0);
            total_profit += profit;

            entries.push(PlanEntry {
                product: ranked.product.clone(),
                rank: ranked.rank,
                units,
                time_used_h,
                profit,
            });
        }

        let total_time_used_h = capacity_h - remaining;
        let utilization = if capacity_h > 0.0 {
            total_time_used_h / capacity_h
        } else {
            0.0
        };

        info!(
            entries = entries.len(),
            total_time_used_h,
            total_profit,
            utilization,
            "生产计划优化完成"
        );

        Ok(ProductionPlan {
            rankings,
            entries,
            capacity_h,
            total_time_used_h,
            remaining_capacity_h: remaining,
            total_profit,
            utilization,
        })
    }

    // ==========================================
    // 校验与比较
    // ==========================================

    /// 目录校验: 非空, 单位工时 > 0, 价格为有限值
    fn validate_catalog(&self, products: &[Product]) -> EngineResult<()> {
        if products.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }
        for p in products {
            if !p.production_time_h.is_finite() || p.production_time_h <= 0.0 {
                return Err(EngineError::invalid(
                    "production_time_h",
                    format!("产品 {} 的单位工时必须大于 0, 实际 {}", p.name, p.production_time_h),
                ));
            }
            if !p.sale_price.is_finite() || !p.production_cost.is_finite() {
                return Err(EngineError::invalid(
                    "price",
                    format!("产品 {} 的售价/成本必须为有限数值", p.name),
                ));
            }
        }
        Ok(())
    }

    /// Ordering::Less 表示 a 优先于 b
    fn compare(&self, a: &OptimizationResult, b: &OptimizationResult) -> Ordering {
        b.profit_per_hour.total_cmp(&a.profit_per_hour)
    }
}

#[cfg(test)]
mod tests;
