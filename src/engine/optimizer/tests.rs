use super::ProductionOptimizer;
use crate::domain::product::Product;
use crate::engine::error::EngineError;

// ==========================================
// 测试辅助函数
// ==========================================

/// 创建指定单位利润与单位工时的产品 (成本固定 100)
fn create_test_product(name: &str, profit: f64, production_time_h: f64) -> Product {
    Product::new(name, 100.0 + profit, 100.0, production_time_h)
}

// ==========================================
// 排名测试
// ==========================================

#[test]
fn test_rank_descending_profit_per_hour() {
    let optimizer = ProductionOptimizer::new();
    let products = vec![
        create_test_product("A", 10.0, 1.0),
        create_test_product("B", 30.0, 1.0),
        create_test_product("C", 20.0, 1.0),
    ];

    let rankings = optimizer.rank(&products).unwrap();

    assert_eq!(rankings.len(), 3);
    assert_eq!(rankings[0].product, "B");
    assert_eq!(rankings[0].rank, 1);
    assert_eq!(rankings[1].product, "C");
    assert_eq!(rankings[1].rank, 2);
    assert_eq!(rankings[2].product, "A");
    assert_eq!(rankings[2].rank, 3);
}

#[test]
fn test_rank_uses_ratio_not_absolute_profit() {
    let optimizer = ProductionOptimizer::new();
    // A: 100 / 10h = 10/h; B: 30 / 1h = 30/h
    let products = vec![
        create_test_product("A", 100.0, 10.0),
        create_test_product("B", 30.0, 1.0),
    ];

    let rankings = optimizer.rank(&products).unwrap();
    assert_eq!(rankings[0].product, "B");
    assert_eq!(rankings[1].profit_per_hour, 10.0);
}

#[test]
fn test_rank_ties_keep_catalog_order() {
    let optimizer = ProductionOptimizer::new();
    let products = vec![
        create_test_product("first", 20.0, 1.0),
        create_test_product("second", 40.0, 2.0),
        create_test_product("third", 20.0, 1.0),
    ];

    let rankings = optimizer.rank(&products).unwrap();
    let order: Vec<&str> = rankings.iter().map(|r| r.product.as_str()).collect();
    assert_eq!(order, vec!["first", "second", "third"]);
}

#[test]
fn test_rank_flags_loss_making_products() {
    let optimizer = ProductionOptimizer::new();
    let products = vec![
        create_test_product("loss", -5.0, 1.0),
        create_test_product("gain", 5.0, 1.0),
    ];

    let rankings = optimizer.rank(&products).unwrap();
    assert_eq!(rankings[0].product, "gain");
    assert!(!rankings[0].loss_making);
    assert_eq!(rankings[1].product, "loss");
    assert!(rankings[1].loss_making);
}

#[test]
fn test_rank_rejects_non_positive_production_time() {
    let optimizer = ProductionOptimizer::new();
    let products = vec![create_test_product("broken", 10.0, 0.0)];

    let err = optimizer.rank(&products).unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput { .. }));
}

#[test]
fn test_rank_rejects_empty_catalog() {
    let optimizer = ProductionOptimizer::new();
    assert_eq!(optimizer.rank(&[]).unwrap_err(), EngineError::EmptyCatalog);
}

// ==========================================
// 贪心分配测试
// ==========================================

#[test]
fn test_optimize_fills_top_ranked_first() {
    let optimizer = ProductionOptimizer::new();
    let products = vec![
        create_test_product("A", 10.0, 1.0),
        create_test_product("B", 30.0, 3.0),
        create_test_product("C", 20.0, 1.0),
    ];

    // C: 20/h 排第一, 8 小时全部给 C
    let plan = optimizer.optimize(&products, 8.0).unwrap();

    assert_eq!(plan.entries.len(), 1);
    assert_eq!(plan.entries[0].product, "C");
    assert_eq!(plan.entries[0].units, 8);
    assert_eq!(plan.total_profit, 160.0);
    assert_eq!(plan.utilization, 1.0);
    assert_eq!(plan.remaining_capacity_h, 0.0);
}

#[test]
fn test_optimize_spills_remaining_capacity_to_next_rank() {
    let optimizer = ProductionOptimizer::new();
    let products = vec![
        create_test_product("big", 90.0, 3.0),  // 30/h
        create_test_product("small", 20.0, 1.0), // 20/h
    ];

    // big: floor(8/3)=2 -> 6h; small: floor(2/1)=2 -> 2h
    let plan = optimizer.optimize(&products, 8.0).unwrap();

    assert_eq!(plan.entries.len(), 2);
    assert_eq!(plan.entries[0].product, "big");
    assert_eq!(plan.entries[0].units, 2);
    assert_eq!(plan.entries[0].time_used_h, 6.0);
    assert_eq!(plan.entries[1].product, "small");
    assert_eq!(plan.entries[1].units, 2);
    assert_eq!(plan.total_time_used_h, 8.0);
    assert_eq!(plan.total_profit, 220.0);
}

#[test]
fn test_optimize_skips_product_that_does_not_fit() {
    let optimizer = ProductionOptimizer::new();
    let products = vec![
        create_test_product("huge", 500.0, 10.0), // 50/h, 放不下
        create_test_product("unit", 10.0, 1.0),
    ];

    let plan = optimizer.optimize(&products, 4.0).unwrap();

    assert!(plan.entry("huge").is_none());
    assert_eq!(plan.entry("unit").unwrap().units, 4);
    assert_eq!(plan.rankings[0].product, "huge");
}

#[test]
fn test_optimize_never_exceeds_capacity() {
    let optimizer = ProductionOptimizer::new();
    let products = vec![
        create_test_product("a", 7.0, 0.7),
        create_test_product("b", 13.0, 1.3),
        create_test_product("c", 2.9, 0.3),
    ];

    for capacity in [0.0, 0.5, 1.0, 7.3, 8.0, 23.9] {
        let plan = optimizer.optimize(&products, capacity).unwrap();
        let used: f64 = plan.entries.iter().map(|e| e.time_used_h).sum();
        assert!(used <= capacity + 1e-9, "capacity={} used={}", capacity, used);
        assert!(plan.remaining_capacity_h >= 0.0);
    }
}

#[test]
fn test_optimize_tolerates_float_noise() {
    let optimizer = ProductionOptimizer::new();
    let products = vec![create_test_product("tenth", 1.0, 0.1)];

    let plan = optimizer.optimize(&products, 8.0).unwrap();
    assert_eq!(plan.entries[0].units, 80);
}

#[test]
fn test_optimize_zero_capacity() {
    let optimizer = ProductionOptimizer::new();
    let products = vec![create_test_product("a", 1.0, 1.0)];

    let plan = optimizer.optimize(&products, 0.0).unwrap();
    assert!(plan.entries.is_empty());
    assert_eq!(plan.utilization, 0.0);
    assert!(optimizer.optimize(&products, -1.0).is_err());
}
