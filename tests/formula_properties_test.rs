// ==========================================
// FormulaLibrary 集成测试
// ==========================================
// 测试目标: 验证公式库的数学性质
// 覆盖范围: 标准时间、总工时与偏导、EOQ/ROP、排队指标
// ==========================================

mod helpers;

use helpers::test_data_builder::assert_approx;
use production_analytics::engine::formula::{
    self, daily_output, economic_order_quantity, partial_derivatives, queue_metrics,
    reorder_point, standard_time, total_inventory_cost, total_production_time,
};
use production_analytics::{EngineError, QueueOutcome, TimeModel};

// ==========================================
// 标准时间
// ==========================================

#[test]
fn test_standard_time_monotonic_in_tolerance() {
    let mut previous = 0.0;
    for tol in [0.0, 0.05, 0.10, 0.20, 0.50] {
        let st = standard_time(20.0, tol).unwrap();
        assert!(st >= previous);
        previous = st;
    }
    assert_approx(standard_time(20.0, 0.0).unwrap(), 20.0);
}

#[test]
fn test_standard_time_rejects_negative_tolerance() {
    let err = standard_time(10.0, -0.1).unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput { .. }));
}

// ==========================================
// 总工时与偏导
// ==========================================

#[test]
fn test_total_time_matches_sample_point() {
    // 2·4 + 3·6 + 9 = 35
    assert_approx(total_production_time(2.0, 3.0).unwrap(), 35.0);
    let (dx, dy) = partial_derivatives(2.0, 3.0).unwrap();
    assert_approx(dx, 17.0);
    assert_approx(dy, 12.0);
}

#[test]
fn test_gradient_agrees_with_finite_difference() {
    let h = 1e-6;
    for model in [TimeModel::Quadratic, TimeModel::LiteralLinear] {
        for (x, y) in [(1.0, 1.0), (2.5, 0.5), (4.0, 7.0)] {
            let (dx, dy) = model.gradient(x, y).unwrap();
            let fx = (model.total_time(x + h, y).unwrap() - model.total_time(x - h, y).unwrap())
                / (2.0 * h);
            let fy = (model.total_time(x, y + h).unwrap() - model.total_time(x, y - h).unwrap())
                / (2.0 * h);
            assert!((dx - fx).abs() < 1e-4, "{} d/dx at ({}, {})", model, x, y);
            assert!((dy - fy).abs() < 1e-4, "{} d/dy at ({}, {})", model, x, y);
        }
    }
}

#[test]
fn test_daily_output_from_standard_time() {
    let output = daily_output(35.0, 0.15, 10, 8.0, 2.0).unwrap();
    assert_approx(output.total_hours, 80.0);
    assert_approx(output.standard_time_h, 40.25);
    assert_approx(output.units_per_day, 80.0 / 40.25);
    assert_approx(output.first_activity_units_per_day, 40.0);
}

// ==========================================
// EOQ / ROP / 总成本
// ==========================================

#[test]
fn test_eoq_scales_with_sqrt_of_demand() {
    let q1 = economic_order_quantity(1000.0, 50.0, 0.2, 10.0).unwrap().unwrap();
    let q4 = economic_order_quantity(4000.0, 50.0, 0.2, 10.0).unwrap().unwrap();
    assert_approx(q4 / q1, 2.0);
}

#[test]
fn test_eoq_minimizes_total_cost() {
    let (d, s, h, c) = (2400.0, 60.0, 0.25, 8.0);
    let q = economic_order_quantity(d, s, h, c).unwrap().unwrap();
    let at_eoq = total_inventory_cost(d, s, h, c, q);
    for factor in [0.5, 0.8, 1.2, 2.0] {
        assert!(total_inventory_cost(d, s, h, c, q * factor) > at_eoq);
    }
    // 最优点处订货成本与持有成本相等
    assert_approx(at_eoq, (2.0 * d * s * h * c).sqrt());
}

#[test]
fn test_eoq_undefined_without_holding_cost() {
    assert_eq!(economic_order_quantity(1000.0, 50.0, 0.0, 10.0).unwrap(), None);
    assert_eq!(economic_order_quantity(1000.0, 50.0, 0.2, 0.0).unwrap(), None);
}

#[test]
fn test_reorder_point_with_zero_lead_time_is_safety_stock() {
    assert_approx(reorder_point(12.0, 0.0, 30.0).unwrap(), 30.0);
    assert_approx(reorder_point(12.0, 5.0, 30.0).unwrap(), 90.0);
}

// ==========================================
// 排队
// ==========================================

#[test]
fn test_single_server_littles_law() {
    let (lambda, mu) = (4.0, 5.0);
    let metrics = match queue_metrics(lambda, mu, 1).unwrap() {
        QueueOutcome::Stable(m) => m,
        other => panic!("期望稳定, 实际 {:?}", other),
    };
    assert!(!metrics.approximate);
    assert_approx(metrics.avg_system_length, lambda * metrics.avg_system_time);
    assert_approx(metrics.avg_queue_length, lambda * metrics.avg_wait_time);
    assert_approx(metrics.avg_system_length - metrics.avg_queue_length, lambda / mu);
}

#[test]
fn test_queue_unstable_at_full_utilization() {
    let outcome = queue_metrics(10.0, 5.0, 2).unwrap();
    assert!(!outcome.is_stable());
    assert_approx(outcome.utilization(), 1.0);
    assert!(outcome.metrics().is_none());
}

#[test]
fn test_multi_server_marked_approximate() {
    let outcome = queue_metrics(6.0, 5.0, 2).unwrap();
    let metrics = outcome.metrics().unwrap();
    assert!(metrics.approximate);
    assert_approx(metrics.utilization, 0.6);
    assert!(metrics.avg_queue_length >= 0.0);
}

#[test]
fn test_linspace_inclusive_endpoints() {
    let values = formula::linspace(0.1, 0.95, 20);
    assert_eq!(values.len(), 20);
    assert_eq!(values[0], 0.1);
    assert_eq!(values[19], 0.95);
}
