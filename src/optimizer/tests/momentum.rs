/*
 * @Author       : 老董
 * @Date         : 2026-10-15 15:36:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-16 20:15:00
 * @Description  : Momentum 优化器测试
 */

use approx::assert_abs_diff_eq;

use crate::model::LineParams;
use crate::optimizer::{DEFAULT_MOMENTUM, Gradient, Momentum, Optimizer, SGD};

#[test]
fn test_momentum_creation() {
    let momentum = Momentum::new_default(0.01);
    assert_eq!(momentum.learning_rate(), 0.01);
    assert_eq!(momentum.momentum(), DEFAULT_MOMENTUM);
    assert_eq!(momentum.velocity(), (0.0, 0.0));
}

#[test]
fn test_momentum_update_formula() {
    // lr=0.1, β=0.9, g=(1, 2)
    // 第1步: v = (-0.1, -0.2), θ = (0.9, 1.8)
    // 第2步: v = 0.9*(-0.1) - 0.1 = -0.19, 0.9*(-0.2) - 0.2 = -0.38
    //        θ = (0.71, 1.42)
    let mut momentum = Momentum::new(0.1, 0.9);
    let grad = Gradient::new(1.0, 2.0);

    let p1 = momentum.step(LineParams::new(1.0, 2.0), grad);
    assert_abs_diff_eq!(p1.slope, 0.9, epsilon = 1e-12);
    assert_abs_diff_eq!(p1.intercept, 1.8, epsilon = 1e-12);

    let p2 = momentum.step(p1, grad);
    let (vs, vi) = momentum.velocity();
    assert_abs_diff_eq!(vs, -0.19, epsilon = 1e-12);
    assert_abs_diff_eq!(vi, -0.38, epsilon = 1e-12);
    assert_abs_diff_eq!(p2.slope, 0.71, epsilon = 1e-12);
    assert_abs_diff_eq!(p2.intercept, 1.42, epsilon = 1e-12);
}

#[test]
fn test_momentum_zero_degenerates_to_sgd() {
    let grads = [
        Gradient::new(1.0, -2.0),
        Gradient::new(0.5, 0.25),
        Gradient::new(-4.0, 3.0),
    ];
    let mut momentum = Momentum::new(0.07, 0.0);
    let mut sgd = SGD::new(0.07);
    let mut pm = LineParams::new(0.0, 5.0);
    let mut ps = pm;
    for grad in grads {
        pm = momentum.step(pm, grad);
        ps = sgd.step(ps, grad);
        assert_abs_diff_eq!(pm.slope, ps.slope, epsilon = 1e-15);
        assert_abs_diff_eq!(pm.intercept, ps.intercept, epsilon = 1e-15);
    }
}

#[test]
fn test_momentum_keeps_moving_without_gradient() {
    // 速度跨步保留：梯度归零后参数仍按残余速度移动
    let mut momentum = Momentum::new(0.1, 0.9);
    let p1 = momentum.step(LineParams::default(), Gradient::new(1.0, 0.0));
    let p2 = momentum.step(p1, Gradient::default());
    assert!(p2.slope < p1.slope);
    assert_abs_diff_eq!(p2.slope - p1.slope, -0.09, epsilon = 1e-12);
}

#[test]
fn test_momentum_reset_zeroes_velocity() {
    let mut momentum = Momentum::new(0.1, 0.9);
    momentum.step(LineParams::default(), Gradient::new(3.0, -1.0));
    assert_ne!(momentum.velocity(), (0.0, 0.0));

    momentum.reset();
    assert_eq!(momentum.velocity(), (0.0, 0.0));

    // 重置后与新实例行为一致
    let mut fresh = Momentum::new(0.1, 0.9);
    let grad = Gradient::new(0.5, 0.5);
    assert_eq!(
        momentum.step(LineParams::default(), grad),
        fresh.step(LineParams::default(), grad)
    );
}
