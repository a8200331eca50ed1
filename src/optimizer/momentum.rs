/*
 * @Author       : 老董
 * @Date         : 2026-10-15 09:12:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-16 14:20:00
 * @Description  : 带动量的梯度下降
 */

use super::{Gradient, Optimizer, OptimizerKind};
use crate::model::LineParams;

/// 默认动量系数
pub const DEFAULT_MOMENTUM: f64 = 0.9;

/// Momentum 优化器
///
/// 每个参数各自维护速度：
/// - v = β * v - α * ∇θ
/// - θ = θ + v
#[derive(Debug, Clone)]
pub struct Momentum {
    learning_rate: f64,
    momentum: f64,
    velocity_slope: f64,
    velocity_intercept: f64,
}

impl Momentum {
    pub const fn new(learning_rate: f64, momentum: f64) -> Self {
        Self {
            learning_rate,
            momentum,
            velocity_slope: 0.0,
            velocity_intercept: 0.0,
        }
    }

    /// 使用默认动量 0.9
    pub const fn new_default(learning_rate: f64) -> Self {
        Self::new(learning_rate, DEFAULT_MOMENTUM)
    }

    pub const fn momentum(&self) -> f64 {
        self.momentum
    }

    /// 当前速度 (slope, intercept)
    pub const fn velocity(&self) -> (f64, f64) {
        (self.velocity_slope, self.velocity_intercept)
    }
}

impl Optimizer for Momentum {
    fn step(&mut self, params: LineParams, grad: Gradient) -> LineParams {
        self.velocity_slope =
            self.momentum * self.velocity_slope - self.learning_rate * grad.d_slope;
        self.velocity_intercept =
            self.momentum * self.velocity_intercept - self.learning_rate * grad.d_intercept;

        LineParams {
            slope: params.slope + self.velocity_slope,
            intercept: params.intercept + self.velocity_intercept,
        }
    }

    fn reset(&mut self) {
        self.velocity_slope = 0.0;
        self.velocity_intercept = 0.0;
    }

    fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    fn set_learning_rate(&mut self, lr: f64) {
        self.learning_rate = lr;
    }

    fn kind(&self) -> OptimizerKind {
        OptimizerKind::Momentum
    }
}
