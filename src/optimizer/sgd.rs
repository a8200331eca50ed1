/*
 * @Author       : 老董
 * @Date         : 2026-10-15 10:05:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-16 15:36:00
 * @Description  : 梯度下降优化器实现
 */

use super::{Gradient, Optimizer, OptimizerKind};
use crate::model::LineParams;

/// SGD (随机梯度下降) 优化器
///
/// θ = θ - α * ∇θ，没有任何累积状态
#[derive(Debug, Clone)]
pub struct SGD {
    learning_rate: f64,
}

impl SGD {
    pub const fn new(learning_rate: f64) -> Self {
        Self { learning_rate }
    }
}

impl Optimizer for SGD {
    fn step(&mut self, params: LineParams, grad: Gradient) -> LineParams {
        LineParams {
            slope: params.slope - self.learning_rate * grad.d_slope,
            intercept: params.intercept - self.learning_rate * grad.d_intercept,
        }
    }

    fn reset(&mut self) {}

    fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    fn set_learning_rate(&mut self, lr: f64) {
        self.learning_rate = lr;
    }

    fn kind(&self) -> OptimizerKind {
        OptimizerKind::Sgd
    }
}
