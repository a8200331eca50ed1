/*
 * @Author       : 老董
 * @Date         : 2026-10-15 16:30:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-16 09:12:00
 * @Description  : Adam优化器实现
 */

use super::{Gradient, Optimizer, OptimizerKind};
use crate::model::LineParams;

/// 单个参数的 Adam 累积量
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AdamMoments {
    /// 一阶矩估计
    pub m: f64,
    /// 二阶矩估计
    pub v: f64,
    /// 时间步
    pub t: i32,
}

/// Adam优化器
///
/// slope 与 intercept 各有一份独立的 (m, v, t)，互不共享。
#[derive(Debug, Clone)]
pub struct Adam {
    learning_rate: f64,
    beta1: f64,
    beta2: f64,
    epsilon: f64,
    slope: AdamMoments,
    intercept: AdamMoments,
}

impl Adam {
    pub const fn new(learning_rate: f64, beta1: f64, beta2: f64, epsilon: f64) -> Self {
        Self {
            learning_rate,
            beta1,
            beta2,
            epsilon,
            slope: AdamMoments {
                m: 0.0,
                v: 0.0,
                t: 0,
            },
            intercept: AdamMoments {
                m: 0.0,
                v: 0.0,
                t: 0,
            },
        }
    }

    /// 使用默认参数 (β1=0.9, β2=0.999, ε=1e-8)
    pub const fn new_default(learning_rate: f64) -> Self {
        Self::new(learning_rate, 0.9, 0.999, 1e-8)
    }

    pub const fn slope_moments(&self) -> &AdamMoments {
        &self.slope
    }

    pub const fn intercept_moments(&self) -> &AdamMoments {
        &self.intercept
    }

    /// 单个参数的 Adam 更新，返回新参数值
    fn update(&self, moments: &mut AdamMoments, value: f64, gradient: f64) -> f64 {
        moments.t += 1;

        // m = β1 * m + (1 - β1) * g
        moments.m = self.beta1 * moments.m + (1.0 - self.beta1) * gradient;
        // v = β2 * v + (1 - β2) * g²
        moments.v = self.beta2 * moments.v + (1.0 - self.beta2) * gradient * gradient;

        // 偏差修正
        let m_hat = moments.m / (1.0 - self.beta1.powi(moments.t));
        let v_hat = moments.v / (1.0 - self.beta2.powi(moments.t));

        // θ = θ - α * m_hat / (√v_hat + ε)
        value - self.learning_rate * m_hat / (v_hat.sqrt() + self.epsilon)
    }
}

impl Optimizer for Adam {
    fn step(&mut self, params: LineParams, grad: Gradient) -> LineParams {
        let mut slope_moments = self.slope;
        let mut intercept_moments = self.intercept;

        let slope = self.update(&mut slope_moments, params.slope, grad.d_slope);
        let intercept = self.update(&mut intercept_moments, params.intercept, grad.d_intercept);

        self.slope = slope_moments;
        self.intercept = intercept_moments;
        LineParams { slope, intercept }
    }

    fn reset(&mut self) {
        self.slope = AdamMoments::default();
        self.intercept = AdamMoments::default();
    }

    fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    fn set_learning_rate(&mut self, lr: f64) {
        self.learning_rate = lr;
    }

    fn kind(&self) -> OptimizerKind {
        OptimizerKind::Adam
    }
}
