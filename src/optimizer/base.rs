/*
 * @Author       : 老董
 * @Date         : 2026-10-15 19:02:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-16 10:05:00
 * @Description  : 优化器 trait、梯度与优化器类型标签
 */

use std::fmt::{self, Display};
use std::str::FromStr;

use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

use super::{Adam, Momentum, SGD};
use crate::data::Dataset;
use crate::errors::{RegressionError, Result};
use crate::model::LineParams;

/// MSE 对 (slope, intercept) 的梯度
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Gradient {
    pub d_slope: f64,
    pub d_intercept: f64,
}

impl Gradient {
    pub const fn new(d_slope: f64, d_intercept: f64) -> Self {
        Self {
            d_slope,
            d_intercept,
        }
    }

    /// 在数据集上计算 MSE 梯度
    ///
    /// error = slope·X + intercept − Y
    /// - d_intercept = (2/N)·Σ error
    /// - d_slope     = (2/N)·Σ error·X
    ///
    /// `params` 按值传入，调用方持有的是更新前的快照。
    pub fn of(dataset: &Dataset, params: LineParams) -> Self {
        if dataset.is_empty() {
            return Self::default();
        }
        let error = params.predict_all(dataset.x()) - dataset.y();
        let scale = 2.0 / dataset.len() as f64;
        Self {
            d_slope: scale * error.dot(dataset.x()),
            d_intercept: scale * error.sum(),
        }
    }
}

/// 优化器核心 trait
///
/// `step` 只依赖传入的参数与梯度，以及优化器自身的累积状态；
/// 不读写任何外部状态。
///
/// # 使用示例
/// ```ignore
/// let mut optimizer = OptimizerKind::Adam.build(0.05);
/// let grad = Gradient::of(&dataset, params);
/// params = optimizer.step(params, grad);
/// ```
#[enum_dispatch]
pub trait Optimizer {
    /// 由当前参数与梯度计算下一组参数
    fn step(&mut self, params: LineParams, grad: Gradient) -> LineParams;

    /// 清零累积状态（SGD 无状态，为空操作）
    fn reset(&mut self);

    fn learning_rate(&self) -> f64;

    fn set_learning_rate(&mut self, lr: f64);

    fn kind(&self) -> OptimizerKind;
}

/// 三种优化器的静态分发包装
#[enum_dispatch(Optimizer)]
#[derive(Debug, Clone)]
pub enum AnyOptimizer {
    Sgd(SGD),
    Momentum(Momentum),
    Adam(Adam),
}

/// 优化器类型标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizerKind {
    #[default]
    Sgd,
    Momentum,
    Adam,
}

impl OptimizerKind {
    pub const ALL: [Self; 3] = [Self::Sgd, Self::Momentum, Self::Adam];

    /// 创建一个累积状态为零的新优化器（其余超参取默认值）
    pub fn build(self, learning_rate: f64) -> AnyOptimizer {
        match self {
            Self::Sgd => SGD::new(learning_rate).into(),
            Self::Momentum => Momentum::new_default(learning_rate).into(),
            Self::Adam => Adam::new_default(learning_rate).into(),
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sgd => "SGD",
            Self::Momentum => "Momentum",
            Self::Adam => "Adam",
        }
    }
}

impl Display for OptimizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for OptimizerKind {
    type Err = RegressionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "sgd" => Ok(Self::Sgd),
            "momentum" => Ok(Self::Momentum),
            "adam" => Ok(Self::Adam),
            _ => Err(RegressionError::UnknownOptimizer(s.to_string())),
        }
    }
}
