//! # Linreg Descent
//!
//! 用梯度下降拟合直线 `y = slope · x + intercept` 的可视化教学内核：
//! 生成带噪声的一维数据集，用 SGD、Momentum 或 Adam 逐步更新两个参数，
//! 并记录每次迭代的 MSE、MAE 与 R²。
//!
//! 渲染与交互不在本 crate 内：UI 通过 [`session::TrainingSession`] 发送指令、
//! 每帧驱动训练并读取快照。
//!

pub mod data;
pub mod errors;
pub mod export;
pub mod metrics;
pub mod model;
pub mod optimizer;
pub mod session;

pub use errors::{RegressionError, Result};
pub use session::{Command, SessionConfig, TrainState, TrainingSession};
