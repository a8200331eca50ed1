//! 数据模块
//!
//! 生成教学演示用的一维合成回归数据。
//!
//! # 主要组件
//!
//! - [`Dataset`]: 不可变的 (X, Y) 样本序列
//! - [`GeneratorConfig`]: 样本数、定义域、噪声、形状与种子
//! - [`generate`]: 按配置生成数据集
//! - [`DatasetShape`] / [`DatasetKind`]: 形状模型与 UI 使用的类型标签
//!
//! # 使用示例
//!
//! ```ignore
//! use linreg_descent::data::{generate, GeneratorConfig, DatasetKind};
//!
//! let config = GeneratorConfig::preset(DatasetKind::Linear).seed(42);
//! let dataset = generate(&config)?;
//! assert_eq!(dataset.len(), 50);
//! ```

mod dataset;
mod generator;
mod shape;

#[cfg(test)]
mod tests;

pub use dataset::Dataset;
pub use generator::{DEFAULT_DOMAIN, DEFAULT_N_POINTS, DEFAULT_SEED, GeneratorConfig, generate};
pub use shape::{DatasetKind, DatasetShape};
