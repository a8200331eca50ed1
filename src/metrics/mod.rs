//! 指标模块
//!
//! - [`MetricsTracker`]: 追加式的逐迭代指标历史
//! - [`mean_squared_error`] / [`mean_absolute_error`] / [`r2_score`]: 单次计算

mod score;
mod tracker;


pub use score::{mean_absolute_error, mean_squared_error, r2_score};
pub use tracker::{CurrentMetrics, MetricRecord, MetricsSummary, MetricsTracker};
