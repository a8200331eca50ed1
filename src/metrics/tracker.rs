/*
 * @Author       : 老董
 * @Date         : 2026-10-15 20:15:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-16 10:48:00
 * @Description  : 训练指标追踪器
 *
 * 每次 update 追加一条 (iteration, MSE, MAE, R²) 记录，历史只增不改；
 * clear 时整体清空并把游标归零。
 */

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::{mean_absolute_error, mean_squared_error, r2_score};

/// 单次迭代的指标记录
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub iteration: usize,
    pub mse: f64,
    pub mae: f64,
    pub r2: f64,
}

/// 最近一次的 (MSE, MAE, R²)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CurrentMetrics {
    pub mse: f64,
    pub mae: f64,
    pub r2: f64,
}

/// 训练结束时的统计摘要
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub iterations: usize,
    pub final_mse: f64,
    pub min_mse: f64,
    pub max_mse: f64,
    pub final_mae: f64,
    pub final_r2: f64,
}

#[derive(Debug, Clone, Default)]
pub struct MetricsTracker {
    records: Vec<MetricRecord>,
    current_iteration: usize,
}

impl MetricsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 计算并追加一条记录
    ///
    /// # Panics
    /// 如果 `y_true` 与 `y_pred` 长度不一致
    pub fn update(&mut self, y_true: &Array1<f64>, y_pred: &Array1<f64>, iteration: usize) {
        let record = MetricRecord {
            iteration,
            mse: mean_squared_error(y_true, y_pred),
            mae: mean_absolute_error(y_true, y_pred),
            r2: r2_score(y_true, y_pred),
        };
        self.current_iteration = iteration;
        self.records.push(record);
    }

    /// 最近一条记录；历史为空时返回全 0
    pub fn get_current(&self) -> CurrentMetrics {
        self.records
            .last()
            .map(|r| CurrentMetrics {
                mse: r.mse,
                mae: r.mae,
                r2: r.r2,
            })
            .unwrap_or_default()
    }

    /// 历史为空时返回 None
    pub fn summary(&self) -> Option<MetricsSummary> {
        let last = self.records.last()?;
        let (min_mse, max_mse) = self
            .records
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
                (lo.min(r.mse), hi.max(r.mse))
            });
        Some(MetricsSummary {
            iterations: self.records.len(),
            final_mse: last.mse,
            min_mse,
            max_mse,
            final_mae: last.mae,
            final_r2: last.r2,
        })
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.current_iteration = 0;
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MetricRecord] {
        &self.records
    }

    /// 最近一次 update 传入的迭代号
    pub const fn current_iteration(&self) -> usize {
        self.current_iteration
    }

    /// 损失曲线（供绘制 MSE 面板）
    pub fn mse_history(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.mse)
    }
}
