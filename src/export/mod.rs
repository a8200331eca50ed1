/*
 * @Author       : 老董
 * @Date         : 2026-10-16 10:05:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-16 15:36:00
 * @Description  : 训练结果导出
 *
 * - 会话状态：扁平 JSON（参数、迭代、优化器、学习率、状态、指标摘要）
 * - 指标摘要：JSON
 * - 训练历史：CSV，表头 `iteration,mse,mae,r2`
 *
 * 导出只读取会话，失败不会影响内存中的任何状态。
 */

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::metrics::{MetricRecord, MetricsSummary};
use crate::optimizer::OptimizerKind;
use crate::session::{TrainState, TrainingSession};


/// CSV 表头（与 MetricRecord 的字段顺序一致）
pub const HISTORY_CSV_HEADER: &str = "iteration,mse,mae,r2";

/// 会话状态的导出视图
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionExport {
    pub slope: f64,
    pub intercept: f64,
    pub iteration: usize,
    pub optimizer: OptimizerKind,
    pub learning_rate: f64,
    pub state: TrainState,
    /// 尚未训练时为 null
    pub summary: Option<MetricsSummary>,
}

impl SessionExport {
    /// 以格式化 JSON 写入文件
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_json(self, path.as_ref())?;
        debug!("会话状态已导出到 {}", path.as_ref().display());
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl TrainingSession {
    /// 当前会话的导出视图
    pub fn export_state(&self) -> SessionExport {
        let params = self.params();
        SessionExport {
            slope: params.slope,
            intercept: params.intercept,
            iteration: self.iteration(),
            optimizer: self.optimizer_kind(),
            learning_rate: self.learning_rate(),
            state: self.state(),
            summary: self.metrics().summary(),
        }
    }
}

/// 把指标摘要写成格式化 JSON
pub fn export_metrics_json<P: AsRef<Path>>(summary: &MetricsSummary, path: P) -> Result<()> {
    write_json(summary, path.as_ref())?;
    debug!("指标摘要已导出到 {}", path.as_ref().display());
    Ok(())
}

/// 把训练历史写成 CSV
///
/// 表头由 [`MetricRecord`] 的字段名生成。历史为空时不创建文件，返回 `Ok(false)`。
pub fn export_history_csv<P: AsRef<Path>>(records: &[MetricRecord], path: P) -> Result<bool> {
    let path = path.as_ref();
    if records.is_empty() {
        warn!("训练历史为空，跳过导出 {}", path.display());
        return Ok(false);
    }

    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    debug!("训练历史（{} 条）已导出到 {}", records.len(), path.display());
    Ok(true)
}

fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}
