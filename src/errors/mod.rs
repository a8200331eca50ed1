/*
 * @Author       : 老董
 * @Date         : 2026-10-14 20:15:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-16 10:48:00
 * @Description  : 统一错误类型
 *
 * 配置错误在生成/设置时立即失败，且不会改动任何内存中的训练状态；
 * 退化数据（零 Y 跨度、SS_tot 为 0）在本地以安全默认值处理，不属于错误。
 */

use thiserror::Error;


/// 本 crate 的 Result 别名
pub type Result<T> = std::result::Result<T, RegressionError>;

#[derive(Error, Debug)]
pub enum RegressionError {
    /// 配置非法（样本数为 0、噪声为负、学习率非正等）
    #[error("配置非法：{field}{reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("未知的优化器：{0}（可选：sgd、momentum、adam）")]
    UnknownOptimizer(String),

    #[error("未知的数据集类型：{0}（可选：linear、polynomial、sinusoidal、exponential、noisy_linear）")]
    UnknownDataset(String),

    /// 导出时的 IO 错误
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    /// 导出时的序列化错误
    #[error("序列化错误: {0}")]
    Serialize(#[from] serde_json::Error),

    /// 导出训练历史 CSV 时的错误
    #[error("CSV 错误: {0}")]
    Csv(#[from] csv::Error),
}

impl RegressionError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }

    /// 是否为配置类错误
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfig { .. } | Self::UnknownOptimizer(_) | Self::UnknownDataset(_)
        )
    }
}
