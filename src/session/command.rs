/*
 * @Author       : 老董
 * @Date         : 2026-10-16 09:30:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-16 09:30:00
 * @Description  : 会话状态与控制指令
 */

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::data::DatasetKind;
use crate::optimizer::OptimizerKind;

/// 会话运行状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainState {
    #[default]
    Idle,
    Running,
    Paused,
    /// 达到迭代上限，重置前不再接受任何步进
    Complete,
}

impl Display for TrainState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Complete => "complete",
        };
        write!(f, "{name}")
    }
}

/// UI 发给会话的控制指令
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum Command {
    Start,
    Pause,
    /// 单步执行，之后进入 Paused
    Step,
    Reset,
    /// 重新生成数据并重置；`None` 表示使用新的随机熵
    Regenerate(Option<u64>),
    SwitchOptimizer(OptimizerKind),
    SwitchDataset(DatasetKind),
    SetLearningRate(f64),
    SetDelay(f64),
}
