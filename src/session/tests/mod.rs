/*
 * @Author       : 老董
 * @Date         : 2026-10-16 19:02:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-16 19:02:00
 * @Description  : 训练会话单元测试
 *
 * - state_machine: 状态转换与迭代上限
 * - commands: 指令效果（切换优化器/数据集、学习率、间隔）
 * - pacer: 帧步进节拍
 * - config: 配置校验与 JSON
 */

mod pacer;
mod state_machine;

use crate::data::GeneratorConfig;
use crate::session::{SessionConfig, TrainingSession};

/// 测试用的小会话：种子 42，迭代上限 `max_iterations`
fn small_session(max_iterations: usize) -> TrainingSession {
    let config = SessionConfig::default()
        .generator(GeneratorConfig::default().n_points(20).seed(42))
        .max_iterations(max_iterations);
    TrainingSession::new(config).unwrap()
}
