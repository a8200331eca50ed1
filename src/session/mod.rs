//! 训练会话
//!
//! [`TrainingSession`] 是 UI 与数值内核之间唯一的交互对象：
//! UI 每帧调用一次 [`TrainingSession::tick`]，或在用户操作时调用
//! [`TrainingSession::apply`]，随后读取 [`SessionSnapshot`] 与指标历史进行渲染。
//!
//! # 使用示例
//!
//! ```ignore
//! let mut session = TrainingSession::new(SessionConfig::default())?;
//! session.apply(Command::SwitchOptimizer(OptimizerKind::Adam))?;
//! session.apply(Command::Start)?;
//! loop {
//!     session.tick(frame_dt);
//!     render(&session.snapshot(), session.metrics());
//! }
//! ```

mod command;
mod config;
mod engine;
mod pacer;

#[cfg(test)]
mod tests;

pub use command::{Command, TrainState};
pub use config::{
    DEFAULT_DELAY_MS, DEFAULT_INITIAL_PARAMS, DEFAULT_LEARNING_RATE, DEFAULT_MAX_ITERATIONS,
    DEFAULT_MAX_STEPS_PER_FRAME, SessionConfig,
};
pub use engine::{SessionSnapshot, TrainingSession};
pub use pacer::StepPacer;
