/*
 * @Author       : 老董
 * @Date         : 2026-10-16 10:05:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-16 15:36:00
 * @Description  : 训练会话（步进引擎）
 *
 * 会话独占参数、优化器与指标历史；UI 只通过指令驱动并读取快照。
 *
 * 状态转换：
 * - Idle/Paused --start--> Running（迭代未满时）
 * - Running --pause/step--> Paused
 * - 迭代达到上限 --> Complete（之后的步进均为空操作，直到 reset）
 * - 任意状态 --reset/regenerate--> Idle
 *
 * 所有可能失败的操作都先校验、后修改，失败时会话保持原样。
 */

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::config::{validate_delay, validate_learning_rate};
use super::{Command, SessionConfig, StepPacer, TrainState};
use crate::data::{Dataset, DatasetKind, GeneratorConfig, generate};
use crate::errors::Result;
use crate::metrics::MetricsTracker;
use crate::model::{LineParams, ModelState};
use crate::optimizer::{AnyOptimizer, Gradient, Optimizer, OptimizerKind};

/// 供 UI 渲染的只读快照
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub slope: f64,
    pub intercept: f64,
    pub iteration: usize,
    pub max_iterations: usize,
    pub state: TrainState,
    /// 当前直线的 MSE
    pub mse: f64,
    pub optimizer: OptimizerKind,
    pub learning_rate: f64,
}

#[derive(Debug, Clone)]
pub struct TrainingSession {
    config: SessionConfig,
    model: ModelState,
    params: LineParams,
    optimizer: AnyOptimizer,
    iteration: usize,
    state: TrainState,
    metrics: MetricsTracker,
    pacer: StepPacer,
    dataset_kind: DatasetKind,
}

impl TrainingSession {
    /// 按配置生成数据并创建会话
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        let dataset = generate(&config.generator)?;
        Ok(Self::build(config, dataset))
    }

    /// 使用外部提供的数据集创建会话
    ///
    /// `Dataset` 只能经 `from_points`、反序列化或生成器得到，三者都保证长度一致且 X 严格递增。
    pub fn with_dataset(config: SessionConfig, dataset: Dataset) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, dataset))
    }

    fn build(config: SessionConfig, dataset: Dataset) -> Self {
        let optimizer = config.optimizer.build(config.learning_rate);
        let pacer = StepPacer::new(config.delay_ms, config.max_steps_per_frame);
        let dataset_kind = config.generator.shape.kind();
        Self {
            params: config.initial_params,
            model: ModelState::new(dataset),
            optimizer,
            iteration: 0,
            state: TrainState::Idle,
            metrics: MetricsTracker::new(),
            pacer,
            dataset_kind,
            config,
        }
    }

    // ========== 指令 ==========

    /// 执行一条 UI 指令
    pub fn apply(&mut self, command: Command) -> Result<()> {
        debug!("指令: {command:?}（当前状态 {}）", self.state);
        match command {
            Command::Start => self.start(),
            Command::Pause => self.pause(),
            Command::Step => {
                self.step();
            }
            Command::Reset => self.reset(),
            Command::Regenerate(seed) => self.regenerate(seed)?,
            Command::SwitchOptimizer(kind) => self.switch_optimizer(kind),
            Command::SwitchDataset(kind) => self.switch_dataset(kind)?,
            Command::SetLearningRate(lr) => self.set_learning_rate(lr)?,
            Command::SetDelay(delay_ms) => self.set_delay(delay_ms)?,
        }
        Ok(())
    }

    /// Idle/Paused → Running；迭代已满或已完成时为空操作
    pub fn start(&mut self) {
        match self.state {
            TrainState::Idle | TrainState::Paused if !self.at_cap() => {
                self.state = TrainState::Running;
                debug!("开始连续训练，迭代 {}", self.iteration);
            }
            TrainState::Complete => warn!("已达到迭代上限 {}，需先重置", self.config.max_iterations),
            _ => {}
        }
    }

    /// Running → Paused
    pub fn pause(&mut self) {
        if self.state == TrainState::Running {
            self.state = TrainState::Paused;
            self.pacer.clear();
            debug!("暂停于迭代 {}", self.iteration);
        }
    }

    /// 无论当前状态如何都执行一步（已完成时除外），之后进入 Paused
    ///
    /// 返回是否真的执行了一步。
    pub fn step(&mut self) -> bool {
        if self.state == TrainState::Complete || self.at_cap() {
            self.mark_complete();
            return false;
        }
        self.logical_step();
        self.pacer.clear();
        self.state = TrainState::Paused;
        self.mark_complete();
        true
    }

    /// 实时驱动：按帧间隔换算步数并依次执行，返回实际执行的步数
    pub fn tick(&mut self, dt_secs: f64) -> usize {
        if self.state != TrainState::Running {
            return 0;
        }
        let steps = self.pacer.steps_for(dt_secs);
        self.advance(steps)
    }

    /// 运行中连续执行至多 `steps` 步，不会越过迭代上限
    pub fn advance(&mut self, steps: usize) -> usize {
        if self.state != TrainState::Running {
            return 0;
        }
        let mut done = 0;
        while done < steps && !self.at_cap() {
            self.logical_step();
            done += 1;
        }
        self.mark_complete();
        done
    }

    /// 开始并一直运行到迭代上限，返回执行的步数
    pub fn run_to_completion(&mut self) -> usize {
        self.start();
        let remaining = self.config.max_iterations.saturating_sub(self.iteration);
        self.advance(remaining)
    }

    /// 参数与优化器回到初始值，迭代归零，指标清空
    pub fn reset(&mut self) {
        self.params = self.config.initial_params;
        self.optimizer.reset();
        self.iteration = 0;
        self.metrics.clear();
        self.pacer.clear();
        self.state = TrainState::Idle;
        debug!("会话已重置");
    }

    /// 重新生成数据后重置；生成失败时会话保持原样
    pub fn regenerate(&mut self, seed: Option<u64>) -> Result<()> {
        let generator = GeneratorConfig {
            seed,
            ..self.config.generator.clone()
        };
        let dataset = generate(&generator)?;
        self.model.replace_dataset(dataset);
        self.reset();
        info!("已重新生成数据集（{}，seed={seed:?}）", self.dataset_kind);
        Ok(())
    }

    /// 切换数据集类型：取该类型的预设，保留样本数、定义域和种子策略，然后重新生成
    pub fn switch_dataset(&mut self, kind: DatasetKind) -> Result<()> {
        let current = &self.config.generator;
        let generator = GeneratorConfig {
            n_points: current.n_points,
            domain: current.domain,
            seed: current.seed,
            ..GeneratorConfig::preset(kind)
        };
        let dataset = generate(&generator)?;
        self.config.generator = generator;
        self.dataset_kind = kind;
        self.model.replace_dataset(dataset);
        self.reset();
        info!("切换数据集为 {kind}");
        Ok(())
    }

    /// 换成全新的优化器实例；参数位置、迭代与指标保持不变
    pub fn switch_optimizer(&mut self, kind: OptimizerKind) {
        self.optimizer = kind.build(self.config.learning_rate);
        self.config.optimizer = kind;
        self.pacer.clear();
        debug!("切换优化器为 {kind}");
    }

    /// 修改学习率，立即作用于当前优化器（不清空其累积状态）
    pub fn set_learning_rate(&mut self, lr: f64) -> Result<()> {
        validate_learning_rate(lr)?;
        self.optimizer.set_learning_rate(lr);
        self.config.learning_rate = lr;
        Ok(())
    }

    pub fn set_delay(&mut self, delay_ms: f64) -> Result<()> {
        validate_delay(delay_ms)?;
        self.pacer.set_delay(delay_ms);
        self.config.delay_ms = delay_ms;
        Ok(())
    }

    // ========== 内部 ==========

    /// 一个逻辑步：梯度基于更新前的参数快照计算，新参数一次性写回
    fn logical_step(&mut self) {
        let before = self.params;
        let grad = Gradient::of(self.model.dataset(), before);
        let after = self.optimizer.step(before, grad);
        self.params = after;
        self.iteration += 1;

        let y_pred = self.model.predict(&after);
        self.metrics.update(self.model.y(), &y_pred, self.iteration);
    }

    fn at_cap(&self) -> bool {
        self.iteration >= self.config.max_iterations
    }

    fn mark_complete(&mut self) {
        if self.at_cap() && self.state != TrainState::Complete {
            self.state = TrainState::Complete;
            self.pacer.clear();
            info!(
                "训练完成：{} 次迭代，slope={:.4}, intercept={:.4}",
                self.iteration, self.params.slope, self.params.intercept
            );
        }
    }

    // ========== 只读访问 ==========

    pub fn params(&self) -> LineParams {
        self.params
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn state(&self) -> TrainState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TrainState::Running
    }

    pub fn model(&self) -> &ModelState {
        &self.model
    }

    pub fn metrics(&self) -> &MetricsTracker {
        &self.metrics
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn optimizer(&self) -> &AnyOptimizer {
        &self.optimizer
    }

    pub fn optimizer_kind(&self) -> OptimizerKind {
        self.optimizer.kind()
    }

    pub fn dataset_kind(&self) -> DatasetKind {
        self.dataset_kind
    }

    pub fn learning_rate(&self) -> f64 {
        self.optimizer.learning_rate()
    }

    pub fn delay_ms(&self) -> f64 {
        self.pacer.delay_ms()
    }

    /// 当前直线的 MSE（第一步之前也可用）
    pub fn current_mse(&self) -> f64 {
        self.model.mse(&self.params)
    }

    /// 当前数据的最小二乘最优直线
    pub fn optimal_params(&self) -> LineParams {
        self.model.least_squares()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            slope: self.params.slope,
            intercept: self.params.intercept,
            iteration: self.iteration,
            max_iterations: self.config.max_iterations,
            state: self.state,
            mse: self.current_mse(),
            optimizer: self.optimizer_kind(),
            learning_rate: self.learning_rate(),
        }
    }
}
