/*
 * @Author       : 老董
 * @Date         : 2026-10-16 09:12:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-16 14:20:00
 * @Description  : 训练会话配置
 *
 * 支持 JSON（反）序列化；缺省字段取默认值。
 */

use serde::{Deserialize, Serialize};

use crate::data::GeneratorConfig;
use crate::errors::{RegressionError, Result};
use crate::model::LineParams;
use crate::optimizer::OptimizerKind;

pub const DEFAULT_LEARNING_RATE: f64 = 0.01;
pub const DEFAULT_MAX_ITERATIONS: usize = 500;
pub const DEFAULT_DELAY_MS: f64 = 50.0;
pub const DEFAULT_MAX_STEPS_PER_FRAME: usize = 25;
pub const DEFAULT_INITIAL_PARAMS: LineParams = LineParams::new(0.0, 5.0);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub generator: GeneratorConfig,
    /// 重置时回到的参数
    pub initial_params: LineParams,
    pub learning_rate: f64,
    pub optimizer: OptimizerKind,
    /// 迭代上限，达到后自动停止
    pub max_iterations: usize,
    /// 连续运行时两步之间的间隔（毫秒）
    pub delay_ms: f64,
    /// 实时驱动时单帧最多追赶的步数
    pub max_steps_per_frame: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            initial_params: DEFAULT_INITIAL_PARAMS,
            learning_rate: DEFAULT_LEARNING_RATE,
            optimizer: OptimizerKind::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            delay_ms: DEFAULT_DELAY_MS,
            max_steps_per_frame: DEFAULT_MAX_STEPS_PER_FRAME,
        }
    }
}

impl SessionConfig {
    pub fn generator(mut self, generator: GeneratorConfig) -> Self {
        self.generator = generator;
        self
    }

    pub fn initial_params(mut self, slope: f64, intercept: f64) -> Self {
        self.initial_params = LineParams::new(slope, intercept);
        self
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn optimizer(mut self, optimizer: OptimizerKind) -> Self {
        self.optimizer = optimizer;
        self
    }

    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn delay_ms(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn max_steps_per_frame(mut self, max_steps_per_frame: usize) -> Self {
        self.max_steps_per_frame = max_steps_per_frame;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.generator.validate()?;
        validate_learning_rate(self.learning_rate)?;
        validate_delay(self.delay_ms)?;
        if !self.initial_params.slope.is_finite() || !self.initial_params.intercept.is_finite() {
            return Err(RegressionError::invalid("initial_params", "须为有限值"));
        }
        if self.max_iterations == 0 {
            return Err(RegressionError::invalid("max_iterations", "须大于 0"));
        }
        if self.max_steps_per_frame == 0 {
            return Err(RegressionError::invalid("max_steps_per_frame", "须大于 0"));
        }
        Ok(())
    }

    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 序列化为格式化的 JSON 字符串
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub(crate) fn validate_learning_rate(lr: f64) -> Result<()> {
    if lr.is_finite() && lr > 0.0 {
        Ok(())
    } else {
        Err(RegressionError::invalid(
            "learning_rate",
            format!("须为正的有限值，实际为 {lr}"),
        ))
    }
}

pub(crate) fn validate_delay(delay_ms: f64) -> Result<()> {
    if delay_ms.is_finite() && delay_ms >= 0.0 {
        Ok(())
    } else {
        Err(RegressionError::invalid(
            "delay_ms",
            format!("须为非负有限值，实际为 {delay_ms}"),
        ))
    }
}
