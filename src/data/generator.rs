/*
 * @Author       : 老董
 * @Date         : 2026-10-14 10:05:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-16 15:36:00
 * @Description  : 合成数据生成器
 *
 * X 为定义域上的等距采样，Y = shape(X) + N(0, noise_std²)。
 * 给定种子时结果逐位可复现；未给种子时从系统熵源取随机数。
 */

use ndarray::Array1;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use super::{Dataset, DatasetKind, DatasetShape};
use crate::errors::{RegressionError, Result};

/// 默认样本数
pub const DEFAULT_N_POINTS: usize = 50;
/// 默认定义域
pub const DEFAULT_DOMAIN: (f64, f64) = (0.0, 10.0);
/// 默认种子
pub const DEFAULT_SEED: u64 = 42;

/// 生成器配置
///
/// # 示例
/// ```ignore
/// let config = GeneratorConfig::preset(DatasetKind::Sinusoidal)
///     .n_points(100)
///     .seed(7);
/// let dataset = generate(&config)?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub n_points: usize,
    pub domain: (f64, f64),
    pub noise_std: f64,
    pub shape: DatasetShape,
    /// None 表示每次生成都使用新的熵
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    /// 线性预设 + 固定种子 42
    fn default() -> Self {
        Self::preset(DatasetKind::Linear).seed(DEFAULT_SEED)
    }
}

impl GeneratorConfig {
    pub fn new(shape: DatasetShape, noise_std: f64) -> Self {
        Self {
            n_points: DEFAULT_N_POINTS,
            domain: DEFAULT_DOMAIN,
            noise_std,
            shape,
            seed: None,
        }
    }

    /// 各数据集类型的预设参数（不带种子）
    pub fn preset(kind: DatasetKind) -> Self {
        match kind {
            DatasetKind::Linear => Self::new(
                DatasetShape::Linear {
                    slope: 1.5,
                    intercept: 2.0,
                },
                1.5,
            ),
            DatasetKind::Polynomial => Self::new(
                DatasetShape::Polynomial {
                    coefficients: vec![1.0, 0.5, 0.1],
                },
                1.0,
            ),
            DatasetKind::Sinusoidal => Self::new(
                DatasetShape::Sinusoidal {
                    amplitude: 2.0,
                    frequency: 0.5,
                    offset: 5.0,
                },
                0.5,
            ),
            DatasetKind::Exponential => Self::new(
                DatasetShape::ExponentialDecay {
                    scale: 10.0,
                    rate: 0.9,
                },
                1.0,
            ),
            DatasetKind::NoisyLinear => Self::noisy_linear(0.5),
        }
    }

    /// 固定直线 1.5x + 2，噪声标准差为 2·noise_level
    pub fn noisy_linear(noise_level: f64) -> Self {
        Self::new(
            DatasetShape::Linear {
                slope: 1.5,
                intercept: 2.0,
            },
            noise_level * 2.0,
        )
    }

    pub fn n_points(mut self, n_points: usize) -> Self {
        self.n_points = n_points;
        self
    }

    pub fn domain(mut self, start: f64, end: f64) -> Self {
        self.domain = (start, end);
        self
    }

    pub fn noise_std(mut self, noise_std: f64) -> Self {
        self.noise_std = noise_std;
        self
    }

    pub fn shape(mut self, shape: DatasetShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// 清除种子，改为每次使用新熵
    pub fn unseeded(mut self) -> Self {
        self.seed = None;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.n_points == 0 {
            return Err(RegressionError::invalid("n_points", "须大于 0"));
        }
        if !self.noise_std.is_finite() || self.noise_std < 0.0 {
            return Err(RegressionError::invalid(
                "noise_std",
                format!("须为非负有限值，实际为 {}", self.noise_std),
            ));
        }
        let (start, end) = self.domain;
        if !start.is_finite() || !end.is_finite() {
            return Err(RegressionError::invalid("domain", "端点须为有限值"));
        }
        // 单点时 linspace 只取起点，不要求区间非空
        if self.n_points > 1 && end <= start {
            return Err(RegressionError::invalid(
                "domain",
                format!("须满足 start < end，实际为 ({start}, {end})"),
            ));
        }
        self.shape.validate()
    }
}

/// 按配置生成数据集
pub fn generate(config: &GeneratorConfig) -> Result<Dataset> {
    config.validate()?;

    let (start, end) = config.domain;
    let x = Array1::linspace(start, end, config.n_points);
    // 区间相对端点量级过窄时，相邻采样会落在同一个 f64 上
    if x.windows(2).into_iter().any(|w| w[1] <= w[0]) {
        return Err(RegressionError::invalid(
            "domain",
            format!(
                "区间 ({start}, {end}) 过窄，无法取得 {} 个严格递增的采样点",
                config.n_points
            ),
        ));
    }

    let noise = Normal::new(0.0, config.noise_std)
        .map_err(|e| RegressionError::invalid("noise_std", e.to_string()))?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let y = x.mapv(|xi| config.shape.eval(xi) + noise.sample(&mut rng));
    log::debug!(
        "生成数据集：shape={:?}, n={}, noise_std={}, seed={:?}",
        config.shape.kind(),
        config.n_points,
        config.noise_std,
        config.seed
    );
    Ok(Dataset::from_arrays(x, y))
}
