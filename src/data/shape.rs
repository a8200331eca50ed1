/*
 * @Author       : 老董
 * @Date         : 2026-10-14 14:20:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-16 19:02:00
 * @Description  : 合成数据集的形状模型
 *
 * DatasetShape 描述 y = f(x) 的确定性部分，噪声由生成器另行叠加；
 * DatasetKind 是供 UI 切换数据集时使用的类型标签，每种标签对应一组预设参数。
 */

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{RegressionError, Result};

/// y = f(x) 的形状
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DatasetShape {
    /// slope·x + intercept
    Linear { slope: f64, intercept: f64 },
    /// 多项式，系数按最高次在前排列（与 numpy 的 polyval 相同）
    Polynomial { coefficients: Vec<f64> },
    /// amplitude·sin(frequency·x) + offset
    Sinusoidal {
        amplitude: f64,
        frequency: f64,
        offset: f64,
    },
    /// scale·exp(-rate·x)
    ExponentialDecay { scale: f64, rate: f64 },
}

impl DatasetShape {
    /// 计算不含噪声的 f(x)
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Self::Linear { slope, intercept } => slope * x + intercept,
            // Horner 法
            Self::Polynomial { coefficients } => {
                coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
            }
            Self::Sinusoidal {
                amplitude,
                frequency,
                offset,
            } => amplitude * (frequency * x).sin() + offset,
            Self::ExponentialDecay { scale, rate } => scale * (-rate * x).exp(),
        }
    }

    /// 形状参数检查：所有参数必须有限，多项式系数不能为空
    pub fn validate(&self) -> Result<()> {
        let params: Vec<f64> = match self {
            Self::Linear { slope, intercept } => vec![*slope, *intercept],
            Self::Polynomial { coefficients } => {
                if coefficients.is_empty() {
                    return Err(RegressionError::invalid("coefficients", "不能为空"));
                }
                coefficients.clone()
            }
            Self::Sinusoidal {
                amplitude,
                frequency,
                offset,
            } => vec![*amplitude, *frequency, *offset],
            Self::ExponentialDecay { scale, rate } => vec![*scale, *rate],
        };
        if params.iter().all(|p| p.is_finite()) {
            Ok(())
        } else {
            Err(RegressionError::invalid(
                "shape",
                format!("参数须为有限值，实际为 {self:?}"),
            ))
        }
    }

    /// 该形状最接近的数据集标签（NoisyLinear 与 Linear 共用线性形状，这里统一归为 Linear）
    pub const fn kind(&self) -> DatasetKind {
        match self {
            Self::Linear { .. } => DatasetKind::Linear,
            Self::Polynomial { .. } => DatasetKind::Polynomial,
            Self::Sinusoidal { .. } => DatasetKind::Sinusoidal,
            Self::ExponentialDecay { .. } => DatasetKind::Exponential,
        }
    }
}

/// 数据集类型标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    #[default]
    Linear,
    Polynomial,
    Sinusoidal,
    Exponential,
    NoisyLinear,
}

impl DatasetKind {
    pub const ALL: [Self; 5] = [
        Self::Linear,
        Self::Polynomial,
        Self::Sinusoidal,
        Self::Exponential,
        Self::NoisyLinear,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Polynomial => "polynomial",
            Self::Sinusoidal => "sinusoidal",
            Self::Exponential => "exponential",
            Self::NoisyLinear => "noisy_linear",
        }
    }
}

impl Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DatasetKind {
    type Err = RegressionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "linear" => Ok(Self::Linear),
            "polynomial" => Ok(Self::Polynomial),
            "sinusoidal" | "sine" => Ok(Self::Sinusoidal),
            "exponential" | "exponential_decay" => Ok(Self::Exponential),
            "noisy_linear" => Ok(Self::NoisyLinear),
            _ => Err(RegressionError::UnknownDataset(s.to_string())),
        }
    }
}
