/*
 * @Author       : 老董
 * @Date         : 2026-10-14 09:12:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-16 14:20:00
 * @Description  : 一维回归数据集 (X, Y)
 *
 * 构造完成后不可变；重新生成时整体替换。
 * X 严格递增，X 与 Y 长度相同且不为空。
 */

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::errors::{RegressionError, Result};

/// 成对的 (x, y) 样本序列
///
/// 反序列化同样经过 [`Dataset::from_points`] 的全部校验。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDataset", into = "RawDataset")]
pub struct Dataset {
    x: Array1<f64>,
    y: Array1<f64>,
}

impl Dataset {
    /// 由外部数据构造数据集
    ///
    /// # 错误
    /// - 长度不一致或为空
    /// - X 不是严格递增，或含非有限值
    /// - Y 含非有限值
    pub fn from_points(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.is_empty() {
            return Err(RegressionError::invalid("n_points", "须大于 0"));
        }
        if x.len() != y.len() {
            return Err(RegressionError::invalid(
                "points",
                format!("X 与 Y 长度不一致：{} != {}", x.len(), y.len()),
            ));
        }
        if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
            return Err(RegressionError::invalid("points", "存在非有限值"));
        }
        if x.windows(2).any(|w| w[1] <= w[0]) {
            return Err(RegressionError::invalid("x", "须严格递增"));
        }
        Ok(Self {
            x: Array1::from(x),
            y: Array1::from(y),
        })
    }

    /// 生成器内部使用：调用方已保证不变量成立
    pub(crate) fn from_arrays(x: Array1<f64>, y: Array1<f64>) -> Self {
        debug_assert_eq!(x.len(), y.len());
        Self { x, y }
    }

    pub fn x(&self) -> &Array1<f64> {
        &self.x
    }

    pub fn y(&self) -> &Array1<f64> {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// 按顺序遍历 (x, y)
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// 序列化形式：`{"x": [...], "y": [...]}`
#[derive(Serialize, Deserialize)]
struct RawDataset {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl TryFrom<RawDataset> for Dataset {
    type Error = RegressionError;

    fn try_from(raw: RawDataset) -> Result<Self> {
        Self::from_points(raw.x, raw.y)
    }
}

impl From<Dataset> for RawDataset {
    fn from(dataset: Dataset) -> Self {
        Self {
            x: dataset.x.to_vec(),
            y: dataset.y.to_vec(),
        }
    }
}
