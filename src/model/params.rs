/*
 * @Author       : 老董
 * @Date         : 2026-10-14 14:00:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-14 14:00:00
 * @Description  : 直线参数
 */

use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// 直线参数：y = slope·x + intercept
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LineParams {
    pub slope: f64,
    pub intercept: f64,
}

impl LineParams {
    pub const fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// 逐元素预测
    pub fn predict_all(&self, x: &Array1<f64>) -> Array1<f64> {
        x.mapv(|xi| self.predict(xi))
    }

    /// 到另一组参数的欧氏距离
    pub fn distance_to(&self, other: &Self) -> f64 {
        (self.slope - other.slope).hypot(self.intercept - other.intercept)
    }
}

impl From<(f64, f64)> for LineParams {
    fn from((slope, intercept): (f64, f64)) -> Self {
        Self { slope, intercept }
    }
}
