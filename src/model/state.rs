/*
 * @Author       : 老董
 * @Date         : 2026-10-14 14:20:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-16 19:02:00
 * @Description  : 回归模型状态（当前数据集 + 由其导出的坐标范围）
 *
 * 数据集与包围盒总是一起替换：新包围盒先算好，再一次性写入，
 * 不存在“点是新的、范围还是旧的”的中间状态。
 */

use ndarray::Array1;

use super::{Bounds, LineParams};
use crate::data::Dataset;

#[derive(Debug, Clone)]
pub struct ModelState {
    dataset: Dataset,
    bounds: Bounds,
}

impl ModelState {
    pub fn new(dataset: Dataset) -> Self {
        let bounds = Bounds::of(&dataset);
        Self { dataset, bounds }
    }

    /// 整体替换数据集，返回旧数据集
    pub fn replace_dataset(&mut self, dataset: Dataset) -> Dataset {
        let bounds = Bounds::of(&dataset);
        let old = std::mem::replace(self, Self { dataset, bounds });
        old.dataset
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn x(&self) -> &Array1<f64> {
        self.dataset.x()
    }

    pub fn y(&self) -> &Array1<f64> {
        self.dataset.y()
    }

    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    /// 当前直线在所有样本上的预测
    pub fn predict(&self, params: &LineParams) -> Array1<f64> {
        params.predict_all(self.dataset.x())
    }

    /// 残差 Y_pred − Y
    pub fn residuals(&self, params: &LineParams) -> Array1<f64> {
        self.predict(params) - self.dataset.y()
    }

    pub fn mse(&self, params: &LineParams) -> f64 {
        let residuals = self.residuals(params);
        residuals.mapv(|e| e * e).mean().unwrap_or(0.0)
    }

    /// 最小二乘闭式解（“显示最优直线”）
    ///
    /// X 方差为 0 时退化为水平线 y = mean(Y)。
    pub fn least_squares(&self) -> LineParams {
        let x = self.dataset.x();
        let y = self.dataset.y();
        let x_mean = x.mean().unwrap_or(0.0);
        let y_mean = y.mean().unwrap_or(0.0);

        let dx = x.mapv(|v| v - x_mean);
        let sxx = dx.dot(&dx);
        if sxx == 0.0 {
            return LineParams::new(0.0, y_mean);
        }
        let sxy = dx.dot(&y.mapv(|v| v - y_mean));
        let slope = sxy / sxx;
        LineParams::new(slope, y_mean - slope * x_mean)
    }
}
