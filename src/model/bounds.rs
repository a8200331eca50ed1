/*
 * @Author       : 老董
 * @Date         : 2026-10-14 09:12:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-16 14:20:00
 * @Description  : 数据包围盒与坐标映射
 *
 * 跨度下限为 RANGE_EPSILON，避免数据退化（例如所有 Y 相同）时除零。
 */

use serde::{Deserialize, Serialize};

use crate::data::Dataset;

/// 跨度下限
pub const RANGE_EPSILON: f64 = 1e-6;

/// 由数据集导出的坐标轴范围
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub x_range: f64,
    pub y_range: f64,
}

impl Bounds {
    pub fn of(dataset: &Dataset) -> Self {
        let (x_min, x_max) = min_max(dataset.x().iter().copied());
        let (y_min, y_max) = min_max(dataset.y().iter().copied());
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
            x_range: (x_max - x_min).max(RANGE_EPSILON),
            y_range: (y_max - y_min).max(RANGE_EPSILON),
        }
    }

    /// 数据坐标 → 单位正方形 [0,1]²
    pub fn normalize(&self, x: f64, y: f64) -> (f64, f64) {
        (
            (x - self.x_min) / self.x_range,
            (y - self.y_min) / self.y_range,
        )
    }

    /// 数据坐标 → 画布像素坐标（Y 轴向下）
    pub fn to_canvas(&self, x: f64, y: f64, viewport: &Viewport) -> (f64, f64) {
        let (nx, ny) = self.normalize(x, y);
        let (plot_w, plot_h) = viewport.plot_size();
        (
            viewport.pad + nx * plot_w,
            viewport.height - viewport.pad - ny * plot_h,
        )
    }
}

/// 画布尺寸与四周留白（像素）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub pad: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64, pad: f64) -> Self {
        Self { width, height, pad }
    }

    /// 扣除留白后的绘图区尺寸
    pub fn plot_size(&self) -> (f64, f64) {
        (
            (self.width - 2.0 * self.pad).max(0.0),
            (self.height - 2.0 * self.pad).max(0.0),
        )
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}
