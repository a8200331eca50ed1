//! 回归模型状态
//!
//! - [`ModelState`]: 当前数据集及其坐标范围
//! - [`LineParams`]: 直线参数 (slope, intercept)
//! - [`Bounds`] / [`Viewport`]: 数据坐标到绘图坐标的纯函数映射

mod bounds;
mod params;
mod state;


pub use bounds::{Bounds, RANGE_EPSILON, Viewport};
pub use params::LineParams;
pub use state::ModelState;
