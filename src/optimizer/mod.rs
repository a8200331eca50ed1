/*
 * @Author       : 老董
 * @Date         : 2026-10-15 20:15:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-16 10:48:00
 * @Description  : 优化器模块：SGD、Momentum、Adam 三种参数更新规则
 *
 * 三者共享同一个 Optimizer trait，通过 AnyOptimizer 做静态分发；
 * 切换优化器时总是新建实例，不沿用旧实例的任何累积状态。
 */

mod adam;
mod base;
mod momentum;
mod sgd;

#[cfg(test)]
mod tests;

pub use adam::{Adam, AdamMoments};
pub use base::{AnyOptimizer, Gradient, Optimizer, OptimizerKind};
pub use momentum::{DEFAULT_MOMENTUM, Momentum};
pub use sgd::SGD;
