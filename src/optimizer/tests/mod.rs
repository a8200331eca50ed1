/*
 * @Author       : 老董
 * @Date         : 2026-10-15 14:20:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-16 19:02:00
 * @Description  : 优化器模块单元测试
 *
 * 测试按功能分组：
 * - sgd: SGD 优化器测试
 * - momentum: Momentum 优化器测试
 * - adam: Adam 优化器测试
 * - trait_tests: Optimizer trait 通用行为与梯度计算测试
 */

mod momentum;
