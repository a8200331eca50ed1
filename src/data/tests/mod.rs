/*
 * @Author       : 老董
 * @Date         : 2026-10-14 19:02:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-16 10:05:00
 * @Description  : 数据模块单元测试
 *
 * - generator: 合成数据生成与配置校验
 * - dataset: 外部数据构造与访问器
 */
