/*
 * @Author       : 老董
 * @Date         : 2026-10-16 14:20:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-16 19:02:00
 * @Description  : 帧步进节拍器
 *
 * 把“两步之间的间隔”换算成“本帧应执行的步数”，供实时渲染循环驱动会话：
 * - steps_per_second = 1000 / max(delay_ms, 1)
 * - accumulator += dt · max(steps_per_second, 1)
 * - 本帧步数 = min(floor(accumulator), max_steps_per_frame)
 */

#[derive(Debug, Clone, PartialEq)]
pub struct StepPacer {
    delay_ms: f64,
    max_steps_per_frame: usize,
    accumulator: f64,
}

impl StepPacer {
    pub const fn new(delay_ms: f64, max_steps_per_frame: usize) -> Self {
        Self {
            delay_ms,
            max_steps_per_frame,
            accumulator: 0.0,
        }
    }

    pub const fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    /// 修改间隔会丢弃已累积的进度
    pub fn set_delay(&mut self, delay_ms: f64) {
        self.delay_ms = delay_ms;
        self.clear();
    }

    pub fn steps_per_second(&self) -> f64 {
        1000.0 / self.delay_ms.max(1.0)
    }

    /// 推进 `dt_secs` 秒，返回本帧应执行的步数
    pub fn steps_for(&mut self, dt_secs: f64) -> usize {
        if !dt_secs.is_finite() || dt_secs <= 0.0 {
            return 0;
        }
        self.accumulator += dt_secs * self.steps_per_second().max(1.0);
        let steps = (self.accumulator.floor() as usize).min(self.max_steps_per_frame);
        self.accumulator -= steps as f64;
        steps
    }

    pub fn clear(&mut self) {
        self.accumulator = 0.0;
    }

    pub const fn accumulated(&self) -> f64 {
        self.accumulator
    }
}
