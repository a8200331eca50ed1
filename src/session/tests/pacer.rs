/*
 * @Author       : 老董
 * @Date         : 2026-10-16 10:50:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-16 10:50:00
 * @Description  : 帧步进节拍测试
 */

use approx::assert_abs_diff_eq;

use super::small_session;
use crate::session::{StepPacer, TrainState};

#[test]
fn test_pacer_steps_per_second() {
    assert_abs_diff_eq!(StepPacer::new(50.0, 25).steps_per_second(), 20.0);
    // 间隔下限 1ms
    assert_abs_diff_eq!(StepPacer::new(0.0, 25).steps_per_second(), 1000.0);
}

#[test]
fn test_pacer_accumulates_fractions() {
    // 20 步/秒，每帧 1/60 秒 → 每 3 帧 1 步
    let mut pacer = StepPacer::new(50.0, 25);
    let dt = 1.0 / 60.0;
    let total: usize = (0..60).map(|_| pacer.steps_for(dt)).sum();
    assert!((19..=20).contains(&total), "一秒应约 20 步，实际 {total}");
}

#[test]
fn test_pacer_caps_steps_per_frame() {
    let mut pacer = StepPacer::new(1.0, 25);
    assert_eq!(pacer.steps_for(1.0), 25);
    // 超出部分留在累积器中
    assert!(pacer.accumulated() > 900.0);
}

#[test]
fn test_pacer_ignores_bad_dt() {
    let mut pacer = StepPacer::new(50.0, 25);
    assert_eq!(pacer.steps_for(0.0), 0);
    assert_eq!(pacer.steps_for(-1.0), 0);
    assert_eq!(pacer.steps_for(f64::NAN), 0);
    assert_eq!(pacer.accumulated(), 0.0);
}

#[test]
fn test_pacer_set_delay_clears() {
    let mut pacer = StepPacer::new(50.0, 25);
    pacer.steps_for(0.04);
    assert!(pacer.accumulated() > 0.0);
    pacer.set_delay(10.0);
    assert_eq!(pacer.accumulated(), 0.0);
    assert_eq!(pacer.delay_ms(), 10.0);
}

#[test]
fn test_tick_drives_session_until_cap() {
    let mut session = small_session(30);
    assert_eq!(session.tick(1.0), 0, "未开始时 tick 不执行");

    session.start();
    let mut frames = 0;
    while session.state() == TrainState::Running {
        session.tick(0.5);
        frames += 1;
        assert!(frames < 100);
    }
    assert_eq!(session.state(), TrainState::Complete);
    assert_eq!(session.iteration(), 30);
    assert_eq!(session.metrics().len(), 30);
}
