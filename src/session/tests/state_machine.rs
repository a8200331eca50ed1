/*
 * @Author       : 老董
 * @Date         : 2026-10-16 10:20:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-16 10:20:00
 * @Description  : 会话状态机测试
 */

use approx::assert_abs_diff_eq;

use super::small_session;
use crate::model::LineParams;
use crate::session::{DEFAULT_INITIAL_PARAMS, TrainState};

#[test]
fn test_new_session_is_idle() {
    let session = small_session(10);
    assert_eq!(session.state(), TrainState::Idle);
    assert_eq!(session.iteration(), 0);
    assert!(session.metrics().is_empty());
    assert_eq!(session.params(), DEFAULT_INITIAL_PARAMS);
}

#[test]
fn test_start_pause_transitions() {
    let mut session = small_session(10);
    session.start();
    assert_eq!(session.state(), TrainState::Running);
    assert!(session.is_running());

    session.pause();
    assert_eq!(session.state(), TrainState::Paused);

    session.start();
    assert_eq!(session.state(), TrainState::Running);
}

#[test]
fn test_pause_when_idle_is_noop() {
    let mut session = small_session(10);
    session.pause();
    assert_eq!(session.state(), TrainState::Idle);
}

#[test]
fn test_step_once_from_any_state_pauses() {
    let mut session = small_session(10);

    // Idle → 一步 → Paused
    assert!(session.step());
    assert_eq!(session.state(), TrainState::Paused);
    assert_eq!(session.iteration(), 1);
    assert_eq!(session.metrics().len(), 1);

    // Running → 一步 → Paused
    session.start();
    assert!(session.step());
    assert_eq!(session.state(), TrainState::Paused);
    assert_eq!(session.iteration(), 2);
    assert_eq!(session.metrics().len(), 2);
}

#[test]
fn test_step_records_metrics_for_updated_line() {
    let mut session = small_session(10);
    session.step();

    let record = session.metrics().records()[0];
    assert_eq!(record.iteration, 1);
    assert_abs_diff_eq!(record.mse, session.current_mse(), epsilon = 1e-12);
}

#[test]
fn test_advance_only_when_running() {
    let mut session = small_session(10);
    assert_eq!(session.advance(3), 0);
    assert_eq!(session.iteration(), 0);

    session.start();
    assert_eq!(session.advance(3), 3);
    assert_eq!(session.iteration(), 3);
    assert_eq!(session.metrics().len(), 3);
    assert_eq!(session.state(), TrainState::Running);
}

#[test]
fn test_advance_stops_at_cap() {
    let mut session = small_session(5);
    session.start();
    assert_eq!(session.advance(100), 5);
    assert_eq!(session.iteration(), 5);
    assert_eq!(session.metrics().len(), 5);
    assert_eq!(session.state(), TrainState::Complete);
}

#[test]
fn test_complete_rejects_further_steps() {
    let mut session = small_session(3);
    assert_eq!(session.run_to_completion(), 3);
    assert_eq!(session.state(), TrainState::Complete);
    let params = session.params();

    // start 为空操作
    session.start();
    assert_eq!(session.state(), TrainState::Complete);
    assert_eq!(session.advance(10), 0);
    assert_eq!(session.tick(1.0), 0);

    // step 为空操作
    assert!(!session.step());
    assert_eq!(session.state(), TrainState::Complete);
    assert_eq!(session.iteration(), 3);
    assert_eq!(session.metrics().len(), 3);
    assert_eq!(session.params(), params);
}

#[test]
fn test_step_reaching_cap_completes() {
    let mut session = small_session(2);
    session.step();
    assert_eq!(session.state(), TrainState::Paused);
    session.step();
    assert_eq!(session.state(), TrainState::Complete);
}

#[test]
fn test_reset_while_running() {
    let mut session = small_session(50);
    session.start();
    session.advance(7);
    assert_eq!(session.state(), TrainState::Running);

    session.reset();
    assert_eq!(session.state(), TrainState::Idle);
    assert_eq!(session.iteration(), 0);
    assert!(session.metrics().is_empty());
    assert_eq!(session.params(), DEFAULT_INITIAL_PARAMS);
}

#[test]
fn test_reset_after_complete_allows_training_again() {
    let mut session = small_session(4);
    session.run_to_completion();
    session.reset();

    session.start();
    assert_eq!(session.state(), TrainState::Running);
    assert_eq!(session.advance(2), 2);
}

#[test]
fn test_metrics_length_matches_iteration() {
    let mut session = small_session(30);
    session.step();
    session.start();
    session.advance(10);
    session.pause();
    session.step();
    assert_eq!(session.metrics().len(), session.iteration());
    assert_eq!(session.metrics().current_iteration(), session.iteration());
}

#[test]
fn test_repeated_single_steps_equal_continuous_run() {
    // 逐步调用与连续运行结果一致
    let mut stepped = small_session(25);
    for _ in 0..25 {
        stepped.step();
    }
    let mut continuous = small_session(25);
    continuous.run_to_completion();

    assert_eq!(stepped.params(), continuous.params());
    assert_eq!(stepped.metrics().records(), continuous.metrics().records());
    assert_ne!(stepped.params(), LineParams::new(0.0, 5.0));
}
