/*
 * @Author       : 老董
 * @Date         : 2026-10-16 10:05:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-16 15:36:00
 * @Description  : 直线拟合端到端集成测试
 *
 * 固定种子生成 y = 1.5x + 2 的带噪数据，从 (0, 5) 出发训练到迭代上限，
 * 验证误差下降、参数向真实直线靠拢。
 */

use approx::assert_abs_diff_eq;
use linreg_descent::data::{DatasetKind, GeneratorConfig};
use linreg_descent::model::LineParams;
use linreg_descent::optimizer::OptimizerKind;
use linreg_descent::{SessionConfig, TrainState, TrainingSession};

const TRUE_LINE: LineParams = LineParams::new(1.5, 2.0);

fn default_config() -> SessionConfig {
    SessionConfig::default()
        .generator(
            GeneratorConfig::preset(DatasetKind::Linear)
                .n_points(50)
                .noise_std(1.5)
                .seed(42),
        )
        .learning_rate(0.01)
        .max_iterations(500)
        .initial_params(0.0, 5.0)
}

#[test]
fn test_sgd_fits_linear_data() {
    let mut session = TrainingSession::new(default_config()).unwrap();
    let initial_mse = session.current_mse();
    let initial_distance = session.params().distance_to(&TRUE_LINE);

    assert_eq!(session.run_to_completion(), 500);
    assert_eq!(session.state(), TrainState::Complete);
    assert_eq!(session.iteration(), 500);
    assert_eq!(session.metrics().len(), 500);

    let summary = session.metrics().summary().unwrap();
    assert!(summary.final_mse < initial_mse);
    assert!(summary.min_mse <= summary.final_mse);
    assert!(summary.final_r2 > 0.5, "R² = {}", summary.final_r2);
    assert!(session.params().distance_to(&TRUE_LINE) < initial_distance);
}

#[test]
fn test_every_optimizer_reduces_error() {
    for kind in OptimizerKind::ALL {
        let mut session = TrainingSession::new(default_config().optimizer(kind)).unwrap();
        let initial_mse = session.current_mse();
        session.run_to_completion();

        let final_mse = session.metrics().get_current().mse;
        assert!(
            final_mse < initial_mse,
            "{kind}: 最终 MSE {final_mse} 未低于初始 {initial_mse}"
        );
        assert!(final_mse.is_finite());
    }
}

#[test]
fn test_gradient_descent_approaches_least_squares() {
    let mut session =
        TrainingSession::new(default_config().max_iterations(20_000).learning_rate(0.02)).unwrap();
    session.run_to_completion();

    let best = session.optimal_params();
    assert_abs_diff_eq!(session.params().slope, best.slope, epsilon = 1e-4);
    assert_abs_diff_eq!(session.params().intercept, best.intercept, epsilon = 1e-4);
}

#[test]
fn test_same_seed_same_trajectory() {
    let mut a = TrainingSession::new(default_config().optimizer(OptimizerKind::Adam)).unwrap();
    let mut b = TrainingSession::new(default_config().optimizer(OptimizerKind::Adam)).unwrap();
    a.run_to_completion();
    b.run_to_completion();
    assert_eq!(a.params(), b.params());
    assert_eq!(a.metrics().records(), b.metrics().records());
}
