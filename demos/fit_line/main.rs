//! # 梯度下降拟合直线示例（无界面）
//!
//! 模拟渲染循环驱动训练会话：
//! - 固定种子生成 y = 1.5x + 2 的带噪数据
//! - 以 60 帧/秒调用 `tick`，中途切换优化器
//! - 结束后打印与最小二乘解的对比，并导出训练历史
//!
//! ## 运行
//! ```bash
//! RUST_LOG=debug cargo run --example fit_line
//! ```

use linreg_descent::data::{DatasetKind, GeneratorConfig};
use linreg_descent::export::{export_history_csv, export_metrics_json};
use linreg_descent::optimizer::OptimizerKind;
use linreg_descent::{Command, Result, SessionConfig, TrainState, TrainingSession};

const FRAME_DT: f64 = 1.0 / 60.0;

fn main() -> Result<()> {
    env_logger::init();
    println!("=== 梯度下降拟合直线示例 ===\n");

    // 1. 会话配置（固定种子确保可复现）
    let config = SessionConfig::default()
        .generator(GeneratorConfig::preset(DatasetKind::Linear).seed(42))
        .learning_rate(0.01)
        .max_iterations(500)
        .delay_ms(5.0);
    let mut session = TrainingSession::new(config)?;

    let best = session.optimal_params();
    println!("数据: {} 个点", session.model().len());
    println!(
        "最小二乘解: slope={:.4}, intercept={:.4}\n",
        best.slope, best.intercept
    );

    // 2. 帧循环
    session.apply(Command::Start)?;
    let mut frame = 0usize;
    while session.state() == TrainState::Running {
        session.tick(FRAME_DT);
        frame += 1;

        // 前 200 次迭代用 SGD，之后换成 Adam
        if session.iteration() >= 200 && session.optimizer_kind() == OptimizerKind::Sgd {
            session.apply(Command::SwitchOptimizer(OptimizerKind::Adam))?;
        }

        if frame % 30 == 0 {
            let s = session.snapshot();
            let current = session.metrics().get_current();
            println!(
                "帧 {frame:>4} | 迭代 {:>3}/{} | {} | slope={:.4}, intercept={:.4} | MSE={:.4}, R²={:.4}",
                s.iteration, s.max_iterations, s.optimizer, s.slope, s.intercept, current.mse, current.r2
            );
        }
    }

    // 3. 结果
    let params = session.params();
    println!(
        "\n训练结束（{}）: slope={:.4}, intercept={:.4}，距最小二乘解 {:.4}",
        session.state(),
        params.slope,
        params.intercept,
        params.distance_to(&best)
    );

    // 4. 导出
    let out_dir = std::env::temp_dir();
    let history_path = out_dir.join("fit_line_history.csv");
    if export_history_csv(session.metrics().records(), &history_path)? {
        println!("训练历史已写入 {}", history_path.display());
    }
    if let Some(summary) = session.metrics().summary() {
        let summary_path = out_dir.join("fit_line_metrics.json");
        export_metrics_json(&summary, &summary_path)?;
        println!(
            "指标摘要已写入 {}（最小 MSE {:.4}）",
            summary_path.display(),
            summary.min_mse
        );
    }
    session.export_state().save_json(out_dir.join("fit_line_state.json"))?;

    Ok(())
}
