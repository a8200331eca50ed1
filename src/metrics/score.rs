//! 回归误差指标

use ndarray::Array1;

fn check_lengths(y_true: &Array1<f64>, y_pred: &Array1<f64>) {
    assert_eq!(
        y_true.len(),
        y_pred.len(),
        "指标计算：真实值与预测值的长度必须一致，得到 {} vs {}",
        y_true.len(),
        y_pred.len()
    );
}

/// 均方误差
///
/// # Panics
/// 如果 `y_true` 与 `y_pred` 长度不一致
pub fn mean_squared_error(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> f64 {
    check_lengths(y_true, y_pred);
    (y_true - y_pred).mapv(|e| e * e).mean().unwrap_or(0.0)
}

/// 平均绝对误差
///
/// # Panics
/// 如果 `y_true` 与 `y_pred` 长度不一致
pub fn mean_absolute_error(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> f64 {
    check_lengths(y_true, y_pred);
    (y_true - y_pred).mapv(f64::abs).mean().unwrap_or(0.0)
}

/// 决定系数 R² = 1 − SS_res/SS_tot
///
/// SS_tot 恰为 0（所有真实值相同）时定义为 0，而不是除以零。
///
/// # Panics
/// 如果 `y_true` 与 `y_pred` 长度不一致
pub fn r2_score(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> f64 {
    check_lengths(y_true, y_pred);
    let mean = match y_true.mean() {
        Some(mean) => mean,
        None => return 0.0,
    };
    let ss_res = (y_true - y_pred).mapv(|e| e * e).sum();
    let ss_tot = y_true.mapv(|y| (y - mean) * (y - mean)).sum();
    if ss_tot == 0.0 {
        0.0
    } else {
        1.0 - ss_res / ss_tot
    }
}
