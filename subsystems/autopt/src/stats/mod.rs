//! # Series Statistics
//!
//! Small, allocation-free helpers over `f64` slices. Every function is
//! total: empty or degenerate input yields `0.0`, never NaN.

use crate::math;

/// Neumaier-compensated sum.
///
/// Repeated values sum to the correctly rounded total, so the mean of a
/// constant window is that constant.
pub fn sum(values: &[f64]) -> f64 {
    let mut total = 0.0;
    let mut compensation = 0.0;
    for &v in values {
        let t = total + v;
        if math::abs(total) >= math::abs(v) {
            compensation += (total - t) + v;
        } else {
            compensation += (v - t) + total;
        }
        total = t;
    }
    total + compensation
}

/// Arithmetic mean, `0.0` for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    math::finite_or(sum(values) / values.len() as f64, 0.0)
}

/// Population standard deviation, `0.0` for fewer than two values
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    math::finite_or(math::sqrt(math::max(variance, 0.0)), 0.0)
}

/// Least-squares slope of `values` against their index (0, 1, 2, ...).
///
/// `0.0` for fewer than two points.
pub fn slope(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }

    let x_mean = (n - 1) as f64 / 2.0;
    let y_mean = mean(values);

    let (num, den) = values
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(num, den), (i, y)| {
            let dx = i as f64 - x_mean;
            (num + dx * (y - y_mean), den + dx * dx)
        });

    if den <= f64::EPSILON {
        0.0
    } else {
        math::finite_or(num / den, 0.0)
    }
}
