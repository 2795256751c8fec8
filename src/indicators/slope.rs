// =============================================================================
// Linear-Regression Slope
// =============================================================================
//
// For each trailing window of `period` points, fit an ordinary least-squares
// line to (x = 0..period-1, y = window) and emit the slope coefficient:
//
//   slope = sum((x - mean_x) * (y - mean_y)) / sum((x - mean_x)^2)
//
// A trend-direction estimator, not a trading signal by itself.

use super::{undefined, IndicatorSeries};

/// Compute the OLS slope series for `series` over trailing windows of
/// `period` points.
///
/// Indices before `period - 1` are undefined.
///
/// # Edge cases
/// - `period < 2` => all-undefined (a one-point fit has no slope)
/// - `series.len() < period` => all-undefined
pub fn calculate_slope(series: &[f64], period: usize) -> IndicatorSeries {
    let mut out = undefined(series.len());
    if period < 2 || series.len() < period {
        return out;
    }

    // x = 0..period-1 is the same for every window.
    let mean_x = (period - 1) as f64 / 2.0;
    let denominator: f64 = (0..period)
        .map(|x| (x as f64 - mean_x).powi(2))
        .sum();

    for (i, window) in series.windows(period).enumerate() {
        let mean_y = window.iter().sum::<f64>() / period as f64;
        let numerator: f64 = window
            .iter()
            .enumerate()
            .map(|(x, &y)| (x as f64 - mean_x) * (y - mean_y))
            .sum();
        out[i + period - 1] = Some(numerator / denominator);
    }

    out
}
