// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
// Unweighted arithmetic mean over a trailing window:
//   SMA_i = mean(series[i - period + 1 ..= i])       for i >= period - 1
//
// Each window is summed directly rather than via a running sum, so the
// output is exactly the per-window definition with no accumulated drift.

use super::{undefined, IndicatorSeries};

/// Compute the SMA series for `series` and look-back `period`.
///
/// The output has the same length as the input; indices before `period - 1`
/// are undefined.
///
/// # Edge cases
/// - `period == 0` => all-undefined (division guard)
/// - `series.len() < period` => all-undefined
pub fn calculate_sma(series: &[f64], period: usize) -> IndicatorSeries {
    let mut out = undefined(series.len());
    if period == 0 || series.len() < period {
        return out;
    }

    for (i, window) in series.windows(period).enumerate() {
        out[i + period - 1] = Some(window.iter().sum::<f64>() / period as f64);
    }

    out
}
