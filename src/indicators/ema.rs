// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// EMA weights recent values more heavily than the SMA, so it reacts faster
// to new information.
//
// Formula:
//   multiplier = 2 / (period + 1)
//   EMA_t      = (x_t - EMA_{t-1}) * multiplier + EMA_{t-1}
//
// The value at index `period - 1` is seeded with the SMA of the first
// `period` elements, so EMA and SMA share their first defined value.

use super::{undefined, IndicatorSeries};

/// Compute the EMA series for `series` and look-back `period`.
///
/// The output has the same length as the input; indices before `period - 1`
/// are undefined.
///
/// # Edge cases
/// - `period == 0` => all-undefined (division guard)
/// - `series.len() < period` => all-undefined
pub fn calculate_ema(series: &[f64], period: usize) -> IndicatorSeries {
    let mut out = undefined(series.len());
    if period == 0 || series.len() < period {
        return out;
    }

    let multiplier = 2.0 / (period as f64 + 1.0);

    // Seed: SMA of the first `period` values.
    let mut prev = series[..period].iter().sum::<f64>() / period as f64;
    out[period - 1] = Some(prev);

    for i in period..series.len() {
        prev = (series[i] - prev) * multiplier + prev;
        out[i] = Some(prev);
    }

    out
}
