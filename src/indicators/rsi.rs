// =============================================================================
// Relative Strength Index (RSI) -- Wilder's Smoothing
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes to gauge
// overbought / oversold conditions. Output is bounded to [0, 100].
//
// Step 1 -- First differences of the series (delta[0] = 0 placeholder so the
//          gain/loss arrays stay index-aligned with the input).
// Step 2 -- Seed average gain / average loss at index `period` with the
//          simple mean of the first `period` gains / losses.
// Step 3 -- Wilder's exponential smoothing:
//            avg_gain = (prev_avg_gain * (period - 1) + gain) / period
//            avg_loss = (prev_avg_loss * (period - 1) + loss) / period
// Step 4 -- RS  = avg_gain / avg_loss
//          RSI = 100 - 100 / (1 + RS)
//
// Division-by-zero policy (applied uniformly, seed and smoothed values):
//   avg_loss == 0, avg_gain > 0   =>  RSI = 100  (all gains)
//   avg_loss == 0, avg_gain == 0  =>  RSI = 50   (no movement, neutral)
//
// Thresholds:  RSI > 70 => OVERBOUGHT,  RSI < 30 => OVERSOLD.
// =============================================================================

use super::{last_value, undefined, IndicatorSeries};

/// Compute the RSI series for `series` and look-back `period`.
///
/// The output has the same length as the input; indices before `period` are
/// undefined (the first `period` deltas are consumed to seed the averages).
///
/// # Edge cases
/// - `period == 0` => all-undefined
/// - `series.len() <= period` => all-undefined (need `period` deltas)
/// - Zero average loss is resolved by explicit policy (100 / 50), never by
///   letting the division produce an infinity.
pub fn calculate_rsi(series: &[f64], period: usize) -> IndicatorSeries {
    let mut out = undefined(series.len());
    if period == 0 || series.len() <= period {
        return out;
    }

    // First differences, with a leading zero so gains[i] pairs with series[i].
    let mut gains = vec![0.0; series.len()];
    let mut losses = vec![0.0; series.len()];
    for i in 1..series.len() {
        let delta = series[i] - series[i - 1];
        if delta > 0.0 {
            gains[i] = delta;
        } else {
            losses[i] = -delta;
        }
    }

    let period_f = period as f64;

    // Seed: simple mean of the first `period` gains / losses.
    let mut avg_gain = gains[1..=period].iter().sum::<f64>() / period_f;
    let mut avg_loss = losses[1..=period].iter().sum::<f64>() / period_f;
    out[period] = Some(rsi_from_averages(avg_gain, avg_loss));

    // Wilder's smoothing for subsequent values.
    for i in period + 1..series.len() {
        avg_gain = (avg_gain * (period_f - 1.0) + gains[i]) / period_f;
        avg_loss = (avg_loss * (period_f - 1.0) + losses[i]) / period_f;
        out[i] = Some(rsi_from_averages(avg_gain, avg_loss));
    }

    out
}

/// Convenience: the most recent RSI value together with a human-readable
/// label. `None` when there is insufficient data.
pub fn current_rsi(series: &[f64], period: usize) -> Option<(f64, &'static str)> {
    let value = last_value(&calculate_rsi(series, period))?;

    let label = if value >= 70.0 {
        "OVERBOUGHT"
    } else if value <= 30.0 {
        "OVERSOLD"
    } else {
        "NEUTRAL"
    };

    Some((value, label))
}

/// Convert average gain / average loss into an RSI value in [0, 100].
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 && avg_gain == 0.0 {
        50.0 // No movement at all -- neutral.
    } else if avg_loss == 0.0 {
        100.0 // All gains, no losses.
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - 100.0 / (1.0 + rs)
    }
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn defined(series: &IndicatorSeries) -> Vec<f64> {
        series.iter().copied().flatten().collect()
    }

    #[test]
    fn rsi_empty_input() {
        assert!(calculate_rsi(&[], 14).is_empty());
    }

    #[test]
    fn rsi_period_zero() {
        assert_eq!(calculate_rsi(&[1.0, 2.0, 3.0], 0), vec![None, None, None]);
    }

    #[test]
    fn rsi_insufficient_data() {
        // Need period+1 elements (period deltas). 14 closes => 13 deltas < 14.
        let series: Vec<f64> = (1..=14).map(|x| x as f64).collect();
        assert!(calculate_rsi(&series, 14).iter().all(Option::is_none));
    }

    #[test]
    fn rsi_warm_up_boundary() {
        // Exactly period+1 elements: one defined value, at index `period`.
        let series: Vec<f64> = (1..=15).map(|x| x as f64).collect();
        let out = calculate_rsi(&series, 14);
        assert!(out[..14].iter().all(Option::is_none));
        assert!(out[14].is_some());
    }

    #[test]
    fn rsi_all_gains_is_100() {
        let series: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        for v in defined(&calculate_rsi(&series, 14)) {
            assert!((v - 100.0).abs() < 1e-10, "expected 100.0, got {v}");
        }
    }

    #[test]
    fn rsi_all_losses_is_0() {
        let series: Vec<f64> = (1..=30).rev().map(|x| x as f64).collect();
        for v in defined(&calculate_rsi(&series, 14)) {
            assert!(v.abs() < 1e-10, "expected 0.0, got {v}");
        }
    }

    #[test]
    fn rsi_flat_market_is_50() {
        let series = vec![100.0; 30];
        let values = defined(&calculate_rsi(&series, 14));
        assert!(!values.is_empty());
        for v in values {
            assert!((v - 50.0).abs() < 1e-10, "expected 50.0, got {v}");
        }
    }

    #[test]
    fn rsi_always_in_range() {
        let series = vec![
            44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08,
            45.89, 46.03, 44.18, 44.22, 44.57, 43.42, 42.66, 43.13,
        ];
        for v in defined(&calculate_rsi(&series, 14)) {
            assert!((0.0..=100.0).contains(&v), "RSI {v} out of range");
        }
    }

    #[test]
    fn current_rsi_labels() {
        let rising: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        let (val, label) = current_rsi(&rising, 14).unwrap();
        assert!((val - 100.0).abs() < 1e-10);
        assert_eq!(label, "OVERBOUGHT");

        let falling: Vec<f64> = (1..=30).rev().map(|x| x as f64).collect();
        let (val, label) = current_rsi(&falling, 14).unwrap();
        assert!(val.abs() < 1e-10);
        assert_eq!(label, "OVERSOLD");

        let flat = vec![100.0; 30];
        let (val, label) = current_rsi(&flat, 14).unwrap();
        assert!((val - 50.0).abs() < 1e-10);
        assert_eq!(label, "NEUTRAL");
    }

    #[test]
    fn current_rsi_none_on_short_input() {
        assert!(current_rsi(&[], 14).is_none());
        assert!(current_rsi(&[1.0, 2.0], 14).is_none());
    }
}
