// =============================================================================
// Moving Average Convergence Divergence (MACD)
// =============================================================================
//
// Three index-aligned series:
//   macd_line   = EMA(series, fast) - EMA(series, slow)   (elementwise)
//   signal_line = EMA(macd_line, signal)   -- warm-up counted from the first
//                 defined macd_line entry, not from index 0
//   histogram   = macd_line - signal_line  (elementwise)
//
// Undefined propagates through every subtraction: a slot is defined only when
// both operands are.

use super::{calculate_ema, undefined, IndicatorSeries};

/// The MACD triple, each series aligned with the input.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    pub macd_line: IndicatorSeries,
    pub signal_line: IndicatorSeries,
    pub histogram: IndicatorSeries,
}

/// Compute MACD for `series` with the given fast / slow / signal periods.
///
/// With the conventional (12, 26, 9) parameters the macd line is defined from
/// index `slow - 1` and the signal line (and histogram) from index
/// `slow + signal - 2`.
pub fn calculate_macd(
    series: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> MacdSeries {
    let fast_ema = calculate_ema(series, fast_period);
    let slow_ema = calculate_ema(series, slow_period);

    let macd_line = sub_elementwise(&fast_ema, &slow_ema);
    let signal_line = ema_over_defined(&macd_line, signal_period);
    let histogram = sub_elementwise(&macd_line, &signal_line);

    MacdSeries {
        macd_line,
        signal_line,
        histogram,
    }
}

/// Elementwise `a - b`; a slot is defined only when both operands are.
fn sub_elementwise(a: &[Option<f64>], b: &[Option<f64>]) -> IndicatorSeries {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| match (x, y) {
            (Some(x), Some(y)) => Some(x - y),
            _ => None,
        })
        .collect()
}

/// EMA over a partially-defined series: the defined suffix is treated as the
/// input, and results are mapped back to their original indices. Slots before
/// the first defined entry stay undefined.
fn ema_over_defined(series: &[Option<f64>], period: usize) -> IndicatorSeries {
    let mut out = undefined(series.len());

    if let Some(start) = series.iter().position(Option::is_some) {
        let values: Vec<f64> = series[start..].iter().copied().flatten().collect();
        for (i, v) in calculate_ema(&values, period).into_iter().enumerate() {
            out[start + i] = v;
        }
    }

    out
}
