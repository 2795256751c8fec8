// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free array transforms over price series. Every function
// takes an ordered `&[f64]` and returns a series of the *same length*, with
// `None` marking slots before the indicator's warm-up index ("not enough
// history yet"). Undefined is an explicit tagged value, never a NaN smuggled
// through arithmetic -- callers must check for `Some` before using a value.
//
// When the input is shorter than the period the entire output is undefined.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod slope;
pub mod sma;

pub use bollinger::{calculate_bollinger, BollingerSeries};
pub use ema::calculate_ema;
pub use macd::{calculate_macd, MacdSeries};
pub use rsi::{calculate_rsi, current_rsi};
pub use slope::calculate_slope;
pub use sma::calculate_sma;

/// An indicator output: one slot per input element, `None` during warm-up.
pub type IndicatorSeries = Vec<Option<f64>>;

/// An all-undefined series of the given length.
pub(crate) fn undefined(len: usize) -> IndicatorSeries {
    vec![None; len]
}

/// The final element of a series, if it is defined.
///
/// Every indicator here is defined from its warm-up index through to the end
/// of the array, so this is also the last defined value overall.
pub fn last_value(series: &[Option<f64>]) -> Option<f64> {
    series.last().copied().flatten()
}
