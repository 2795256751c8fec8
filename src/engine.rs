// =============================================================================
// Indicator Engine -- full-suite evaluation over the store's window
// =============================================================================
//
// One orchestration entry point: pull the close-price array from the store,
// compute every indicator over it, write the store's cached scalars back in a
// single transition, and return the full arrays keyed by name.
//
// Every call recomputes from scratch over the current window; there is no
// incremental state carried between calls. Worst-case cost per call is
// bounded by the store's capacity.
// =============================================================================

use std::collections::HashMap;

use tracing::debug;

use crate::config::EngineConfig;
use crate::indicators::{
    calculate_bollinger, calculate_ema, calculate_macd, calculate_rsi, calculate_slope,
    calculate_sma, last_value, IndicatorSeries,
};
use crate::store::PriceSeriesStore;

/// Named indicator arrays from one evaluation, index-aligned with the
/// store's candle sequence.
pub type IndicatorMap = HashMap<String, IndicatorSeries>;

/// Evaluate the full indicator suite with default parameters
/// (SMA 20, EMA 12/26, RSI 14, MACD 12/26/9, Bollinger 20 x 2.0, slope 5).
pub fn evaluate(store: &mut PriceSeriesStore) -> IndicatorMap {
    evaluate_with(store, &EngineConfig::default())
}

/// Evaluate the full indicator suite with the given configuration.
///
/// When the store holds fewer than `config.min_data_points` candles this
/// returns an empty map and leaves the store's cached scalars untouched.
/// Otherwise all three cached scalars (`last_rsi`, `last_moving_average`,
/// `last_slope`) are rewritten together from this evaluation.
///
/// Map keys with default parameters: `sma_20`, `ema_12`, `ema_26`, `rsi_14`,
/// `macd_line`, `signal_line`, `histogram`, `upper_band`, `middle_band`,
/// `lower_band`, `slope_5`. Period-suffixed keys follow the configured
/// periods.
pub fn evaluate_with(store: &mut PriceSeriesStore, config: &EngineConfig) -> IndicatorMap {
    if !store.has_enough_data(config.min_data_points) {
        debug!(
            len = store.len(),
            required = config.min_data_points,
            "skipping evaluation: insufficient candles"
        );
        return HashMap::new();
    }

    let closes = store.closes();

    let sma = calculate_sma(&closes, config.sma_period);
    let ema_fast = calculate_ema(&closes, config.macd_fast);
    let ema_slow = calculate_ema(&closes, config.macd_slow);
    let rsi = calculate_rsi(&closes, config.rsi_period);
    let macd = calculate_macd(&closes, config.macd_fast, config.macd_slow, config.macd_signal);
    let bands = calculate_bollinger(&closes, config.bollinger_period, config.bollinger_k);
    let slope = calculate_slope(&closes, config.slope_period);

    // Cached scalars: one atomic transition, all three together.
    store.set_last_values(last_value(&rsi), last_value(&sma), last_value(&slope));

    let mut map = HashMap::new();
    map.insert(format!("sma_{}", config.sma_period), sma);
    map.insert(format!("ema_{}", config.macd_fast), ema_fast);
    map.insert(format!("ema_{}", config.macd_slow), ema_slow);
    map.insert(format!("rsi_{}", config.rsi_period), rsi);
    map.insert("macd_line".to_string(), macd.macd_line);
    map.insert("signal_line".to_string(), macd.signal_line);
    map.insert("histogram".to_string(), macd.histogram);
    map.insert("upper_band".to_string(), bands.upper);
    map.insert("middle_band".to_string(), bands.middle);
    map.insert("lower_band".to_string(), bands.lower);
    map.insert(format!("slope_{}", config.slope_period), slope);

    map
}
