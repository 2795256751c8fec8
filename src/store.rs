// =============================================================================
// PriceSeriesStore -- bounded FIFO buffer of candles + cached scalars
// =============================================================================
//
// Pure storage: a capacity-bounded, insertion-ordered sequence of candles.
// When an append pushes the length past `max_size` the oldest candles are
// evicted, so the store always holds the most recent `max_size` candles in
// arrival order.
//
// The store also carries three cached scalars (last RSI, last moving average,
// last slope). These are derived state, written only by the indicator
// engine's orchestration call and cleared together with the sequence by
// `clear()`; the store itself never computes anything.
//
// No internal locking: append and evaluate must be serialized by the caller
// (single writer, or a mutex around the append + evaluate sequence).
// =============================================================================

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::candle::Candle;

/// Default capacity when none is given.
pub const DEFAULT_CAPACITY: usize = 1000;

/// One row of the tabular export: the raw candle columns plus a derived
/// human-readable UTC time column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleRow {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    /// `timestamp` interpreted as milliseconds since the Unix epoch,
    /// formatted as UTC. Empty when the timestamp is out of chrono's range.
    pub datetime: String,
}

/// Bounded, insertion-ordered candle buffer with cached indicator scalars.
#[derive(Debug, Clone)]
pub struct PriceSeriesStore {
    candles: VecDeque<Candle>,
    max_size: usize,
    last_rsi: Option<f64>,
    last_moving_average: Option<f64>,
    last_slope: Option<f64>,
}

impl Default for PriceSeriesStore {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl PriceSeriesStore {
    /// Create a store that retains at most `max_size` candles.
    pub fn new(max_size: usize) -> Self {
        Self {
            candles: VecDeque::with_capacity(max_size + 1),
            max_size,
            last_rsi: None,
            last_moving_average: None,
            last_slope: None,
        }
    }

    /// Append a candle, evicting from the front when the capacity is
    /// exceeded. Always succeeds.
    pub fn append(&mut self, candle: Candle) {
        self.candles.push_back(candle);
        while self.candles.len() > self.max_size {
            self.candles.pop_front();
        }
    }

    /// Empty the sequence and reset all three cached scalars.
    pub fn clear(&mut self) {
        self.candles.clear();
        self.last_rsi = None;
        self.last_moving_average = None;
        self.last_slope = None;
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.max_size
    }

    /// `true` when at least `n` candles are stored.
    pub fn has_enough_data(&self, n: usize) -> bool {
        self.candles.len() >= n
    }

    /// The most recently appended candle, if any.
    pub fn latest(&self) -> Option<&Candle> {
        self.candles.back()
    }

    /// Candle at `index` (0 = oldest retained).
    pub fn get(&self, index: usize) -> Option<&Candle> {
        self.candles.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candle> {
        self.candles.iter()
    }

    // ── Column accessors (aligned with candle order) ────────────────────

    pub fn closes(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.close).collect()
    }

    pub fn highs(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.high).collect()
    }

    pub fn lows(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.low).collect()
    }

    pub fn opens(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.open).collect()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.volume).collect()
    }

    pub fn timestamps(&self) -> Vec<i64> {
        self.candles.iter().map(|c| c.timestamp).collect()
    }

    // ── Cached scalars ──────────────────────────────────────────────────

    /// RSI from the most recent evaluation, if it was defined.
    pub fn last_rsi(&self) -> Option<f64> {
        self.last_rsi
    }

    /// Moving average (SMA) from the most recent evaluation.
    pub fn last_moving_average(&self) -> Option<f64> {
        self.last_moving_average
    }

    /// Regression slope from the most recent evaluation.
    pub fn last_slope(&self) -> Option<f64> {
        self.last_slope
    }

    /// Write all three cached scalars in one transition. Only the indicator
    /// engine calls this; it never updates a subset.
    pub(crate) fn set_last_values(
        &mut self,
        rsi: Option<f64>,
        moving_average: Option<f64>,
        slope: Option<f64>,
    ) {
        self.last_rsi = rsi;
        self.last_moving_average = moving_average;
        self.last_slope = slope;
    }

    // ── Tabular export ──────────────────────────────────────────────────

    /// Materialize the full candle sequence as export rows with a derived
    /// UTC `datetime` column. Empty when the store is empty.
    pub fn to_table(&self) -> Vec<CandleRow> {
        self.candles
            .iter()
            .map(|c| CandleRow {
                timestamp: c.timestamp,
                open: c.open,
                high: c.high,
                low: c.low,
                close: c.close,
                volume: c.volume,
                datetime: format_datetime(c.timestamp),
            })
            .collect()
    }
}

/// Render a millisecond epoch timestamp as a UTC datetime string.
fn format_datetime(timestamp_ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S%.3f").to_string())
        .unwrap_or_default()
}
