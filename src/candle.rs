// =============================================================================
// Candlestick (OHLCV) value type
// =============================================================================
//
// A candle aggregates open / high / low / close / volume for one interval.
// Candles arrive from the exchange-connectivity layer as positional kline
// records `[timestamp_ms, open, high, low, close, volume, ...]`; only the
// first six fields are consumed here. Exchanges encode the numeric fields as
// JSON strings, so every field is coerced from either a JSON number or a
// numeric string.
//
// A candle is never mutated after construction.
// =============================================================================

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A single OHLCV candle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Interval open time, milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(timestamp: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Build a candle from a positional kline record
    /// `[timestamp_ms, open, high, low, close, volume, ...]`.
    ///
    /// The first six fields are consumed by position; any extra fields are
    /// ignored. A record shorter than six fields, or a field that cannot be
    /// coerced to its numeric type, is an error that propagates to the
    /// connectivity layer.
    ///
    /// Shape violations (`low > min(open, close)` etc.) are logged but do not
    /// fail construction; see [`Candle::is_well_formed`].
    pub fn from_record(record: &[serde_json::Value]) -> Result<Self> {
        if record.len() < 6 {
            anyhow::bail!(
                "kline record has {} fields, expected at least 6",
                record.len()
            );
        }

        let candle = Self {
            timestamp: coerce_i64(&record[0], "timestamp")?,
            open: coerce_f64(&record[1], "open")?,
            high: coerce_f64(&record[2], "high")?,
            low: coerce_f64(&record[3], "low")?,
            close: coerce_f64(&record[4], "close")?,
            volume: coerce_f64(&record[5], "volume")?,
        };

        if !candle.is_well_formed() {
            warn!(
                timestamp = candle.timestamp,
                open = candle.open,
                high = candle.high,
                low = candle.low,
                close = candle.close,
                volume = candle.volume,
                "malformed candle accepted (shape invariant violated)"
            );
        }

        Ok(candle)
    }

    /// Check the OHLC shape invariant:
    /// `low <= min(open, close) <= max(open, close) <= high` and
    /// `volume >= 0`.
    ///
    /// Construction never enforces this; callers that want strict input can
    /// reject candles for which this returns `false`.
    pub fn is_well_formed(&self) -> bool {
        self.low <= self.open.min(self.close)
            && self.open.max(self.close) <= self.high
            && self.volume >= 0.0
    }
}

/// Coerce a JSON value into an `f64`. Exchanges send prices and volumes as
/// strings inside kline arrays, so both representations are accepted.
fn coerce_f64(val: &serde_json::Value, name: &str) -> Result<f64> {
    match val {
        serde_json::Value::String(s) => s
            .parse::<f64>()
            .with_context(|| format!("failed to parse {name} as f64: {s}")),
        serde_json::Value::Number(n) => n
            .as_f64()
            .with_context(|| format!("field {name} is not a valid f64")),
        _ => anyhow::bail!("field {name} has unexpected JSON type"),
    }
}

/// Coerce a JSON value into an `i64` (millisecond timestamp field).
fn coerce_i64(val: &serde_json::Value, name: &str) -> Result<i64> {
    match val {
        serde_json::Value::String(s) => s
            .parse::<i64>()
            .with_context(|| format!("failed to parse {name} as i64: {s}")),
        serde_json::Value::Number(n) => n
            .as_i64()
            .with_context(|| format!("field {name} is not a valid i64")),
        _ => anyhow::bail!("field {name} has unexpected JSON type"),
    }
}
