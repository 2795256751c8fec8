// =============================================================================
// Engine Configuration -- periods and capacity with atomic save
// =============================================================================
//
// Every tunable knob of the store + indicator engine lives here. All fields
// carry `#[serde(default)]` so that adding new fields never breaks loading an
// older config file.
//
// Persistence uses an atomic tmp + rename pattern to prevent corruption on
// crash.
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_max_candles() -> usize {
    1000
}

fn default_min_data_points() -> usize {
    14
}

fn default_sma_period() -> usize {
    20
}

fn default_rsi_period() -> usize {
    14
}

fn default_macd_fast() -> usize {
    12
}

fn default_macd_slow() -> usize {
    26
}

fn default_macd_signal() -> usize {
    9
}

fn default_bollinger_period() -> usize {
    20
}

fn default_bollinger_k() -> f64 {
    2.0
}

fn default_slope_period() -> usize {
    5
}

// =============================================================================
// EngineConfig
// =============================================================================

/// Tunable parameters for the price-series store and indicator engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of candles retained by the store.
    #[serde(default = "default_max_candles")]
    pub max_candles: usize,

    /// Minimum candle count before `evaluate` computes anything.
    #[serde(default = "default_min_data_points")]
    pub min_data_points: usize,

    /// Look-back for the cached simple moving average.
    #[serde(default = "default_sma_period")]
    pub sma_period: usize,

    /// Look-back for RSI (Wilder smoothing).
    #[serde(default = "default_rsi_period")]
    pub rsi_period: usize,

    /// Fast EMA period for MACD.
    #[serde(default = "default_macd_fast")]
    pub macd_fast: usize,

    /// Slow EMA period for MACD.
    #[serde(default = "default_macd_slow")]
    pub macd_slow: usize,

    /// Signal-line EMA period for MACD.
    #[serde(default = "default_macd_signal")]
    pub macd_signal: usize,

    /// Look-back for the Bollinger middle band and window std.
    #[serde(default = "default_bollinger_period")]
    pub bollinger_period: usize,

    /// Band width in standard deviations.
    #[serde(default = "default_bollinger_k")]
    pub bollinger_k: f64,

    /// Look-back for the regression-slope estimator.
    #[serde(default = "default_slope_period")]
    pub slope_period: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_candles: default_max_candles(),
            min_data_points: default_min_data_points(),
            sma_period: default_sma_period(),
            rsi_period: default_rsi_period(),
            macd_fast: default_macd_fast(),
            macd_slow: default_macd_slow(),
            macd_signal: default_macd_signal(),
            bollinger_period: default_bollinger_period(),
            bollinger_k: default_bollinger_k(),
            slope_period: default_slope_period(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file at `path`.
    ///
    /// If the file does not exist, returns an error so the caller can fall
    /// back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read engine config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse engine config from {}", path.display()))?;

        info!(
            path = %path.display(),
            max_candles = config.max_candles,
            "engine config loaded"
        );

        Ok(config)
    }

    /// Persist the current configuration to `path` using an atomic write
    /// (write to `.tmp`, then rename).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content =
            serde_json::to_string_pretty(self).context("failed to serialise engine config")?;

        let tmp_path = path.with_extension("json.tmp");

        std::fs::write(&tmp_path, &content)
            .with_context(|| format!("failed to write tmp config to {}", tmp_path.display()))?;

        std::fs::rename(&tmp_path, path)
            .with_context(|| format!("failed to rename tmp config to {}", path.display()))?;

        info!(path = %path.display(), "engine config saved (atomic)");
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.max_candles, 1000);
        assert_eq!(cfg.min_data_points, 14);
        assert_eq!(cfg.sma_period, 20);
        assert_eq!(cfg.rsi_period, 14);
        assert_eq!(cfg.macd_fast, 12);
        assert_eq!(cfg.macd_slow, 26);
        assert_eq!(cfg.macd_signal, 9);
        assert_eq!(cfg.bollinger_period, 20);
        assert!((cfg.bollinger_k - 2.0).abs() < f64::EPSILON);
        assert_eq!(cfg.slope_period, 5);
    }

    #[test]
    fn deserialise_empty_json_uses_defaults() {
        let cfg: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.max_candles, 1000);
        assert_eq!(cfg.rsi_period, 14);
    }

    #[test]
    fn deserialise_partial_json_fills_defaults() {
        let cfg: EngineConfig =
            serde_json::from_str(r#"{"max_candles": 250, "slope_period": 7}"#).unwrap();
        assert_eq!(cfg.max_candles, 250);
        assert_eq!(cfg.slope_period, 7);
        assert_eq!(cfg.sma_period, 20);
        assert_eq!(cfg.macd_slow, 26);
    }

    #[test]
    fn save_then_load_round_trip() {
        let dir = std::env::temp_dir().join("pulse-ta-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("engine_config.json");

        let mut cfg = EngineConfig::default();
        cfg.max_candles = 500;
        cfg.bollinger_k = 2.5;
        cfg.save(&path).unwrap();

        let loaded = EngineConfig::load(&path).unwrap();
        assert_eq!(loaded.max_candles, 500);
        assert!((loaded.bollinger_k - 2.5).abs() < f64::EPSILON);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn load_missing_file_is_an_error() {
        assert!(EngineConfig::load("/nonexistent/engine_config.json").is_err());
    }
}
