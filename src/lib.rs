// =============================================================================
// pulse-ta -- bounded price-series store + technical indicator engine
// =============================================================================
//
// Ingests a time-ordered stream of OHLCV candles into a capacity-bounded
// store and derives SMA, EMA, RSI, MACD, Bollinger Bands, and a regression
// slope over it. "Not enough history yet" is an explicit per-slot sentinel
// (`None`), never a NaN.
//
// The crate is synchronous and single-threaded; producers and consumers must
// serialize access externally. It performs no network I/O and persists
// nothing (the engine config's JSON load/save is the only file access).
// =============================================================================

// ── Module declarations ──────────────────────────────────────────────────────
pub mod candle;
pub mod config;
pub mod engine;
pub mod indicators;
pub mod store;

// Re-exports for convenient access (e.g. `use pulse_ta::PriceSeriesStore`).
pub use candle::Candle;
pub use config::EngineConfig;
pub use engine::{evaluate, evaluate_with, IndicatorMap};
pub use indicators::IndicatorSeries;
pub use store::{CandleRow, PriceSeriesStore, DEFAULT_CAPACITY};
