// =============================================================================
// Bollinger Bands
// =============================================================================
//
// A middle band (SMA) flanked by bands at +/- `k` standard deviations:
//   middle_i = SMA(series, period)_i
//   std_i    = sample standard deviation of series[i-period+1 ..= i]
//              (divisor `period - 1`, not `period`)
//   upper_i  = middle_i + k * std_i
//   lower_i  = middle_i - k * std_i
//
// Wherever defined, upper >= middle >= lower (for k >= 0).

use super::{calculate_sma, undefined, IndicatorSeries};

/// The Bollinger triple, each series aligned with the input.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerSeries {
    pub upper: IndicatorSeries,
    pub middle: IndicatorSeries,
    pub lower: IndicatorSeries,
}

/// Compute Bollinger Bands for `series` with the given `period` and band
/// width `k` (in standard deviations).
///
/// Indices before `period - 1` are undefined.
///
/// # Edge cases
/// - `period < 2` => all-undefined (sample std needs at least two points)
/// - `series.len() < period` => all-undefined
pub fn calculate_bollinger(series: &[f64], period: usize, k: f64) -> BollingerSeries {
    let len = series.len();
    if period < 2 || len < period {
        return BollingerSeries {
            upper: undefined(len),
            middle: undefined(len),
            lower: undefined(len),
        };
    }

    let middle = calculate_sma(series, period);
    let mut upper = undefined(len);
    let mut lower = undefined(len);

    for (i, window) in series.windows(period).enumerate() {
        let idx = i + period - 1;
        // The window mean is exactly the middle band at this index.
        let mean = match middle[idx] {
            Some(m) => m,
            None => continue,
        };
        let variance = window.iter().map(|x| (x - mean).powi(2)).sum::<f64>()
            / (period - 1) as f64;
        let std_dev = variance.sqrt();

        upper[idx] = Some(mean + k * std_dev);
        lower[idx] = Some(mean - k * std_dev);
    }

    BollingerSeries {
        upper,
        middle,
        lower,
    }
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bollinger_insufficient_data() {
        let bb = calculate_bollinger(&[1.0, 2.0, 3.0], 20, 2.0);
        assert!(bb.upper.iter().all(Option::is_none));
        assert!(bb.middle.iter().all(Option::is_none));
        assert!(bb.lower.iter().all(Option::is_none));
    }

    #[test]
    fn bollinger_degenerate_period() {
        let series = vec![1.0, 2.0, 3.0, 4.0];
        for period in [0, 1] {
            let bb = calculate_bollinger(&series, period, 2.0);
            assert!(bb.upper.iter().all(Option::is_none));
        }
    }

    #[test]
    fn bollinger_band_ordering() {
        let series: Vec<f64> = (0..40)
            .map(|i| 100.0 + (i as f64 * 0.9).sin() * 3.0)
            .collect();
        let bb = calculate_bollinger(&series, 20, 2.0);
        let mut seen = 0;
        for i in 0..series.len() {
            if let (Some(u), Some(m), Some(l)) = (bb.upper[i], bb.middle[i], bb.lower[i]) {
                assert!(u >= m, "upper {u} < middle {m} at {i}");
                assert!(m >= l, "middle {m} < lower {l} at {i}");
                seen += 1;
            } else {
                assert!(bb.upper[i].is_none() && bb.lower[i].is_none());
            }
        }
        assert_eq!(seen, series.len() - 19);
    }

    #[test]
    fn bollinger_uses_sample_std() {
        // Window [1,2,3,4]: mean 2.5, sample variance = (2.25+0.25+0.25+2.25)/3
        // = 5/3, sample std = sqrt(5/3).
        let series = vec![1.0, 2.0, 3.0, 4.0];
        let bb = calculate_bollinger(&series, 4, 2.0);
        let std = (5.0_f64 / 3.0).sqrt();
        assert!((bb.middle[3].unwrap() - 2.5).abs() < 1e-12);
        assert!((bb.upper[3].unwrap() - (2.5 + 2.0 * std)).abs() < 1e-12);
        assert!((bb.lower[3].unwrap() - (2.5 - 2.0 * std)).abs() < 1e-12);
    }

    #[test]
    fn bollinger_flat_series_collapses() {
        let series = vec![100.0; 25];
        let bb = calculate_bollinger(&series, 20, 2.0);
        for i in 19..25 {
            assert!((bb.upper[i].unwrap() - 100.0).abs() < 1e-12);
            assert!((bb.middle[i].unwrap() - 100.0).abs() < 1e-12);
            assert!((bb.lower[i].unwrap() - 100.0).abs() < 1e-12);
        }
    }

    #[test]
    fn bollinger_middle_matches_sma() {
        let series: Vec<f64> = (0..30).map(|i| (i * i % 13) as f64).collect();
        let bb = calculate_bollinger(&series, 20, 2.0);
        assert_eq!(bb.middle, calculate_sma(&series, 20));
    }
}
