//! Indicator trait and the per-window SMA values container.
//!
//! Indicators are pure functions: close history in, aligned series out.
//! Every window is computed once per request from the same close vector;
//! the normalizer never runs twice.

use super::sma::Sma;
use crate::domain::Series;
use crate::error::SmaError;
use std::collections::BTreeMap;

/// Optional values aligned index-for-index with the input series.
///
/// `None` marks positions inside the warmup where no value exists.
pub type SmaSeries = Vec<Option<f64>>;

/// Trait for indicators.
///
/// # Look-ahead guard
/// No output at index t may depend on input from index t+1 or later.
pub trait Indicator: Send + Sync {
    /// Human-readable name (e.g., "sma_20").
    fn name(&self) -> &str;

    /// Number of leading positions with no value.
    fn lookback(&self) -> usize;

    /// Compute the indicator for the entire input.
    ///
    /// Returns a series of the same length as `values`. Empty input yields
    /// empty output, never an error.
    fn compute(&self, values: &[f64]) -> SmaSeries;
}

/// SMA series for several windows over one close vector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SmaValues {
    series: BTreeMap<usize, SmaSeries>,
}

impl SmaValues {
    /// Compute an SMA for every window over `closes`.
    ///
    /// All windows are validated before any work is done, so a bad window
    /// never yields a partially filled container.
    pub fn compute(closes: &[f64], windows: &[usize]) -> Result<Self, SmaError> {
        let smas = windows
            .iter()
            .map(|&w| Sma::new(w))
            .collect::<Result<Vec<_>, _>>()?;

        let mut values = Self::default();
        for sma in &smas {
            let series = sma.compute(closes);
            log::trace!(
                "{}: {} of {} positions defined",
                sma.name(),
                series.len().saturating_sub(sma.lookback()),
                series.len()
            );
            values.series.insert(sma.window(), series);
        }
        Ok(values)
    }

    /// Compute over a normalized series.
    pub fn for_series(series: &Series, windows: &[usize]) -> Result<Self, SmaError> {
        Self::compute(&series.closes(), windows)
    }

    /// Value for `window` at `index`; `None` if absent, out of bounds, or in warmup.
    pub fn get(&self, window: usize, index: usize) -> Option<f64> {
        self.series
            .get(&window)
            .and_then(|s| s.get(index).copied().flatten())
    }

    /// Full series for a window.
    pub fn get_series(&self, window: usize) -> Option<&[Option<f64>]> {
        self.series.get(&window).map(|s| s.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_every_window_once() {
        let closes: Vec<f64> = (1..=12).map(|v| v as f64).collect();
        let values = SmaValues::compute(&closes, &[2, 5, 10]).unwrap();

        for w in [2, 5, 10] {
            assert_eq!(values.get_series(w).map(|s| s.len()), Some(12));
        }
        assert_eq!(values.get(2, 1), Some(1.5));
        assert_eq!(values.get(5, 3), None);
        assert_eq!(values.get(10, 9), Some(5.5));
    }

    #[test]
    fn empty_closes_give_empty_series_per_window() {
        let values = SmaValues::compute(&[], &[10, 20, 30, 40, 50, 100]).unwrap();
        for w in [10, 20, 30, 40, 50, 100] {
            assert_eq!(values.get_series(w).map(|s| s.len()), Some(0));
        }
    }

    #[test]
    fn zero_window_rejects_whole_set() {
        let result = SmaValues::compute(&[1.0, 2.0, 3.0], &[2, 0, 3]);
        assert!(matches!(result, Err(SmaError::InvalidWindow { window: 0 })));
    }

    #[test]
    fn missing_window_and_out_of_bounds_are_none() {
        let values = SmaValues::compute(&[1.0, 2.0], &[1]).unwrap();
        assert_eq!(values.get(7, 0), None);
        assert_eq!(values.get(1, 2), None);
        assert!(values.get_series(7).is_none());
    }
}
