//! Simple Moving Average (SMA).
//!
//! Rolling mean of close prices over a lookback window.
//! Lookback: window - 1 (first defined value at index window-1).

use super::indicator::{Indicator, SmaSeries};
use crate::error::SmaError;

#[derive(Debug, Clone)]
pub struct Sma {
    window: usize,
    name: String,
}

impl Sma {
    pub fn new(window: usize) -> Result<Self, SmaError> {
        if window == 0 {
            return Err(SmaError::InvalidWindow { window });
        }
        Ok(Self {
            window,
            name: format!("sma_{window}"),
        })
    }

    pub fn window(&self) -> usize {
        self.window
    }
}

impl Indicator for Sma {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.window - 1
    }

    fn compute(&self, values: &[f64]) -> SmaSeries {
        let n = values.len();
        let mut result = vec![None; n];

        let first = self.lookback();
        if n <= first {
            return result;
        }

        let divisor = self.window as f64;

        // Initial window sum
        let mut sum: f64 = values[..self.window].iter().sum();
        result[first] = Some(sum / divisor);

        // Roll the window forward: drop the leaving value, add the entering one.
        for i in self.window..n {
            sum = sum - values[i - self.window] + values[i];
            result[i] = Some(sum / divisor);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn sma_5_basic() {
        let closes = [10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0];
        let result = Sma::new(5).unwrap().compute(&closes);

        assert_eq!(result.len(), 7);
        for (i, v) in result.iter().enumerate().take(4) {
            assert!(v.is_none(), "expected no value at index {i}");
        }
        // SMA[4] = mean(10,11,12,13,14) = 12.0
        assert_approx(result[4].unwrap(), 12.0, DEFAULT_EPSILON);
        // SMA[5] = mean(11,12,13,14,15) = 13.0
        assert_approx(result[5].unwrap(), 13.0, DEFAULT_EPSILON);
        // SMA[6] = mean(12,13,14,15,16) = 14.0
        assert_approx(result[6].unwrap(), 14.0, DEFAULT_EPSILON);
    }

    #[test]
    fn sma_2_three_points() {
        let result = Sma::new(2).unwrap().compute(&[10.0, 20.0, 30.0]);
        assert_eq!(result, vec![None, Some(15.0), Some(25.0)]);
    }

    #[test]
    fn sma_1_is_close() {
        let closes = [100.0, 200.5, 300.25];
        let result = Sma::new(1).unwrap().compute(&closes);
        assert_eq!(result, vec![Some(100.0), Some(200.5), Some(300.25)]);
    }

    #[test]
    fn sma_window_equals_length() {
        let closes = [2.0, 4.0, 6.0, 8.0];
        let result = Sma::new(4).unwrap().compute(&closes);
        assert_eq!(result.iter().filter(|v| v.is_some()).count(), 1);
        assert_approx(result[3].unwrap(), 5.0, DEFAULT_EPSILON);
    }

    #[test]
    fn sma_too_few_values() {
        let result = Sma::new(5).unwrap().compute(&[10.0, 11.0]);
        assert_eq!(result, vec![None, None]);
    }

    #[test]
    fn sma_empty_input() {
        let result = Sma::new(10).unwrap().compute(&[]);
        assert!(result.is_empty());
    }

    #[test]
    fn sma_zero_window_rejected() {
        assert!(matches!(
            Sma::new(0),
            Err(SmaError::InvalidWindow { window: 0 })
        ));
    }

    #[test]
    fn sma_lookback_and_name() {
        let sma = Sma::new(20).unwrap();
        assert_eq!(sma.lookback(), 19);
        assert_eq!(sma.name(), "sma_20");
        assert_eq!(Sma::new(1).unwrap().lookback(), 0);
    }
}
