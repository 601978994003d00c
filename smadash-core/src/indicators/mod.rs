//! Rolling aggregation engine.
//!
//! The only indicator is the simple moving average. Every request computes the
//! same fixed set of windows, [`DEFAULT_WINDOWS`], over one normalized series.

pub mod indicator;
pub mod sma;

pub use indicator::{Indicator, SmaSeries, SmaValues};
pub use sma::Sma;

/// SMA windows reported for every ticker, ascending.
pub const DEFAULT_WINDOWS: [usize; 6] = [10, 20, 30, 40, 50, 100];

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
