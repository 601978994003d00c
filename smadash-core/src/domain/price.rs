//! PricePoint: one daily close for a single ticker.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single validated close on a single calendar date.
///
/// The `close` column is the provider's raw close. It is exported under the
/// `Adjusted_Close` label for compatibility, but no adjustment is applied here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// A provider row before normalization.
///
/// `close` is `None` when the provider reported a null price for that date
/// (halts, holidays, partial rows).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub date: NaiveDate,
    pub close: Option<f64>,
}

impl RawRecord {
    pub fn new(date: NaiveDate, close: Option<f64>) -> Self {
        Self { date, close }
    }

    /// The close if present and finite.
    pub fn usable_close(&self) -> Option<f64> {
        self.close.filter(|c| c.is_finite())
    }
}
