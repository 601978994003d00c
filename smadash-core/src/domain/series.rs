//! Series: an ascending, date-unique sequence of price points.

use super::price::PricePoint;
use chrono::NaiveDate;

/// Time-ordered closes for one ticker.
///
/// Only the normalizer builds a `Series`, so dates are strictly increasing and
/// never repeat. The series is immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    points: Vec<PricePoint>,
}

impl Series {
    /// Caller guarantees `points` is strictly ascending by date.
    pub(crate) fn from_sorted(points: Vec<PricePoint>) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0].date < w[1].date));
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &PricePoint> {
        self.points.iter()
    }

    /// Close prices in date order, ready for the SMA engine.
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    /// First `n` points (fewer if the series is shorter).
    pub fn head(&self, n: usize) -> &[PricePoint] {
        &self.points[..n.min(self.points.len())]
    }

    /// Last `n` points (fewer if the series is shorter).
    pub fn tail(&self, n: usize) -> &[PricePoint] {
        let start = self.points.len().saturating_sub(n);
        &self.points[start..]
    }
}
