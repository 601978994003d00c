use crate::domain::{PricePoint, RawRecord, Series};
use crate::error::SmaError;
use std::collections::BTreeMap;

/// Normalizer for raw provider rows
pub struct Normalizer;

impl Normalizer {
    /// Normalize raw rows: drop missing prices, dedupe by date, sort ascending.
    ///
    /// When two rows share a date, the one supplied later wins.
    pub fn normalize<I>(records: I) -> Result<Series, SmaError>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let mut by_date = BTreeMap::new();
        for record in records {
            if let Some(close) = record.usable_close() {
                by_date.insert(record.date, close);
            }
        }

        if by_date.is_empty() {
            return Err(SmaError::EmptyInput);
        }

        let points = by_date
            .into_iter()
            .map(|(date, close)| PricePoint { date, close })
            .collect();
        Ok(Series::from_sorted(points))
    }
}
