//! Data provider trait and fetch result.
//!
//! The PriceProvider trait abstracts over price sources so the HTTP facade and
//! the export CLI can run against Yahoo Finance in production and a stub in tests.

use crate::domain::{RawRecord, Ticker};
use crate::error::SmaError;

/// Result of a successful fetch for a single ticker.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub ticker: Ticker,
    /// Human-readable company name; falls back to the ticker when unknown.
    pub display_name: String,
    /// Raw rows as the provider returned them, before normalization.
    pub records: Vec<RawRecord>,
}

/// Trait for historical price providers.
///
/// `fetch` is a blocking call with no internal retries. Async callers should
/// move it onto a blocking thread.
pub trait PriceProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch the full daily close history for `ticker`.
    ///
    /// Returns `SmaError::NotFound` when the provider has no data for the
    /// symbol and `SmaError::Upstream` for every other failure.
    fn fetch(&self, ticker: &str) -> Result<FetchResult, SmaError>;
}
