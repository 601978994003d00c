//! Structured error type shared by the normalizer, the SMA engine and providers.
//!
//! Callers branch on the variant rather than on message text. The HTTP facade
//! uses [`SmaError::is_client_error`] to choose between a 400 and a 500.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SmaError {
    /// No usable price records remained after dropping missing prices.
    #[error("no usable price records after filtering missing prices")]
    EmptyInput,

    /// The request carried no ticker, or only whitespace.
    #[error("Ticker symbol is required")]
    MissingTicker,

    /// The ticker has characters or a length no listed symbol uses.
    #[error("Invalid ticker symbol")]
    InvalidTicker,

    /// SMA window length must be at least 1.
    #[error("invalid SMA window {window}: window length must be positive")]
    InvalidWindow { window: usize },

    /// The provider has no data for the requested ticker.
    #[error("No data found for ticker {ticker}")]
    NotFound { ticker: String },

    /// Any other provider-side failure: network, HTTP status, malformed payload.
    #[error("upstream provider error: {0}")]
    Upstream(String),
}

impl SmaError {
    /// True for failures caused by the request itself rather than by the system.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            SmaError::NotFound { .. }
                | SmaError::EmptyInput
                | SmaError::MissingTicker
                | SmaError::InvalidTicker
        )
    }
}
