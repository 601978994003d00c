//! Ticker symbol normalization shared by the HTTP facade and the export CLI.

use crate::error::SmaError;

/// Longest symbol accepted.
pub const MAX_TICKER_LEN: usize = 16;

/// Ticker symbol alias
pub type Ticker = String;

/// Trim and upper-case `raw`, then check it is a plausible symbol.
///
/// Accepts ASCII letters, digits and `. - ^ =` (`BRK-B`, `^GSPC`, `EURUSD=X`).
/// The result is safe to place in a URL path or a file name.
pub fn normalize_ticker(raw: &str) -> Result<Ticker, SmaError> {
    let ticker = raw.trim().to_uppercase();
    if ticker.is_empty() {
        return Err(SmaError::MissingTicker);
    }

    let valid_chars = ticker
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '='));
    if ticker.len() > MAX_TICKER_LEN || !valid_chars {
        return Err(SmaError::InvalidTicker);
    }
    Ok(ticker)
}
