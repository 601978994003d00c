//! Domain types: raw provider rows, validated price points, the normalized series.

pub mod price;
pub mod series;
pub mod ticker;

pub use price::{PricePoint, RawRecord};
pub use series::Series;
pub use ticker::{normalize_ticker, Ticker, MAX_TICKER_LEN};
