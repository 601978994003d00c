//! Data acquisition and normalization

pub mod normalize;
pub mod provider;
pub mod yahoo;

pub use normalize::Normalizer;
pub use provider::{FetchResult, PriceProvider};
pub use yahoo::YahooProvider;
