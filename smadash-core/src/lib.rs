//! SMA Dashboard Core: price series normalization, the rolling SMA engine and response assembly.
//!
//! This crate holds everything between the provider and the wire:
//! - Domain types (raw provider rows, price points, the normalized series)
//! - Normalizer: drop missing prices, last-write-wins dedupe, ascending sort
//! - Rolling SMA engine with O(N) running sums per window
//! - Response assembler producing the dashboard JSON envelope
//! - `PriceProvider` trait with a Yahoo Finance implementation

pub mod data;
pub mod domain;
pub mod error;
pub mod indicators;
pub mod response;

pub use error::SmaError;
