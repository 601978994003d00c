//! SMA Dashboard Server: the HTTP facade over `smadash-core`.
//!
//! Endpoints:
//! - `POST /api/fetch-data`: fetch a ticker's history with default-window SMAs
//! - `GET /api/health`: liveness probe with a timestamp
//! - `GET /api/popular-tickers`: static ticker suggestions
//!
//! The route tree holds no state besides the injected provider.

pub mod config;
pub mod logging;
pub mod server;
pub mod tickers;

pub use config::{ConfigError, RunMode, ServerConfig};
pub use logging::init_logging;
pub use server::{routes, start};
