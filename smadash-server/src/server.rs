mod response;
mod routes;

use crate::config::ServerConfig;
use smadash_core::data::PriceProvider;
use std::sync::Arc;
use warp::Filter;

pub use routes::routes;

const LOG_TARGET: &str = "smadash::http";

/// Serve the API until Ctrl-C.
///
/// Fails only if the listener cannot be bound.
pub async fn start(config: &ServerConfig, provider: Arc<dyn PriceProvider>) -> Result<(), warp::Error> {
    log::info!("Starting SMA dashboard API server...");
    log::info!("Data provider: {}", provider.name());
    log::info!("API endpoints:");
    log::info!("  POST /api/fetch-data - Fetch stock data with SMAs");
    log::info!("  GET  /api/health - Health check");
    log::info!("  GET  /api/popular-tickers - Get popular tickers");

    let api = routes(provider).with(warp::log(LOG_TARGET));

    let (bound, server) = warp::serve(api).try_bind_with_graceful_shutdown(
        config.bind_address(),
        async {
            if tokio::signal::ctrl_c().await.is_ok() {
                log::info!("shutdown signal received");
            }
        },
    )?;

    if config.is_development() {
        log::info!("Server available at http://{bound} (development mode)");
    } else {
        log::info!("Server available at http://{bound}");
    }
    server.await;
    Ok(())
}
