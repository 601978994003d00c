use anyhow::{Context, Result};
use smadash_core::data::{PriceProvider, YahooProvider};
use smadash_server::{init_logging, start, ServerConfig};
use std::sync::Arc;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;
    init_logging(config.mode);

    // The blocking client must be created and dropped outside the async runtime,
    // so main keeps its own handle until the runtime is gone.
    let provider: Arc<dyn PriceProvider> = Arc::new(YahooProvider::new()?);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;

    runtime
        .block_on(start(&config, Arc::clone(&provider)))
        .with_context(|| format!("failed to bind {}", config.bind_address()))?;

    drop(runtime);
    Ok(())
}
