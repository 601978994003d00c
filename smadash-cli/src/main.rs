//! SMA Dashboard export. Fetches one ticker's full history and saves it as CSV.
//!
//! Usage: `smadash-export <TICKER> [--output-dir DIR]`
//!
//! Writes `<TICKER>_historical_data.csv` with `Date,Adjusted_Close` columns.
//! A failed fetch prints a message and still exits 0; a failed write exits non-zero.

mod export;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use smadash_core::data::{Normalizer, PriceProvider, YahooProvider};
use smadash_core::domain::{normalize_ticker, Series, Ticker};
use smadash_core::SmaError;

use crate::export::{preview, save_export};

#[derive(Debug, Parser)]
#[command(
    name = "smadash-export",
    about = "Export a ticker's full daily close history from Yahoo Finance to CSV"
)]
struct Cli {
    /// Ticker symbol (e.g., AAPL, MSFT, GOOGL).
    #[arg(value_parser = normalize_ticker)]
    ticker: Ticker,

    /// Directory for the CSV file. Defaults to the current directory.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let provider = YahooProvider::new()?;
    run(&cli, &provider)
}

fn run(cli: &Cli, provider: &dyn PriceProvider) -> Result<()> {
    let ticker = &cli.ticker;

    println!("Fetching data for {ticker}...");
    let series = match fetch_series(provider, ticker) {
        Ok(series) => series,
        Err(e) => {
            println!("Error: {e}");
            println!("Failed to get data");
            return Ok(());
        }
    };

    println!("Successfully fetched {} records", series.len());
    if let (Some(start), Some(end)) = (series.start_date(), series.end_date()) {
        println!("Date range: {start} to {end}");
    }

    println!();
    print!("{}", preview(&series));

    let path = save_export(&series, ticker, &cli.output_dir)?;
    println!("Data saved to: {}", path.display());
    println!();
    println!("Done! {} records saved to {}", series.len(), path.display());

    Ok(())
}

fn fetch_series(provider: &dyn PriceProvider, ticker: &str) -> Result<Series, SmaError> {
    let fetched = provider.fetch(ticker)?;
    Normalizer::normalize(fetched.records)
}
