//! Static catalogue of tickers suggested by the dashboard search box.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PopularTicker {
    pub ticker: &'static str,
    pub name: &'static str,
}

const fn entry(ticker: &'static str, name: &'static str) -> PopularTicker {
    PopularTicker { ticker, name }
}

pub const POPULAR_TICKERS: [PopularTicker; 10] = [
    entry("AAPL", "Apple Inc."),
    entry("MSFT", "Microsoft Corporation"),
    entry("GOOGL", "Alphabet Inc."),
    entry("AMZN", "Amazon.com Inc."),
    entry("TSLA", "Tesla Inc."),
    entry("META", "Meta Platforms Inc."),
    entry("NVDA", "NVIDIA Corporation"),
    entry("QQQ", "Invesco QQQ Trust"),
    entry("SPY", "SPDR S&P 500 ETF Trust"),
    entry("VTI", "Vanguard Total Stock Market ETF"),
];
