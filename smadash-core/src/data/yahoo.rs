//! Yahoo Finance data provider.
//!
//! Fetches the full daily close history from Yahoo's v8 chart API, along with
//! the company display name carried in the chart metadata.
//!
//! Yahoo Finance has no official API and is subject to unannounced format changes.
//! Any response that does not match the expected shape surfaces as `Upstream`.

use super::provider::{FetchResult, PriceProvider};
use crate::domain::RawRecord;
use crate::error::SmaError;
use serde::Deserialize;
use std::time::Duration;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Yahoo Finance v8 chart API response.
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    #[serde(default)]
    meta: ChartMeta,
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartMeta {
    long_name: Option<String>,
    short_name: Option<String>,
    gmtoffset: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteData>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

/// Yahoo Finance data provider.
pub struct YahooProvider {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl YahooProvider {
    pub fn new() -> Result<Self, SmaError> {
        Self::with_base_url("https://query2.finance.yahoo.com")
    }

    /// Point the provider at a different chart API host (mirrors, proxies).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, SmaError> {
        // No request deadline: callers that need one impose it themselves.
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SmaError::Upstream(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Build the chart API URL for a symbol's full history.
    fn chart_url(&self, ticker: &str) -> String {
        format!(
            "{}/v8/finance/chart/{ticker}?range=max&interval=1d",
            self.base_url
        )
    }

    /// Parse the chart API response into a FetchResult.
    fn parse_response(ticker: &str, resp: ChartResponse) -> Result<FetchResult, SmaError> {
        let result = resp.chart.result.ok_or_else(|| match resp.chart.error {
            Some(err) if err.code == "Not Found" => SmaError::NotFound {
                ticker: ticker.to_string(),
            },
            Some(err) => SmaError::Upstream(format!("{}: {}", err.code, err.description)),
            None => SmaError::Upstream("empty result with no error".into()),
        })?;

        let data = result.into_iter().next().ok_or_else(|| SmaError::NotFound {
            ticker: ticker.to_string(),
        })?;

        let display_name = data
            .meta
            .long_name
            .or(data.meta.short_name)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| ticker.to_string());
        let offset = data.meta.gmtoffset.unwrap_or(0);

        // Symbols that exist but never traded come back with no timestamps.
        let timestamps = data.timestamp.unwrap_or_default();
        if timestamps.is_empty() {
            return Err(SmaError::NotFound {
                ticker: ticker.to_string(),
            });
        }

        let quote = data
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| SmaError::Upstream("no quote data".into()))?;

        let mut records = Vec::with_capacity(timestamps.len());
        for (i, &ts) in timestamps.iter().enumerate() {
            // Shift into exchange-local time so the session date is preserved.
            let date = chrono::DateTime::from_timestamp(ts + offset, 0)
                .map(|dt| dt.naive_utc().date())
                .ok_or_else(|| SmaError::Upstream(format!("invalid timestamp: {ts}")))?;
            let close = quote.close.get(i).copied().flatten();
            records.push(RawRecord::new(date, close));
        }

        Ok(FetchResult {
            ticker: ticker.to_string(),
            display_name,
            records,
        })
    }

    /// 404 means the symbol is unknown; any other non-2xx is an upstream failure.
    fn check_status(status: reqwest::StatusCode, ticker: &str) -> Result<(), SmaError> {
        if status == reqwest::StatusCode::NOT_FOUND {
            log::warn!("{ticker}: provider reports no data");
            return Err(SmaError::NotFound {
                ticker: ticker.to_string(),
            });
        }
        if !status.is_success() {
            log::warn!("{ticker}: provider returned HTTP {status}");
            return Err(SmaError::Upstream(format!("HTTP {status} for {ticker}")));
        }
        Ok(())
    }

    fn parse_body(ticker: &str, body: &str) -> Result<FetchResult, SmaError> {
        let chart: ChartResponse = serde_json::from_str(body).map_err(|e| {
            SmaError::Upstream(format!("failed to parse response for {ticker}: {e}"))
        })?;
        Self::parse_response(ticker, chart)
    }
}

impl PriceProvider for YahooProvider {
    fn name(&self) -> &str {
        "yahoo_finance"
    }

    fn fetch(&self, ticker: &str) -> Result<FetchResult, SmaError> {
        let url = self.chart_url(ticker);
        log::debug!("GET {url}");

        let resp = self.client.get(&url).send().map_err(|e| {
            log::warn!("request for {ticker} failed: {e}");
            SmaError::Upstream(e.to_string())
        })?;

        let status = resp.status();
        let body = resp
            .text()
            .map_err(|e| SmaError::Upstream(format!("failed to read body for {ticker}: {e}")))?;

        Self::check_status(status, ticker)?;

        let result = Self::parse_body(ticker, &body)?;
        log::info!(
            "fetched {} records for {ticker} ({})",
            result.records.len(),
            result.display_name
        );
        Ok(result)
    }
}
