//! Response assembly. Merges a series and its SMAs into the API envelope.
//!
//! Field names follow the dashboard's JSON contract (`Date`, `Adjusted_Close`,
//! `SMA_10`, ..., `companyName`, `totalRecords`, `dateRange`). Missing SMA values
//! serialize as `null`.

use crate::data::{FetchResult, Normalizer};
use crate::domain::{PricePoint, Series};
use crate::error::SmaError;
use crate::indicators::{SmaValues, DEFAULT_WINDOWS};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the dashboard table: a close plus every default-window SMA.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Adjusted_Close")]
    pub close: f64,
    #[serde(rename = "SMA_10")]
    pub sma_10: Option<f64>,
    #[serde(rename = "SMA_20")]
    pub sma_20: Option<f64>,
    #[serde(rename = "SMA_30")]
    pub sma_30: Option<f64>,
    #[serde(rename = "SMA_40")]
    pub sma_40: Option<f64>,
    #[serde(rename = "SMA_50")]
    pub sma_50: Option<f64>,
    #[serde(rename = "SMA_100")]
    pub sma_100: Option<f64>,
}

impl OutputRecord {
    fn from_point(point: &PricePoint, index: usize, smas: &SmaValues) -> Self {
        Self {
            date: point.date,
            close: point.close,
            sma_10: smas.get(10, index),
            sma_20: smas.get(20, index),
            sma_30: smas.get(30, index),
            sma_40: smas.get(40, index),
            sma_50: smas.get(50, index),
            sma_100: smas.get(100, index),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Full response for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub company_name: String,
    pub ticker: String,
    pub data: Vec<OutputRecord>,
    pub total_records: usize,
    pub date_range: DateRange,
}

/// Zip a series with its SMAs and attach metadata.
///
/// Windows absent from `smas` come out as `null` in every record.
pub fn assemble(
    ticker: &str,
    company_name: &str,
    series: &Series,
    smas: &SmaValues,
) -> ResponseEnvelope {
    let data: Vec<OutputRecord> = series
        .iter()
        .enumerate()
        .map(|(i, p)| OutputRecord::from_point(p, i, smas))
        .collect();

    ResponseEnvelope {
        company_name: company_name.to_string(),
        ticker: ticker.to_string(),
        total_records: data.len(),
        date_range: DateRange {
            start: series.start_date(),
            end: series.end_date(),
        },
        data,
    }
}

/// Full pipeline for one fetch: normalize → default-window SMAs → envelope.
pub fn process(fetch: FetchResult) -> Result<ResponseEnvelope, SmaError> {
    let series = Normalizer::normalize(fetch.records)?;
    let smas = SmaValues::for_series(&series, &DEFAULT_WINDOWS)?;
    Ok(assemble(&fetch.ticker, &fetch.display_name, &series, &smas))
}
