//! CSV export and console preview for a normalized series.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use smadash_core::domain::{PricePoint, Series};

/// Rows shown at each end of the preview.
pub const PREVIEW_ROWS: usize = 5;

#[derive(Debug, Serialize)]
struct CsvRow {
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "Adjusted_Close")]
    close: f64,
}

impl From<&PricePoint> for CsvRow {
    fn from(p: &PricePoint) -> Self {
        Self {
            date: p.date,
            close: p.close,
        }
    }
}

/// `<TICKER>_historical_data.csv`
pub fn export_filename(ticker: &str) -> String {
    format!("{ticker}_historical_data.csv")
}

/// Write the series as `Date,Adjusted_Close` CSV.
pub fn write_csv<W: Write>(series: &Series, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for point in series.iter() {
        wtr.serialize(CsvRow::from(point))?;
    }
    wtr.flush().context("failed to flush CSV writer")?;
    Ok(())
}

/// Write the export file into `dir`; returns the path written.
pub fn save_export(series: &Series, ticker: &str, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(export_filename(ticker));
    let file = std::fs::File::create(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_csv(series, file).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

fn format_rows(rows: &[PricePoint]) -> String {
    let mut out = format!("{:<12} {:>14}\n", "Date", "Adjusted_Close");
    for p in rows {
        out.push_str(&format!("{:<12} {:>14.6}\n", p.date.to_string(), p.close));
    }
    out
}

/// First and last rows of the series, formatted for the console.
pub fn preview(series: &Series) -> String {
    format!(
        "First {PREVIEW_ROWS} rows:\n{}\nLast {PREVIEW_ROWS} rows:\n{}",
        format_rows(series.head(PREVIEW_ROWS)),
        format_rows(series.tail(PREVIEW_ROWS)),
    )
}
