//! CSV price loading.
//!
//! Expects a header row with at least `date` (ISO calendar date) and
//! `close` columns; any other columns are ignored. Rows are kept in file
//! order — the core's alignment step validates chronology.

use std::path::Path;

use color_eyre::eyre::WrapErr;
use jiff::civil::Date;
use serde::Deserialize;

use spreadcast_core::model::{PricePoint, PriceSeries};

#[derive(Debug, Deserialize)]
struct RawRow {
    date: Date,
    close: f64,
}

/// Load one instrument's daily closes from a CSV file.
pub fn load_price_series(path: &Path, symbol: &str) -> color_eyre::Result<PriceSeries> {
    let mut reader = csv::Reader::from_path(path)
        .wrap_err_with(|| format!("failed to open price file {}", path.display()))?;

    let mut points = Vec::new();
    for (i, row) in reader.deserialize::<RawRow>().enumerate() {
        let row = row.wrap_err_with(|| {
            format!("failed to parse row {} of {}", i + 1, path.display())
        })?;
        points.push(PricePoint {
            date: row.date,
            close: row.close,
        });
    }

    tracing::info!(
        "loaded {} daily closes for {} from {}",
        points.len(),
        symbol,
        path.display()
    );

    Ok(PriceSeries::new(symbol, points))
}
