//! Alignment of two price series onto a common date index.
//!
//! The join happens exactly once, up front, and produces the single
//! index-addressable sequence every downstream stage reads. Getting this
//! wrong would silently corrupt every windowed statistic, so both inputs
//! are validated (sorted, duplicate-free) before joining.

use rustc_hash::FxHashMap;

use crate::error::AlignmentError;
use crate::model::{AlignedSeries, PriceSeries};

/// Inner-join two daily price series on date.
///
/// Keeps only dates present in both series, preserving chronological
/// order; a date missing in either series is dropped from both. Each input
/// must be strictly ascending with no duplicate dates.
pub fn align(
    series_a: &PriceSeries,
    series_b: &PriceSeries,
) -> Result<AlignedSeries, AlignmentError> {
    verify_sorted(series_a)?;
    verify_sorted(series_b)?;

    let mut b_closes = FxHashMap::default();
    for point in &series_b.points {
        b_closes.insert(point.date, point.close);
    }

    let mut dates = Vec::new();
    let mut closes_a = Vec::new();
    let mut closes_b = Vec::new();
    for point in &series_a.points {
        if let Some(close_b) = b_closes.get(&point.date) {
            dates.push(point.date);
            closes_a.push(point.close);
            closes_b.push(*close_b);
        }
    }

    AlignedSeries::from_parts(dates, closes_a, closes_b)
}

fn verify_sorted(series: &PriceSeries) -> Result<(), AlignmentError> {
    for (i, pair) in series.points.windows(2).enumerate() {
        if pair[1].date == pair[0].date {
            return Err(AlignmentError::DuplicateDate {
                symbol: series.symbol.clone(),
                date: pair[1].date,
            });
        }
        if pair[1].date < pair[0].date {
            return Err(AlignmentError::UnsortedDates {
                symbol: series.symbol.clone(),
                index: i + 1,
            });
        }
    }
    Ok(())
}
