//! Integration tests for the spread forecast pipeline
//!
//! Tests are organized by topic:
//! - `windows` - Historical windowing mechanics
//! - `bootstrap` - Resampling, determinism, and boundary behavior
//! - `summary` - Horizon aggregation
//! - `pipeline` - Full-run behavior, idempotence, and error taxonomy

mod bootstrap;

use jiff::civil::{Date, date};

use crate::model::{PricePoint, PriceSeries};

/// Build a price series over consecutive weekdays starting 2024-01-02.
pub(crate) fn weekday_series(symbol: &str, closes: &[f64]) -> PriceSeries {
    let days = crate::calendar::business_days(date(2024, 1, 2), closes.len());
    PriceSeries::new(
        symbol,
        days.iter()
            .zip(closes)
            .map(|(d, c)| PricePoint { date: *d, close: *c })
            .collect(),
    )
}

/// Future periods with synthetic one-day bounds, for driving the
/// forecaster directly.
pub(crate) fn synthetic_periods(count: usize) -> Vec<crate::model::FuturePeriod> {
    let days: Vec<Date> = crate::calendar::business_days(date(2026, 1, 2), count);
    days.iter()
        .enumerate()
        .map(|(i, d)| crate::model::FuturePeriod {
            period: i + 1,
            start: *d,
            end: *d,
        })
        .collect()
}
