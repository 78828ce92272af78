//! Aggregation over a forecast horizon.

use crate::error::ForecastError;
use crate::model::{ForecastSummary, ForecastWindow};

/// Aggregate all forecast windows into one summary record.
///
/// Fails on an empty horizon rather than letting the mean divide by zero
/// and propagate NaN.
pub fn summarize(
    forecasts: &[ForecastWindow],
    high_confidence_threshold: f64,
) -> Result<ForecastSummary, ForecastError> {
    if forecasts.is_empty() {
        return Err(ForecastError::EmptyForecastSet);
    }

    let cumulative_spread: f64 = forecasts.iter().map(|f| f.expected_spread).sum();
    let high_confidence_periods = forecasts
        .iter()
        .filter(|f| f.probability_outperform > high_confidence_threshold)
        .count();

    Ok(ForecastSummary {
        cumulative_spread,
        mean_spread: cumulative_spread / forecasts.len() as f64,
        high_confidence_periods,
        periods: forecasts.len(),
    })
}
