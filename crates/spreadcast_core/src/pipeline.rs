//! The full batch pipeline: align → window → resample → summarize.

use crate::align::align;
use crate::bootstrap::forecast;
use crate::calendar::{business_days, slice_future_periods};
use crate::config::ForecastConfig;
use crate::error::ForecastError;
use crate::model::{ForecastRun, PriceSeries};
use crate::summary::summarize;
use crate::window::extract_windows;

/// Run the whole pipeline over two daily price series.
///
/// Single-pass, synchronous, and deterministic: re-running with unchanged
/// inputs and seed yields an identical [`ForecastRun`]. Every precondition
/// is checked before the expensive sampling starts and any failure aborts
/// the run; there is no partial result.
pub fn run(
    series_a: &PriceSeries,
    series_b: &PriceSeries,
    config: &ForecastConfig,
) -> Result<ForecastRun, ForecastError> {
    config.validate()?;

    let aligned = align(series_a, series_b)?;
    let historical = extract_windows(&aligned, config.window_length);
    if historical.is_empty() {
        return Err(ForecastError::NotEnoughObservations {
            needed: config.window_length,
            got: aligned.len(),
        });
    }

    let spreads: Vec<f64> = historical.iter().map(|w| w.spread).collect();
    let calendar = business_days(config.forecast_start, config.calendar_days());
    let periods = slice_future_periods(&calendar, config.window_length);

    let forecasts = forecast(&spreads, &periods, config.samples_per_period, config.seed)?;
    let summary = summarize(&forecasts, config.high_confidence_threshold)?;

    Ok(ForecastRun {
        aligned_days: aligned.len(),
        historical,
        forecasts,
        summary,
    })
}
