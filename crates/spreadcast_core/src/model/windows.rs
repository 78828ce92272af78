//! Window and forecast output records.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// One fixed-length, non-overlapping slice of the aligned history.
///
/// `return_a` and `return_b` are percent returns from the window's first
/// close to its last close; `spread` is their difference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalWindow {
    /// 1-based chronological period index.
    pub period: usize,
    pub start: Date,
    pub end: Date,
    pub return_a: f64,
    pub return_b: f64,
    pub spread: f64,
}

/// A future window placeholder: calendar bounds only, no observed data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuturePeriod {
    /// 1-based period index within the forecast horizon.
    pub period: usize,
    pub start: Date,
    pub end: Date,
}

/// Bootstrap estimates for one future window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastWindow {
    pub period: usize,
    pub start: Date,
    pub end: Date,
    /// Mean of the resampled spreads, rounded to 3 decimals.
    pub expected_spread: f64,
    /// Percent of resampled spreads strictly above zero, in [0, 100],
    /// rounded to 1 decimal.
    pub probability_outperform: f64,
}

/// Aggregate view over a whole forecast horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastSummary {
    /// Sum of `expected_spread` over all windows.
    pub cumulative_spread: f64,
    /// Arithmetic mean of `expected_spread`.
    pub mean_spread: f64,
    /// Windows whose `probability_outperform` strictly exceeds the
    /// configured threshold.
    pub high_confidence_periods: usize,
    pub periods: usize,
}

/// Complete output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRun {
    /// Number of trading days shared by both instruments after alignment.
    pub aligned_days: usize,
    pub historical: Vec<HistoricalWindow>,
    pub forecasts: Vec<ForecastWindow>,
    pub summary: ForecastSummary,
}
