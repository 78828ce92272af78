//! Forecast configuration.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::ForecastError;

fn default_window_length() -> usize {
    10
}

fn default_horizon_periods() -> usize {
    26
}

fn default_samples_per_period() -> usize {
    10_000
}

fn default_seed() -> u64 {
    2026
}

fn default_high_confidence_threshold() -> f64 {
    65.0
}

fn default_forecast_start() -> Date {
    jiff::civil::date(2026, 1, 2)
}

/// Everything needed to run the pipeline, with the reference defaults:
/// 10-day windows, 26 forecast periods, 10,000 draws per period, seed 2026.
///
/// The same `window_length` governs both historical and forecast windowing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Trading-day observations consumed per window.
    #[serde(default = "default_window_length")]
    pub window_length: usize,

    /// Number of future windows to forecast.
    #[serde(default = "default_horizon_periods")]
    pub horizon_periods: usize,

    /// Bootstrap draws per forecast window.
    #[serde(default = "default_samples_per_period")]
    pub samples_per_period: usize,

    /// Seed for the run's parent random number generator.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// A window is high-confidence when its probability of outperformance
    /// strictly exceeds this percentage.
    #[serde(default = "default_high_confidence_threshold")]
    pub high_confidence_threshold: f64,

    /// First candidate date of the forecast calendar; the calendar starts
    /// at the first business day on or after it.
    #[serde(default = "default_forecast_start")]
    pub forecast_start: Date,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            window_length: default_window_length(),
            horizon_periods: default_horizon_periods(),
            samples_per_period: default_samples_per_period(),
            seed: default_seed(),
            high_confidence_threshold: default_high_confidence_threshold(),
            forecast_start: default_forecast_start(),
        }
    }
}

impl ForecastConfig {
    /// Fail-fast validation of every knob, run before any data work.
    pub fn validate(&self) -> Result<(), ForecastError> {
        if self.window_length == 0 {
            return Err(ForecastError::InvalidConfig {
                field: "window_length",
                reason: "must be a positive number of trading days",
            });
        }
        if self.horizon_periods == 0 {
            return Err(ForecastError::InvalidConfig {
                field: "horizon_periods",
                reason: "must be a positive number of forecast windows",
            });
        }
        if self.samples_per_period == 0 {
            return Err(ForecastError::InvalidConfig {
                field: "samples_per_period",
                reason: "must be a positive number of bootstrap draws",
            });
        }
        if !self.high_confidence_threshold.is_finite() {
            return Err(ForecastError::InvalidConfig {
                field: "high_confidence_threshold",
                reason: "must be a finite percentage",
            });
        }
        Ok(())
    }

    /// Total business days the forecast calendar must cover.
    #[must_use]
    pub fn calendar_days(&self) -> usize {
        self.window_length * self.horizon_periods
    }
}
