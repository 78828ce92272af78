//! Return-spread history and bootstrap forecast engine
//!
//! This crate computes the historical return-spread between two instruments
//! from daily closing prices, then forecasts a fixed future calendar by
//! resampling the historical spread distribution. It provides:
//! - Validated alignment of two price series onto one date index
//! - Fixed-length, non-overlapping windowing with per-window percent-return
//!   spreads
//! - A seeded, reproducible bootstrap forecaster (optionally parallel via
//!   the `parallel` feature, with identical output either way)
//! - Horizon-level aggregation (cumulative and mean expected spread,
//!   high-confidence window count)
//!
//! ```ignore
//! use spreadcast_core::config::ForecastConfig;
//! use spreadcast_core::pipeline;
//!
//! let run = pipeline::run(&series_a, &series_b, &ForecastConfig::default())?;
//! println!("cumulative edge: {:+.2}%", run.summary.cumulative_spread);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod align;
pub mod bootstrap;
pub mod calendar;
pub mod error;
pub mod pipeline;
pub mod summary;
pub mod window;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::ForecastConfig;
pub use error::{AlignmentError, ForecastError};
pub use model::{
    AlignedSeries, ForecastRun, ForecastSummary, ForecastWindow, FuturePeriod, HistoricalWindow,
    PricePoint, PriceSeries,
};
