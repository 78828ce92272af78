//! Data model for the spread forecast pipeline.
//!
//! Everything here is a derived, read-only record: price observations flow
//! in, windows and forecasts flow out, and nothing is mutated after
//! construction.

mod series;
mod windows;

pub use series::{AlignedSeries, PricePoint, PriceSeries};
pub use windows::{ForecastRun, ForecastSummary, ForecastWindow, FuturePeriod, HistoricalWindow};
