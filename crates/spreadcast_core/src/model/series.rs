use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::AlignmentError;

/// One daily closing price for one instrument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: Date,
    pub close: f64,
}

/// An ordered daily price series for a single instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    /// Instrument name for diagnostics and report headers.
    pub symbol: String,
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(symbol: impl Into<String>, points: Vec<PricePoint>) -> Self {
        Self {
            symbol: symbol.into(),
            points,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Two price series joined onto one strictly ascending date index.
///
/// This is the only input the windowing stage accepts: positional access
/// into the three parallel columns replaces any label-based lookup, so a
/// window at cursor `i` always reads the same trading day from both
/// instruments. Construct via [`crate::align::align`] or
/// [`AlignedSeries::from_parts`], both of which verify the invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedSeries {
    dates: Vec<Date>,
    closes_a: Vec<f64>,
    closes_b: Vec<f64>,
}

impl AlignedSeries {
    /// Build an aligned series from pre-joined columns, re-verifying the
    /// alignment invariant at the core boundary.
    pub fn from_parts(
        dates: Vec<Date>,
        closes_a: Vec<f64>,
        closes_b: Vec<f64>,
    ) -> Result<Self, AlignmentError> {
        if dates.len() != closes_a.len() || dates.len() != closes_b.len() {
            return Err(AlignmentError::LengthMismatch {
                dates: dates.len(),
                closes_a: closes_a.len(),
                closes_b: closes_b.len(),
            });
        }
        for (i, pair) in dates.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(AlignmentError::UnsortedDates {
                    symbol: "aligned".to_string(),
                    index: i + 1,
                });
            }
        }
        Ok(Self {
            dates,
            closes_a,
            closes_b,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    #[must_use]
    pub fn closes_a(&self) -> &[f64] {
        &self.closes_a
    }

    #[must_use]
    pub fn closes_b(&self) -> &[f64] {
        &self.closes_b
    }
}
