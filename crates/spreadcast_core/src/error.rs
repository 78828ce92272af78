use std::fmt;

use jiff::civil::Date;

/// Errors raised when the two input price series cannot be joined into a
/// single aligned date index.
#[derive(Debug, Clone, PartialEq)]
pub enum AlignmentError {
    /// Dates within one series are not strictly ascending.
    UnsortedDates { symbol: String, index: usize },
    /// The same date appears more than once within one series.
    DuplicateDate { symbol: String, date: Date },
    /// The joined vectors do not form a valid aligned sequence.
    LengthMismatch {
        dates: usize,
        closes_a: usize,
        closes_b: usize,
    },
}

impl fmt::Display for AlignmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignmentError::UnsortedDates { symbol, index } => {
                write!(
                    f,
                    "series {symbol:?} is not sorted ascending by date at index {index}"
                )
            }
            AlignmentError::DuplicateDate { symbol, date } => {
                write!(f, "series {symbol:?} contains duplicate date {date}")
            }
            AlignmentError::LengthMismatch {
                dates,
                closes_a,
                closes_b,
            } => {
                write!(
                    f,
                    "aligned columns have mismatched lengths (dates={dates}, closes_a={closes_a}, closes_b={closes_b})"
                )
            }
        }
    }
}

impl std::error::Error for AlignmentError {}

/// Errors raised by the forecast pipeline.
///
/// Every variant is a deterministic precondition failure checked before any
/// expensive work begins; none is recoverable or worth retrying with the
/// same inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// The aligned history is too short to produce a single window.
    NotEnoughObservations { needed: usize, got: usize },
    /// The historical spread population is empty and cannot be sampled.
    EmptyHistoricalSpreads,
    /// Summarizing zero forecast windows would divide by zero.
    EmptyForecastSet,
    /// A configuration value fails validation.
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
    Alignment(AlignmentError),
}

impl fmt::Display for ForecastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForecastError::NotEnoughObservations { needed, got } => {
                write!(f, "need at least {needed} aligned observations, got {got}")
            }
            ForecastError::EmptyHistoricalSpreads => {
                write!(f, "historical spread series is empty, nothing to sample")
            }
            ForecastError::EmptyForecastSet => {
                write!(f, "cannot summarize an empty set of forecast windows")
            }
            ForecastError::InvalidConfig { field, reason } => {
                write!(f, "invalid config: {field} {reason}")
            }
            ForecastError::Alignment(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ForecastError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ForecastError::Alignment(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AlignmentError> for ForecastError {
    fn from(e: AlignmentError) -> Self {
        ForecastError::Alignment(e)
    }
}
