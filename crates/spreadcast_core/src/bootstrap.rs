//! Bootstrap resampling forecast engine.
//!
//! Each future window is estimated by drawing a large number of i.i.d.
//! samples with replacement from the historical spread distribution. This
//! is a plain independent-draw bootstrap: no autocorrelation, regimes, or
//! volatility structure is modeled.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::error::ForecastError;
use crate::model::{ForecastWindow, FuturePeriod};

/// Round half away from zero to `decimals` places (`f64::round` semantics).
#[inline]
fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Estimate every future window by resampling the historical spreads.
///
/// A parent generator is seeded once from `seed` and one sub-seed per
/// window is drawn from it in input order; each window then samples from
/// its own generator stream. Windows are therefore independent and the
/// output is bit-reproducible for a fixed seed, whether the per-window
/// sampling runs sequentially or on the rayon pool (`parallel` feature).
///
/// Per window, over `samples` draws:
/// - `expected_spread` is the sample mean, rounded to 3 decimals;
/// - `probability_outperform` is the percentage of draws strictly greater
///   than zero (exact zeros do not count), rounded to 1 decimal.
///
/// Output order matches the input order of `periods`.
pub fn forecast(
    spreads: &[f64],
    periods: &[FuturePeriod],
    samples: usize,
    seed: u64,
) -> Result<Vec<ForecastWindow>, ForecastError> {
    if spreads.is_empty() {
        return Err(ForecastError::EmptyHistoricalSpreads);
    }
    if samples == 0 {
        return Err(ForecastError::InvalidConfig {
            field: "samples_per_period",
            reason: "must be a positive number of bootstrap draws",
        });
    }

    let mut parent = SmallRng::seed_from_u64(seed);
    let jobs: Vec<(FuturePeriod, u64)> = periods
        .iter()
        .map(|period| (*period, parent.next_u64()))
        .collect();

    #[cfg(feature = "parallel")]
    let windows = jobs
        .into_par_iter()
        .map(|(period, sub_seed)| sample_window(spreads, period, samples, sub_seed))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let windows = jobs
        .into_iter()
        .map(|(period, sub_seed)| sample_window(spreads, period, samples, sub_seed))
        .collect();

    Ok(windows)
}

fn sample_window(
    spreads: &[f64],
    period: FuturePeriod,
    samples: usize,
    sub_seed: u64,
) -> ForecastWindow {
    let mut rng = SmallRng::seed_from_u64(sub_seed);
    let mut sum = 0.0;
    let mut outperform = 0usize;

    for _ in 0..samples {
        let draw = spreads[rng.random_range(0..spreads.len())];
        sum += draw;
        if draw > 0.0 {
            outperform += 1;
        }
    }

    ForecastWindow {
        period: period.period,
        start: period.start,
        end: period.end,
        expected_spread: round_to(sum / samples as f64, 3),
        probability_outperform: round_to(outperform as f64 / samples as f64 * 100.0, 1),
    }
}
