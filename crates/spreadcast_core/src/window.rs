//! Fixed-length, non-overlapping windowing of the aligned history.

use crate::model::{AlignedSeries, HistoricalWindow};

/// Percent return from the first close to the last close of a window.
#[inline]
#[must_use]
pub fn percent_return(start_close: f64, end_close: f64) -> f64 {
    (end_close / start_close - 1.0) * 100.0
}

/// Slice the aligned history into non-overlapping windows of exactly
/// `window_length` observations and compute the per-window spread.
///
/// The cursor advances by `window_length` positions at a time; each window
/// spans its first and last observation, so a 10-observation window covers
/// 9 trading days of elapsed time. A trailing remainder shorter than
/// `window_length` is silently dropped, never padded — for short datasets
/// this loses up to `window_length - 1` observations. Fewer than
/// `window_length` observations in total yields an empty vector, not an
/// error; callers that need at least one window must check for themselves.
#[must_use]
pub fn extract_windows(series: &AlignedSeries, window_length: usize) -> Vec<HistoricalWindow> {
    if window_length == 0 {
        return Vec::new();
    }

    let dates = series.dates();
    let closes_a = series.closes_a();
    let closes_b = series.closes_b();

    let mut windows = Vec::with_capacity(series.len() / window_length);
    let mut cursor = 0;
    while cursor + window_length <= series.len() {
        let last = cursor + window_length - 1;
        let return_a = percent_return(closes_a[cursor], closes_a[last]);
        let return_b = percent_return(closes_b[cursor], closes_b[last]);
        windows.push(HistoricalWindow {
            period: windows.len() + 1,
            start: dates[cursor],
            end: dates[last],
            return_a,
            return_b,
            spread: return_a - return_b,
        });
        cursor += window_length;
    }

    windows
}
