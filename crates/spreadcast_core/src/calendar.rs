//! Future trading-day calendar generation.
//!
//! Weekday-only business days, matching the reference forecast calendar.
//! Exchange holidays are not modeled; the forecast windows are calendar
//! placeholders, not tradable schedules.

use jiff::ToSpan;
use jiff::civil::{Date, Weekday};

use crate::model::FuturePeriod;

#[inline]
fn is_business_day(date: Date) -> bool {
    !matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
}

/// Generate `count` consecutive business days, starting at the first
/// business day on or after `start`.
#[must_use]
pub fn business_days(start: Date, count: usize) -> Vec<Date> {
    let mut days = Vec::with_capacity(count);
    let mut current = start;
    while days.len() < count {
        if is_business_day(current) {
            days.push(current);
        }
        current = current.saturating_add(1.days());
    }
    days
}

/// Slice a future calendar into fixed-length windows, the same way the
/// historical windowing does: `window_length` days per window, cursor
/// advancing by `window_length`, trailing partial window dropped.
#[must_use]
pub fn slice_future_periods(calendar: &[Date], window_length: usize) -> Vec<FuturePeriod> {
    if window_length == 0 {
        return Vec::new();
    }

    let mut periods = Vec::with_capacity(calendar.len() / window_length);
    let mut cursor = 0;
    while cursor + window_length <= calendar.len() {
        periods.push(FuturePeriod {
            period: periods.len() + 1,
            start: calendar[cursor],
            end: calendar[cursor + window_length - 1],
        });
        cursor += window_length;
    }
    periods
}
