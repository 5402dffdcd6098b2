//! Rolling seven-day sleep window.
//!
//! The chart consuming this always gets one point per calendar day,
//! oldest first, ending today. Days without a log are zero-filled and
//! records outside the window are ignored.

use chrono::{Duration, NaiveDate};

use crate::models::sleep::{DayPoint, SleepLog};

/// Number of calendar days in the window, `today` included.
pub const WINDOW_DAYS: usize = 7;

/// First day of the window ending at `today`.
#[must_use]
pub fn window_start(today: NaiveDate) -> NaiveDate {
    today - Duration::days(6)
}

/// Build the gap-filled window ending at `today` from whatever logs were read.
///
/// The result always has exactly [`WINDOW_DAYS`] entries in ascending date
/// order.
#[must_use]
pub fn fill_window(today: NaiveDate, logs: &[SleepLog]) -> Vec<DayPoint> {
    window_start(today)
        .iter_days()
        .take(WINDOW_DAYS)
        .map(|date| {
            let hours = logs
                .iter()
                .find(|log| log.date == date)
                .map_or(0, |log| log.hours);
            DayPoint::new(date, hours)
        })
        .collect()
}
