//! Sleep log records and chart points.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Hours slept on one calendar day. At most one record exists per date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct SleepLog {
    /// Store-assigned identifier.
    pub id: i64,
    /// Day the hours belong to; unique.
    pub date: NaiveDate,
    /// Hours slept, taken as given.
    pub hours: i64,
}

/// One entry of the seven-day sleep chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct DayPoint {
    /// Weekday abbreviation (`Mon`, `Tue`, ...).
    pub day: String,
    /// Calendar date, serialized as `YYYY-MM-DD`.
    pub full_date: NaiveDate,
    /// Hours logged for the date, 0 when nothing was logged.
    pub hours: i64,
}

impl DayPoint {
    /// Build a point labelled with the weekday of `date`.
    #[must_use]
    pub fn new(date: NaiveDate, hours: i64) -> Self {
        Self {
            day: date.format("%a").to_string(),
            full_date: date,
            hours,
        }
    }
}
