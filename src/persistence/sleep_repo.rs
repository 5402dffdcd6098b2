//! Sleep log repository for `SQLite` persistence.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::models::sleep::{DayPoint, SleepLog};
use crate::tracker::sleep_window::{fill_window, window_start};
use crate::Result;

use super::db::Database;
use super::{format_date, parse_date};

/// Repository for sleep log records.
#[derive(Clone)]
pub struct SleepRepo {
    db: Arc<Database>,
}

/// Internal row struct for `SQLite` deserialization.
#[derive(sqlx::FromRow)]
struct SleepRow {
    id: i64,
    date: String,
    hours: i64,
}

impl SleepRow {
    fn into_log(self) -> Result<SleepLog> {
        Ok(SleepLog {
            id: self.id,
            date: parse_date("date", &self.date)?,
            hours: self.hours,
        })
    }
}

impl SleepRepo {
    /// Create a new repository instance.
    #[must_use]
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Seven-day chart ending at `today`, zero-filled where nothing was logged.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the query fails or a stored date is invalid.
    pub async fn window(&self, today: NaiveDate) -> Result<Vec<DayPoint>> {
        let rows: Vec<SleepRow> = sqlx::query_as(
            "SELECT id, date, hours FROM sleep_logs WHERE date >= ?1 ORDER BY date ASC",
        )
        .bind(format_date(window_start(today)))
        .fetch_all(self.db.as_ref())
        .await?;

        let logs = rows
            .into_iter()
            .map(SleepRow::into_log)
            .collect::<Result<Vec<_>>>()?;
        Ok(fill_window(today, &logs))
    }

    /// Record `hours` for `date`, replacing any earlier value for that date.
    ///
    /// A single upsert statement keyed on the unique `date` column, so it
    /// takes the write lock up front and waits out concurrent writers.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the statement fails.
    pub async fn log(&self, date: NaiveDate, hours: i64) -> Result<SleepLog> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO sleep_logs (date, hours) VALUES (?1, ?2)
             ON CONFLICT(date) DO UPDATE SET hours = excluded.hours
             RETURNING id",
        )
        .bind(format_date(date))
        .bind(hours)
        .fetch_one(self.db.as_ref())
        .await?;

        Ok(SleepLog { id, date, hours })
    }
}
