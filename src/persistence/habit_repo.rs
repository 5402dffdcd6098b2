//! Habit repository for `SQLite` persistence.

use std::sync::Arc;

use tracing::debug;

use crate::models::habit::Habit;
use crate::tracker::day_set::DaySet;
use crate::{AppError, Result};

use super::db::Database;

/// Repository for habit records.
#[derive(Clone)]
pub struct HabitRepo {
    db: Arc<Database>,
}

/// Internal row struct for `SQLite` deserialization.
#[derive(sqlx::FromRow)]
struct HabitRow {
    id: i64,
    name: String,
    completed_days: String,
}

impl From<HabitRow> for Habit {
    fn from(row: HabitRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            completed_days: DaySet::decode(&row.completed_days),
        }
    }
}

impl HabitRepo {
    /// Create a new repository instance.
    #[must_use]
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// List every habit in creation order.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the query fails.
    pub async fn list(&self) -> Result<Vec<Habit>> {
        let rows: Vec<HabitRow> =
            sqlx::query_as("SELECT id, name, completed_days FROM habits ORDER BY id ASC")
                .fetch_all(self.db.as_ref())
                .await?;

        Ok(rows.into_iter().map(Habit::from).collect())
    }

    /// Insert a habit with no completed days.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the insert fails.
    pub async fn create(&self, name: &str) -> Result<Habit> {
        let result = sqlx::query("INSERT INTO habits (name, completed_days) VALUES (?1, '')")
            .bind(name)
            .execute(self.db.as_ref())
            .await?;

        Ok(Habit {
            id: result.last_insert_rowid(),
            name: name.to_owned(),
            completed_days: DaySet::default(),
        })
    }

    /// Toggle `day` in the habit's completed days and persist the result.
    ///
    /// Read, toggle and write happen in one `IMMEDIATE` transaction: the
    /// write lock is held from the first read, so concurrent toggles on the
    /// same habit queue behind the busy timeout instead of failing or
    /// losing an update.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if no habit has this identifier, or
    /// `AppError::Db` if the transaction fails.
    pub async fn toggle_day(&self, id: i64, day: &str) -> Result<Habit> {
        let mut tx = self.db.begin_with("BEGIN IMMEDIATE").await?;

        let row: Option<HabitRow> =
            sqlx::query_as("SELECT id, name, completed_days FROM habits WHERE id = ?1")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let mut habit = Habit::from(row.ok_or_else(|| AppError::NotFound(format!("habit {id}")))?);

        habit.completed_days = habit.completed_days.toggle(day);
        let encoded = habit.completed_days.encode();

        sqlx::query("UPDATE habits SET completed_days = ?1 WHERE id = ?2")
            .bind(&encoded)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        debug!(habit_id = id, day, completed_days = %encoded, "habit day toggled");
        Ok(habit)
    }

    /// Delete a habit.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if no habit has this identifier, or
    /// `AppError::Db` if the delete fails.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM habits WHERE id = ?1")
            .bind(id)
            .execute(self.db.as_ref())
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("habit {id}")));
        }
        Ok(())
    }
}
