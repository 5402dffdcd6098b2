//! Task repository for `SQLite` persistence.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::models::task::{NewTask, Task};
use crate::{AppError, Result};

use super::db::Database;
use super::{format_date, parse_date};

/// Repository for task records.
#[derive(Clone)]
pub struct TaskRepo {
    db: Arc<Database>,
}

/// Internal row struct for `SQLite` deserialization.
#[derive(sqlx::FromRow)]
struct TaskRow {
    id: i64,
    content: String,
    is_done: i64,
    is_mandatory: i64,
    created_at: String,
}

impl TaskRow {
    fn into_task(self) -> Result<Task> {
        Ok(Task {
            id: self.id,
            content: self.content,
            is_done: self.is_done != 0,
            is_mandatory: self.is_mandatory != 0,
            created_at: parse_date("created_at", &self.created_at)?,
        })
    }
}

impl TaskRepo {
    /// Create a new repository instance.
    #[must_use]
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// List every task in creation order.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the query fails.
    pub async fn list(&self) -> Result<Vec<Task>> {
        let rows: Vec<TaskRow> = sqlx::query_as(
            "SELECT id, content, is_done, is_mandatory, created_at FROM tasks ORDER BY id ASC",
        )
        .fetch_all(self.db.as_ref())
        .await?;

        rows.into_iter().map(TaskRow::into_task).collect()
    }

    /// Insert a task created on `today`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the insert fails.
    pub async fn create(&self, new: &NewTask, today: NaiveDate) -> Result<Task> {
        let result = sqlx::query(
            "INSERT INTO tasks (content, is_done, is_mandatory, created_at)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&new.content)
        .bind(i64::from(new.is_done))
        .bind(i64::from(new.is_mandatory))
        .bind(format_date(today))
        .execute(self.db.as_ref())
        .await?;

        Ok(Task {
            id: result.last_insert_rowid(),
            content: new.content.clone(),
            is_done: new.is_done,
            is_mandatory: new.is_mandatory,
            created_at: today,
        })
    }

    /// Set the completion flag and return the updated task.
    ///
    /// Content and the mandatory flag are never touched here.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if no task has this identifier, or
    /// `AppError::Db` if the transaction fails.
    pub async fn set_done(&self, id: i64, is_done: bool) -> Result<Task> {
        let mut tx = self.db.begin().await?;

        let result = sqlx::query("UPDATE tasks SET is_done = ?1 WHERE id = ?2")
            .bind(i64::from(is_done))
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("task {id}")));
        }

        let row: TaskRow = sqlx::query_as(
            "SELECT id, content, is_done, is_mandatory, created_at FROM tasks WHERE id = ?1",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        row.into_task()
    }

    /// Delete a task.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if no task has this identifier, or
    /// `AppError::Db` if the delete fails.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?1")
            .bind(id)
            .execute(self.db.as_ref())
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("task {id}")));
        }
        Ok(())
    }
}
