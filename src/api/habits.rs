//! `/habits` handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::models::habit::Habit;
use crate::persistence::habit_repo::HabitRepo;
use crate::tracker::day_set::validate_marker;
use crate::Result;

use super::AppState;

/// Body of `POST /habits`.
#[derive(Debug, Deserialize)]
pub struct NewHabit {
    /// Display name.
    pub name: String,
}

fn repo(state: &AppState) -> HabitRepo {
    HabitRepo::new(Arc::clone(&state.db))
}

/// `GET /habits`
///
/// # Errors
///
/// Returns `AppError::Db` if the query fails.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Habit>>> {
    Ok(Json(repo(&state).list().await?))
}

/// `POST /habits`
///
/// # Errors
///
/// Returns `AppError::Db` if the insert fails.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewHabit>,
) -> Result<Json<Habit>> {
    let habit = repo(&state).create(&body.name).await?;
    info!(habit_id = habit.id, "habit created");
    Ok(Json(habit))
}

/// `PUT /habits/{id}/toggle/{day}`
///
/// # Errors
///
/// Returns `AppError::Validation` for a marker that cannot be stored, or
/// `AppError::NotFound` for an unknown id.
pub async fn toggle(
    State(state): State<AppState>,
    Path((id, day)): Path<(i64, String)>,
) -> Result<Json<Habit>> {
    validate_marker(&day)?;
    let habit = repo(&state).toggle_day(id, &day).await?;
    info!(
        habit_id = id,
        day = %day,
        done = habit.completed_days.contains(&day),
        "habit toggled"
    );
    Ok(Json(habit))
}

/// `DELETE /habits/{id}`
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown id.
pub async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Value>> {
    repo(&state).delete(id).await?;
    info!(habit_id = id, "habit deleted");
    Ok(Json(json!({ "msg": "Deleted" })))
}
