//! `/tasks` handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use crate::models::task::{NewTask, Task};
use crate::persistence::task_repo::TaskRepo;
use crate::Result;

use super::AppState;

/// Body of `GET /tasks`.
#[derive(Debug, Serialize)]
pub struct TaskList {
    /// Every stored task.
    pub tasks: Vec<Task>,
}

fn repo(state: &AppState) -> TaskRepo {
    TaskRepo::new(Arc::clone(&state.db))
}

/// `GET /tasks`
///
/// # Errors
///
/// Returns `AppError::Db` if the query fails.
pub async fn list(State(state): State<AppState>) -> Result<Json<TaskList>> {
    let tasks = repo(&state).list().await?;
    Ok(Json(TaskList { tasks }))
}

/// `POST /tasks`
///
/// # Errors
///
/// Returns `AppError::Db` if the insert fails.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewTask>,
) -> Result<Json<Task>> {
    let task = repo(&state).create(&body, state.clock.today()).await?;
    info!(task_id = task.id, is_mandatory = task.is_mandatory, "task created");
    Ok(Json(task))
}

/// `PUT /tasks/{id}`. Only `is_done` from the body is applied.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown id.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<NewTask>,
) -> Result<Json<Task>> {
    let task = repo(&state).set_done(id, body.is_done).await?;
    info!(task_id = id, is_done = task.is_done, "task updated");
    Ok(Json(task))
}

/// `DELETE /tasks/{id}`
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown id.
pub async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Value>> {
    repo(&state).delete(id).await?;
    info!(task_id = id, "task deleted");
    Ok(Json(json!({ "message": "Deleted" })))
}
