//! `/sleep` handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::models::sleep::DayPoint;
use crate::persistence::sleep_repo::SleepRepo;
use crate::Result;

use super::AppState;

/// Body of `POST /sleep`.
#[derive(Debug, Deserialize)]
pub struct SleepRequest {
    /// Hours slept today.
    pub hours: i64,
}

/// `GET /sleep`: the seven days ending today, oldest first.
///
/// # Errors
///
/// Returns `AppError::Db` if the query fails.
pub async fn window(State(state): State<AppState>) -> Result<Json<Vec<DayPoint>>> {
    let repo = SleepRepo::new(Arc::clone(&state.db));
    Ok(Json(repo.window(state.clock.today()).await?))
}

/// `POST /sleep`: upsert today's record.
///
/// # Errors
///
/// Returns `AppError::Db` if the transaction fails.
pub async fn log(
    State(state): State<AppState>,
    Json(body): Json<SleepRequest>,
) -> Result<Json<Value>> {
    let repo = SleepRepo::new(Arc::clone(&state.db));
    let entry = repo.log(state.clock.today(), body.hours).await?;
    info!(date = %entry.date, hours = entry.hours, "sleep logged");
    Ok(Json(json!({ "message": "Sleep logged" })))
}
