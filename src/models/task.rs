//! Task ("mission") model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A daily mission on the task board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct Task {
    /// Store-assigned identifier; immutable after creation.
    pub id: i64,
    /// Free-text description.
    pub content: String,
    /// Whether the mission has been completed.
    pub is_done: bool,
    /// Whether the mission is a mandatory ("critical") one.
    pub is_mandatory: bool,
    /// Calendar day the mission was created.
    pub created_at: NaiveDate,
}

/// Fields accepted when creating a task.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct NewTask {
    /// Free-text description.
    pub content: String,
    /// Initial completion flag.
    #[serde(default)]
    pub is_done: bool,
    /// Initial mandatory flag.
    #[serde(default)]
    pub is_mandatory: bool,
}

impl NewTask {
    /// A not-done, optional task with the given content.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_done: false,
            is_mandatory: false,
        }
    }
}
