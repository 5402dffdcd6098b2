//! Habit model for the monthly check-in grid.

use serde::{Deserialize, Serialize};

use crate::tracker::day_set::DaySet;

/// A recurring habit and the days it was completed on.
///
/// `completed_days` travels over the wire in its persisted comma-joined
/// form (`"1,5,12"`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct Habit {
    /// Store-assigned identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Days marked complete.
    pub completed_days: DaySet,
}
