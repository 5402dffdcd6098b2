//! Habit day-set codec.
//!
//! A habit's completed days are persisted as a single comma-joined text
//! column (`"1,5,12"`). Markers are opaque tokens: nothing here checks
//! them against a calendar, and whatever is stored decodes as-is.

use serde::{Deserialize, Serialize};

use crate::{AppError, Result};

/// Separator between markers in the persisted encoding.
pub const DELIMITER: char = ',';

/// Insertion-ordered set of day markers on which a habit was completed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct DaySet {
    markers: Vec<String>,
}

impl DaySet {
    /// Decode the persisted form. The empty string is the empty set.
    ///
    /// Duplicate or malformed tokens already in storage pass through
    /// unchanged.
    #[must_use]
    pub fn decode(encoded: &str) -> Self {
        if encoded.is_empty() {
            return Self::default();
        }
        Self {
            markers: encoded.split(DELIMITER).map(str::to_owned).collect(),
        }
    }

    /// Encode to the persisted form. The empty set is the empty string.
    ///
    /// `encode(decode(s)) == s` holds when `s` has no duplicate tokens and
    /// no empty tokens between delimiters.
    #[must_use]
    pub fn encode(&self) -> String {
        self.markers.join(&DELIMITER.to_string())
    }

    /// Remove `day` if present (every occurrence), otherwise append it once.
    #[must_use]
    pub fn toggle(mut self, day: &str) -> Self {
        if self.contains(day) {
            self.markers.retain(|m| m != day);
        } else {
            self.markers.push(day.to_owned());
        }
        self
    }

    /// Whether `day` is marked complete.
    #[must_use]
    pub fn contains(&self, day: &str) -> bool {
        self.markers.iter().any(|m| m == day)
    }

    /// Number of stored markers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Whether no day is marked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Iterate markers in insertion order.
    pub fn markers(&self) -> impl Iterator<Item = &str> {
        self.markers.iter().map(String::as_str)
    }
}

impl From<String> for DaySet {
    fn from(encoded: String) -> Self {
        Self::decode(&encoded)
    }
}

impl From<DaySet> for String {
    fn from(set: DaySet) -> Self {
        set.encode()
    }
}

impl<S: Into<String>> FromIterator<S> for DaySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::default();
        for day in iter {
            let day = day.into();
            if !set.contains(&day) {
                set.markers.push(day);
            }
        }
        set
    }
}

/// Check that a marker can round-trip through the encoding.
///
/// # Errors
///
/// Returns `AppError::Validation` if the marker is blank or contains the
/// delimiter.
pub fn validate_marker(day: &str) -> Result<()> {
    if day.trim().is_empty() {
        return Err(AppError::Validation("day marker must not be empty".into()));
    }
    if day.contains(DELIMITER) {
        return Err(AppError::Validation(format!(
            "day marker must not contain '{DELIMITER}': {day}"
        )));
    }
    Ok(())
}
