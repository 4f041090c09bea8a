use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::error::RoutineError;

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}$").unwrap());

/// One scheduled task.
///
/// Times are "HH:MM" strings compared lexicographically; priority and
/// category are free-form (the UI constrains them, the core does not).
/// A task is owned by exactly one `DaySchedule` — replication across days
/// or through templates always goes through `clone`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub start: String,
    pub end: String,
    pub priority: String,
    pub category: String,
    pub completed: bool,
}

impl Task {
    pub fn new(
        name: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
        priority: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            start: start.into(),
            end: end.into(),
            priority: priority.into(),
            category: category.into(),
            completed: false,
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}–{} - {} [{}]",
            self.start, self.end, self.name, self.priority
        )
    }
}

/// Validate a "HH:MM" time range before constructing a task.
///
/// Enforced here at the caller level; the codecs and loaders stay tolerant
/// of whatever strings are already on disk.
pub fn validate_time_range(start: &str, end: &str) -> Result<(), RoutineError> {
    for value in [start, end] {
        if !TIME_RE.is_match(value) {
            return Err(RoutineError::InvalidTime {
                value: value.to_string(),
            });
        }
    }
    if end < start {
        return Err(RoutineError::EndBeforeStart {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    Ok(())
}
