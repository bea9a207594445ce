//! Aggregate status of a goal, derived from its progress percentage.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Progress, ValidationError};

/// Overall state of a goal.
///
/// Derived from the rounded progress percentage: `Completed` exactly when
/// progress is 100, `InProgress` when any progress has been made, and
/// `NotStarted` otherwise. The update escape hatch can also write this
/// field directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl GoalStatus {
    /// Derives the status implied by a progress percentage.
    pub fn from_progress(progress: Progress) -> Self {
        if progress.is_complete() {
            GoalStatus::Completed
        } else if progress.is_started() {
            GoalStatus::InProgress
        } else {
            GoalStatus::NotStarted
        }
    }

    /// Canonical lowercase name, as stored and sent over the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::NotStarted => "not_started",
            GoalStatus::InProgress => "in_progress",
            GoalStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GoalStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_started" => Ok(GoalStatus::NotStarted),
            "in_progress" => Ok(GoalStatus::InProgress),
            "completed" => Ok(GoalStatus::Completed),
            other => Err(ValidationError::invalid(
                "status",
                format!("unknown status '{}'", other),
            )),
        }
    }
}
