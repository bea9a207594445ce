//! Progress value object: whole-number percentage from 0 to 100.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Error returned when a value is outside the valid progress range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("progress must be between 0 and 100, got {0}")]
pub struct ProgressOutOfRange(pub i64);

/// Completion percentage of a goal, always within 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Progress(u8);

impl<'de> Deserialize<'de> for Progress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Progress::try_new(value).map_err(serde::de::Error::custom)
    }
}

impl Progress {
    /// No milestones completed yet.
    pub const ZERO: Progress = Progress(0);

    /// Every milestone completed.
    pub const COMPLETE: Progress = Progress(100);

    /// Creates a progress value, rejecting anything outside 0..=100.
    pub fn try_new(value: i64) -> Result<Self, ProgressOutOfRange> {
        if (0..=100).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ProgressOutOfRange(value))
        }
    }

    /// Derives progress from milestone counts, rounding half away from zero.
    ///
    /// Zero total milestones yields zero progress rather than dividing by zero.
    pub fn from_counts(completed: usize, total: usize) -> Self {
        if total == 0 {
            return Self::ZERO;
        }
        let ratio = completed as f64 / total as f64;
        Self((ratio * 100.0).round().min(100.0) as u8)
    }

    /// The percentage as a plain number.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// True when every milestone is completed.
    pub fn is_complete(&self) -> bool {
        self.0 == 100
    }

    /// True when at least one milestone has moved.
    pub fn is_started(&self) -> bool {
        self.0 > 0
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
