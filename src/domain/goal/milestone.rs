//! Weekly milestones that make up a goal's learning journey.
//!
//! A goal created for `n` weeks always carries exactly `n` milestones,
//! one per week from 1 to `n`. They are created together with the goal,
//! either from a generated plan or from the placeholder journey, and only
//! their status changes afterwards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// State of a single weekly milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl MilestoneStatus {
    /// Canonical lowercase name, as stored and sent over the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneStatus::NotStarted => "not_started",
            MilestoneStatus::InProgress => "in_progress",
            MilestoneStatus::Completed => "completed",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, MilestoneStatus::Completed)
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self, MilestoneStatus::InProgress)
    }
}

impl fmt::Display for MilestoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MilestoneStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_started" => Ok(MilestoneStatus::NotStarted),
            "in_progress" => Ok(MilestoneStatus::InProgress),
            "completed" => Ok(MilestoneStatus::Completed),
            other => Err(ValidationError::invalid(
                "status",
                format!("unknown milestone status '{}'", other),
            )),
        }
    }
}

/// One entry of a journey plan produced by a generator.
///
/// Unvalidated generator output. [`Milestone::journey_from_plan`] decides
/// whether a whole plan is usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestonePlan {
    pub week: u32,
    pub objective: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub resources: Vec<String>,
}

/// A single week of a goal's journey.
///
/// Serializes to the stored and wire representation directly, so the field
/// names here are part of the persisted format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    week: u32,
    objective: String,
    dependencies: Vec<String>,
    #[serde(default)]
    status: MilestoneStatus,
    resources: Vec<String>,
}

impl Milestone {
    /// Creates a not-started milestone for the given week.
    pub fn new(
        week: u32,
        objective: impl Into<String>,
        dependencies: Vec<String>,
        resources: Vec<String>,
    ) -> Self {
        Self {
            week,
            objective: objective.into(),
            dependencies,
            status: MilestoneStatus::NotStarted,
            resources,
        }
    }

    /// Builds the fallback journey: one generic milestone per week.
    pub fn placeholder_journey(duration_weeks: u32) -> Vec<Milestone> {
        (1..=duration_weeks)
            .map(|week| Milestone::new(week, format!("Week {} learning", week), vec![], vec![]))
            .collect()
    }

    /// Converts a generated plan into a journey, ordered by week.
    ///
    /// A plan is usable only when it has exactly `duration_weeks` entries
    /// whose week numbers form a permutation of `1..=duration_weeks`.
    /// Returns `None` for anything else so the caller can fall back to the
    /// placeholder journey.
    pub fn journey_from_plan(
        plan: Vec<MilestonePlan>,
        duration_weeks: u32,
    ) -> Option<Vec<Milestone>> {
        if plan.len() != duration_weeks as usize {
            return None;
        }
        let mut entries = plan;
        entries.sort_by_key(|entry| entry.week);
        for (index, entry) in entries.iter().enumerate() {
            if entry.week != index as u32 + 1 {
                return None;
            }
        }
        Some(
            entries
                .into_iter()
                .map(|entry| {
                    Milestone::new(
                        entry.week,
                        entry.objective,
                        entry.dependencies,
                        entry.resources,
                    )
                })
                .collect(),
        )
    }

    pub fn week(&self) -> u32 {
        self.week
    }

    pub fn objective(&self) -> &str {
        &self.objective
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn status(&self) -> MilestoneStatus {
        self.status
    }

    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    /// Overwrites the status. Any transition is allowed, including moving
    /// a completed milestone back to not started.
    pub fn set_status(&mut self, status: MilestoneStatus) {
        self.status = status;
    }
}
