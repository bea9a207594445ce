//! HTTP DTOs for goal endpoints.
//!
//! These types define the JSON request/response structure for the goal API.
//! They serve as the boundary between HTTP and the application layer.

use serde::{Deserialize, Serialize};

use crate::application::handlers::goal::ProgressSummary;
use crate::domain::foundation::{Progress, ValidationError};
use crate::domain::goal::{Complexity, Goal, GoalChanges, GoalStatus, Milestone, MilestoneStatus};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a new goal.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGoalRequest {
    /// Short goal title.
    pub title: String,
    /// What the learner wants to achieve.
    pub description: String,
    /// Free-text category label.
    pub category: String,
    /// Difficulty tier for the generated journey.
    pub complexity: Complexity,
    /// Journey length in weeks.
    pub duration: u32,
}

/// Request to update fields of an existing goal.
///
/// Every field distinguishes "absent" from an explicit JSON `null`:
/// absent fields are left unchanged, while `null` is rejected because no
/// goal field is nullable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGoalRequest {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub title: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub category: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub complexity: Option<Option<Complexity>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub duration: Option<Option<u32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub progress: Option<Option<i64>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub status: Option<Option<GoalStatus>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub current_week: Option<Option<u32>>,
}

impl UpdateGoalRequest {
    /// Converts the wire-level update into validated domain changes.
    pub fn into_changes(self) -> Result<GoalChanges, ValidationError> {
        let progress = match non_null("progress", self.progress)? {
            Some(value) => Some(
                Progress::try_new(value)
                    .map_err(|_| ValidationError::out_of_range("progress", 0, 100, value))?,
            ),
            None => None,
        };
        Ok(GoalChanges {
            title: non_null("title", self.title)?,
            description: non_null("description", self.description)?,
            category: non_null("category", self.category)?,
            complexity: non_null("complexity", self.complexity)?,
            duration_weeks: non_null("duration", self.duration)?,
            progress,
            status: non_null("status", self.status)?,
            current_week: non_null("current_week", self.current_week)?,
        })
    }
}

/// Request to set the status of one weekly milestone.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMilestoneRequest {
    /// New status for the milestone.
    pub status: MilestoneStatus,
}

fn non_null<T>(
    field: &'static str,
    value: Option<Option<T>>,
) -> Result<Option<T>, ValidationError> {
    match value {
        None => Ok(None),
        Some(Some(inner)) => Ok(Some(inner)),
        Some(None) => Err(ValidationError::invalid(field, "must not be null")),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Full goal representation.
#[derive(Debug, Clone, Serialize)]
pub struct GoalResponse {
    /// Goal ID.
    pub id: String,
    /// Owning user ID.
    pub user_id: String,
    /// Goal title.
    pub title: String,
    /// Goal description.
    pub description: String,
    /// Category label.
    pub category: String,
    /// Difficulty tier.
    pub complexity: Complexity,
    /// Journey length in weeks.
    pub duration: u32,
    /// Weekly milestones, ordered by week.
    pub milestones: Vec<Milestone>,
    /// Completion percentage (0-100).
    pub progress: u8,
    /// Rolled-up goal status.
    pub status: GoalStatus,
    /// Week the learner last touched.
    pub current_week: u32,
    /// When the goal was created (ISO 8601).
    pub created_at: String,
}

impl From<&Goal> for GoalResponse {
    fn from(goal: &Goal) -> Self {
        Self {
            id: goal.id().to_string(),
            user_id: goal.user_id().to_string(),
            title: goal.title().to_string(),
            description: goal.description().to_string(),
            category: goal.category().to_string(),
            complexity: goal.complexity(),
            duration: goal.duration_weeks(),
            milestones: goal.milestones().to_vec(),
            progress: goal.progress().value(),
            status: goal.status(),
            current_week: goal.current_week(),
            created_at: goal.created_at().as_datetime().to_rfc3339(),
        }
    }
}

/// Envelope for a single goal.
#[derive(Debug, Clone, Serialize)]
pub struct GoalEnvelope {
    pub goal: GoalResponse,
}

impl From<&Goal> for GoalEnvelope {
    fn from(goal: &Goal) -> Self {
        Self {
            goal: GoalResponse::from(goal),
        }
    }
}

/// Envelope for the goal list.
#[derive(Debug, Clone, Serialize)]
pub struct GoalListEnvelope {
    pub goals: Vec<GoalResponse>,
}

impl From<&[Goal]> for GoalListEnvelope {
    fn from(goals: &[Goal]) -> Self {
        Self {
            goals: goals.iter().map(GoalResponse::from).collect(),
        }
    }
}

/// Response after deleting a goal.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteGoalResponse {
    pub message: String,
    pub deleted_id: String,
}

impl DeleteGoalResponse {
    pub fn new(deleted_id: impl Into<String>) -> Self {
        Self {
            message: "Goal deleted successfully".to_string(),
            deleted_id: deleted_id.into(),
        }
    }
}

/// Acknowledgement for milestone updates.
#[derive(Debug, Clone, Serialize)]
pub struct MilestoneUpdatedResponse {
    pub message: String,
}

impl MilestoneUpdatedResponse {
    pub fn new() -> Self {
        Self {
            message: "Milestone updated successfully".to_string(),
        }
    }
}

impl Default for MilestoneUpdatedResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact progress view of one goal.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressSummaryResponse {
    /// Completion percentage (0-100).
    pub progress: u8,
    /// Rolled-up goal status.
    pub status: GoalStatus,
    /// Milestone counts per status.
    pub milestones: MilestoneCountsResponse,
    /// Week the learner last touched.
    pub current_week: u32,
}

/// Milestone counts per status.
#[derive(Debug, Clone, Serialize)]
pub struct MilestoneCountsResponse {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub not_started: usize,
}

impl From<ProgressSummary> for ProgressSummaryResponse {
    fn from(summary: ProgressSummary) -> Self {
        Self {
            progress: summary.progress.value(),
            status: summary.status,
            milestones: MilestoneCountsResponse {
                total: summary.milestones.total,
                completed: summary.milestones.completed,
                in_progress: summary.milestones.in_progress,
                not_started: summary.milestones.not_started,
            },
            current_week: summary.current_week,
        }
    }
}
