//! HTTP DTOs for check-in and progress report endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::checkin::{ProgressMetrics, ProgressReport};
use crate::domain::checkin::Checkin;

use super::super::goal::GoalResponse;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to record a progress check-in.
///
/// Only the goal reference is required; every narrative field defaults to
/// empty so a minimal check-in is just a goal id.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCheckinRequest {
    /// The goal this check-in refers to.
    pub goal_id: String,
    /// Free-form notes on progress made.
    #[serde(default)]
    pub progress_notes: String,
    /// Names of milestones the learner considers done.
    #[serde(default)]
    pub completed_milestones: Vec<String>,
    /// What got in the way.
    #[serde(default)]
    pub challenges: String,
    /// What the learner plans next.
    #[serde(default)]
    pub next_steps: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Acknowledgement after recording a check-in.
#[derive(Debug, Clone, Serialize)]
pub struct CheckinRecordedResponse {
    pub message: String,
}

impl CheckinRecordedResponse {
    pub fn new() -> Self {
        Self {
            message: "Check-in recorded successfully".to_string(),
        }
    }
}

impl Default for CheckinRecordedResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// One recorded check-in.
#[derive(Debug, Clone, Serialize)]
pub struct CheckinResponse {
    /// Check-in ID.
    pub id: String,
    /// Owning user ID.
    pub user_id: String,
    /// Referenced goal ID.
    pub goal_id: String,
    /// Free-form progress notes.
    pub progress_notes: String,
    /// Milestone names the learner reported done.
    pub completed_milestones: Vec<String>,
    /// Reported challenges.
    pub challenges: String,
    /// Planned next steps.
    pub next_steps: String,
    /// When the check-in was recorded (ISO 8601).
    pub checkin_date: String,
}

impl From<&Checkin> for CheckinResponse {
    fn from(checkin: &Checkin) -> Self {
        Self {
            id: checkin.id().to_string(),
            user_id: checkin.user_id().to_string(),
            goal_id: checkin.goal_id().to_string(),
            progress_notes: checkin.progress_notes().to_string(),
            completed_milestones: checkin.completed_milestones().to_vec(),
            challenges: checkin.challenges().to_string(),
            next_steps: checkin.next_steps().to_string(),
            checkin_date: checkin.checkin_date().as_datetime().to_rfc3339(),
        }
    }
}

/// Derived metrics in the progress report.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressMetricsResponse {
    /// Fraction of milestones completed, 0.0 to 1.0.
    pub completion_rate: f64,
    /// Completed milestones per elapsed week.
    pub velocity: f64,
}

impl From<ProgressMetrics> for ProgressMetricsResponse {
    fn from(metrics: ProgressMetrics) -> Self {
        Self {
            completion_rate: metrics.completion_rate,
            velocity: metrics.velocity,
        }
    }
}

/// Full progress report: the goal, its check-ins, and derived metrics.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressReportResponse {
    pub goal: GoalResponse,
    pub checkins: Vec<CheckinResponse>,
    pub progress_metrics: ProgressMetricsResponse,
}

impl From<&ProgressReport> for ProgressReportResponse {
    fn from(report: &ProgressReport) -> Self {
        Self {
            goal: GoalResponse::from(&report.goal),
            checkins: report.checkins.iter().map(CheckinResponse::from).collect(),
            progress_metrics: ProgressMetricsResponse::from(report.metrics),
        }
    }
}
