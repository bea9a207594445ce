//! GetGoalProgressHandler - Query handler for the progress summary.

use std::sync::Arc;

use crate::domain::foundation::{GoalId, Progress, UserId};
use crate::domain::goal::{GoalError, GoalStatus, MilestoneCounts};
use crate::ports::GoalRepository;

/// Query for the progress summary of one goal.
#[derive(Debug, Clone)]
pub struct GetGoalProgressQuery {
    pub user_id: UserId,
    pub goal_id: GoalId,
}

/// Compact progress view of a goal.
///
/// Progress, status, and current week are reported as stored, so values
/// written through the update escape hatch show up here verbatim; the
/// milestone counts are always recomputed from the journey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSummary {
    pub progress: Progress,
    pub status: GoalStatus,
    pub current_week: u32,
    pub milestones: MilestoneCounts,
}

/// Handler for the progress summary.
pub struct GetGoalProgressHandler {
    goals: Arc<dyn GoalRepository>,
}

impl GetGoalProgressHandler {
    pub fn new(goals: Arc<dyn GoalRepository>) -> Self {
        Self { goals }
    }

    pub async fn handle(&self, query: GetGoalProgressQuery) -> Result<ProgressSummary, GoalError> {
        let goal = self
            .goals
            .find_by_id(query.goal_id, query.user_id)
            .await?
            .ok_or(GoalError::NotFound(query.goal_id))?;

        Ok(ProgressSummary {
            progress: goal.progress(),
            status: goal.status(),
            current_week: goal.current_week(),
            milestones: goal.milestone_counts(),
        })
    }
}
