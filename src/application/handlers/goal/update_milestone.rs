//! UpdateMilestoneHandler - Command handler for milestone status changes.

use std::sync::Arc;

use crate::domain::foundation::{GoalId, UserId};
use crate::domain::goal::{Goal, GoalError, MilestoneStatus};
use crate::ports::GoalRepository;

/// Command to set the status of one weekly milestone.
#[derive(Debug, Clone)]
pub struct UpdateMilestoneCommand {
    pub user_id: UserId,
    pub goal_id: GoalId,
    pub week: u32,
    pub status: MilestoneStatus,
}

/// Handler for milestone updates.
///
/// The aggregate rolls the change up into progress, goal status, and
/// current week, and the repository persists all of it as one write.
pub struct UpdateMilestoneHandler {
    goals: Arc<dyn GoalRepository>,
}

impl UpdateMilestoneHandler {
    pub fn new(goals: Arc<dyn GoalRepository>) -> Self {
        Self { goals }
    }

    pub async fn handle(&self, cmd: UpdateMilestoneCommand) -> Result<Goal, GoalError> {
        // 1. Load the goal, scoped to its owner
        let mut goal = self
            .goals
            .find_by_id(cmd.goal_id, cmd.user_id)
            .await?
            .ok_or(GoalError::NotFound(cmd.goal_id))?;

        // 2. Apply the status change and its rollup
        goal.update_milestone_status(cmd.week, cmd.status)?;

        // 3. Persist milestones, progress, status, and current week together
        if !self.goals.update(&goal).await? {
            return Err(GoalError::NotFound(cmd.goal_id));
        }

        Ok(goal)
    }
}
