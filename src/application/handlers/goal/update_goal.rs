//! UpdateGoalHandler - Command handler for partial goal updates.

use std::sync::Arc;

use crate::domain::foundation::{GoalId, UserId};
use crate::domain::goal::{Goal, GoalChanges, GoalError};
use crate::ports::GoalRepository;

/// Command to apply a partial update to a goal.
#[derive(Debug, Clone)]
pub struct UpdateGoalCommand {
    pub user_id: UserId,
    pub goal_id: GoalId,
    pub changes: GoalChanges,
}

/// Handler for partial updates, including the progress/status escape
/// hatch. An update with no fields set is a no-op that still checks the
/// goal exists.
pub struct UpdateGoalHandler {
    goals: Arc<dyn GoalRepository>,
}

impl UpdateGoalHandler {
    pub fn new(goals: Arc<dyn GoalRepository>) -> Self {
        Self { goals }
    }

    pub async fn handle(&self, cmd: UpdateGoalCommand) -> Result<Goal, GoalError> {
        // 1. Load the goal, scoped to its owner
        let mut goal = self
            .goals
            .find_by_id(cmd.goal_id, cmd.user_id)
            .await?
            .ok_or(GoalError::NotFound(cmd.goal_id))?;

        // 2. Nothing to change: return the goal as stored
        if cmd.changes.is_empty() {
            return Ok(goal);
        }

        // 3. Apply and persist
        goal.apply_update(cmd.changes)?;
        if !self.goals.update(&goal).await? {
            return Err(GoalError::NotFound(cmd.goal_id));
        }

        Ok(goal)
    }
}
