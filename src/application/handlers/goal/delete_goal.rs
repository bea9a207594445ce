//! DeleteGoalHandler - Command handler for deleting a goal.

use std::sync::Arc;

use crate::domain::foundation::{GoalId, UserId};
use crate::domain::goal::GoalError;
use crate::ports::GoalRepository;

/// Command to delete a goal.
#[derive(Debug, Clone)]
pub struct DeleteGoalCommand {
    pub user_id: UserId,
    pub goal_id: GoalId,
}

/// Handler for goal deletion.
///
/// Check-ins referencing the goal are journal entries and stay behind.
pub struct DeleteGoalHandler {
    goals: Arc<dyn GoalRepository>,
}

impl DeleteGoalHandler {
    pub fn new(goals: Arc<dyn GoalRepository>) -> Self {
        Self { goals }
    }

    pub async fn handle(&self, cmd: DeleteGoalCommand) -> Result<(), GoalError> {
        if !self.goals.delete(cmd.goal_id, cmd.user_id).await? {
            return Err(GoalError::NotFound(cmd.goal_id));
        }
        Ok(())
    }
}
