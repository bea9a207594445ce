//! GetGoalHandler - Query handler for a single goal.

use std::sync::Arc;

use crate::domain::foundation::{GoalId, UserId};
use crate::domain::goal::{Goal, GoalError};
use crate::ports::GoalRepository;

/// Query for one goal by id, scoped to its owner.
#[derive(Debug, Clone)]
pub struct GetGoalQuery {
    pub user_id: UserId,
    pub goal_id: GoalId,
}

/// Handler for fetching a goal.
///
/// A goal owned by someone else is indistinguishable from a missing one.
pub struct GetGoalHandler {
    goals: Arc<dyn GoalRepository>,
}

impl GetGoalHandler {
    pub fn new(goals: Arc<dyn GoalRepository>) -> Self {
        Self { goals }
    }

    pub async fn handle(&self, query: GetGoalQuery) -> Result<Goal, GoalError> {
        self.goals
            .find_by_id(query.goal_id, query.user_id)
            .await?
            .ok_or(GoalError::NotFound(query.goal_id))
    }
}
