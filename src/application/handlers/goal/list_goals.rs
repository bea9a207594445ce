//! ListGoalsHandler - Query handler for a user's goals.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::goal::{Goal, GoalError};
use crate::ports::GoalRepository;

/// Query for all goals of one user.
#[derive(Debug, Clone)]
pub struct ListGoalsQuery {
    pub user_id: UserId,
}

/// Handler for listing goals, newest first.
pub struct ListGoalsHandler {
    goals: Arc<dyn GoalRepository>,
}

impl ListGoalsHandler {
    pub fn new(goals: Arc<dyn GoalRepository>) -> Self {
        Self { goals }
    }

    pub async fn handle(&self, query: ListGoalsQuery) -> Result<Vec<Goal>, GoalError> {
        Ok(self.goals.find_by_owner(query.user_id).await?)
    }
}
