//! Errors for goal operations.

use thiserror::Error;

use crate::domain::foundation::{GoalId, StoreError, ValidationError};

/// Failure of a goal command or query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GoalError {
    /// No goal with this id exists for the requesting user.
    #[error("goal {0} not found")]
    NotFound(GoalId),

    /// The goal exists but has no milestone for the requested week.
    #[error("goal {goal_id} has no milestone for week {week}")]
    MilestoneNotFound { goal_id: GoalId, week: u32 },

    /// An input field was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The persistence layer could not be reached.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// An unexpected failure that should not leak details to clients.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GoalError {
    /// There is no milestone for this week in this goal.
    pub fn milestone_not_found(goal_id: GoalId, week: u32) -> Self {
        Self::MilestoneNotFound { goal_id, week }
    }

    /// True for both goal-level and milestone-level not-found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::MilestoneNotFound { .. })
    }
}

impl From<StoreError> for GoalError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(reason) => Self::StoreUnavailable(reason),
            StoreError::Query(reason) => Self::Internal(reason),
        }
    }
}
