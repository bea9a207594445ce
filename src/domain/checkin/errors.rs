//! Errors for check-in operations and progress reports.

use thiserror::Error;

use crate::domain::foundation::{GoalId, StoreError};

/// Failure while recording a check-in or building a progress report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckinError {
    /// The progress report was requested for a goal the user does not
    /// have.
    #[error("goal {0} not found")]
    GoalNotFound(GoalId),

    /// The persistence layer could not be reached.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// An unexpected failure that should not leak details to clients.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for CheckinError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(reason) => Self::StoreUnavailable(reason),
            StoreError::Query(reason) => Self::Internal(reason),
        }
    }
}
