//! Errors for registration and login.

use thiserror::Error;

use crate::domain::foundation::{StoreError, ValidationError};

/// Failure of an account operation.
///
/// Login failures collapse into [`AccountError::InvalidCredentials`]
/// whether the email is unknown or the password is wrong, so responses
/// do not reveal which accounts exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// Another account already uses this email address.
    #[error("email already registered")]
    EmailTaken,

    /// The email/password pair did not match an account.
    #[error("incorrect email or password")]
    InvalidCredentials,

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

impl From<StoreError> for AccountError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(reason) => Self::StoreUnavailable(reason),
            StoreError::Query(reason) => Self::Internal(reason),
        }
    }
}
