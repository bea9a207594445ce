//! Authentication errors shared between the token service and middleware.

use thiserror::Error;

/// Failure while issuing or resolving an access token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token was malformed, tampered with, or signed with another key.
    #[error("authentication token is invalid")]
    InvalidToken,

    /// The token was valid once but its expiry has passed.
    #[error("authentication token has expired")]
    TokenExpired,

    /// A token could not be produced for a valid account.
    #[error("token issuance failed: {0}")]
    IssuanceFailed(String),
}
