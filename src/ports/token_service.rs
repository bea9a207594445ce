//! Access token contract.

use crate::domain::foundation::{AuthError, UserId};

/// Issues and resolves bearer access tokens.
///
/// A resolved token yields only the user id it was issued for; request
/// handlers trust that id without a per-request account lookup.
pub trait TokenService: Send + Sync {
    /// Issues a fresh token for an authenticated account.
    fn issue(&self, user_id: UserId) -> Result<String, AuthError>;

    /// Resolves a presented token back to the user id it names.
    fn resolve(&self, token: &str) -> Result<UserId, AuthError>;
}
