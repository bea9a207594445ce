//! Persistence gateway for user accounts.

use async_trait::async_trait;

use crate::domain::foundation::StoreError;
use crate::domain::user::{EmailAddress, User};

/// Stores and retrieves accounts.
///
/// Email uniqueness is checked by lookup before insert; the store backs
/// that up with a unique constraint for the concurrent-registration race.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a freshly registered account.
    async fn insert(&self, user: &User) -> Result<(), StoreError>;

    /// Looks an account up by its normalized email address.
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, StoreError>;
}
