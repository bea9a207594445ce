//! Password hashing contract.

use thiserror::Error;

/// Failure inside the hashing backend.
///
/// A wrong password is not an error; `verify` reports it as `Ok(false)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("password hashing failed: {0}")]
pub struct HashingError(pub String);

/// Hashes and verifies passwords.
///
/// Hashes are self-describing PHC strings, so verification needs no
/// extra parameters.
pub trait PasswordHasher: Send + Sync {
    /// Hashes a raw password with a fresh salt.
    fn hash(&self, password: &str) -> Result<String, HashingError>;

    /// Checks a raw password against a stored hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, HashingError>;
}
