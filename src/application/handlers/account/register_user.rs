//! RegisterUserHandler - Command handler for account registration.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::user::{AccountError, EmailAddress, User};
use crate::ports::{PasswordHasher, TokenService, UserRepository};

/// Command to register a new account.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A signed-in account: the user plus a fresh access token.
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    pub user: User,
    pub token: String,
}

/// Handler for registration.
///
/// Validates before hashing, so a rejected request never pays for the
/// hash. Registration signs the user in immediately.
pub struct RegisterUserHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenService>,
}

impl RegisterUserHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    pub async fn handle(
        &self,
        cmd: RegisterUserCommand,
    ) -> Result<AuthenticatedAccount, AccountError> {
        // 1. Validate every field up front
        let email = EmailAddress::parse(&cmd.email)?;
        User::validate_name(&cmd.name)?;
        User::validate_password(&cmd.password)?;

        // 2. Reject duplicate emails
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AccountError::EmailTaken);
        }

        // 3. Hash the password and store the account
        let password_hash = self
            .hasher
            .hash(&cmd.password)
            .map_err(|err| AccountError::Internal(err.to_string()))?;
        let user = User::register(UserId::generate(), cmd.name, email, password_hash)?;
        self.users.insert(&user).await?;

        // 4. Sign the new account in
        let token = self
            .tokens
            .issue(user.id())
            .map_err(|err| AccountError::Internal(err.to_string()))?;

        Ok(AuthenticatedAccount { user, token })
    }
}
