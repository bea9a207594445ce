//! LoginUserHandler - Command handler for signing in.

use std::sync::Arc;

use crate::domain::user::{AccountError, EmailAddress};
use crate::ports::{PasswordHasher, TokenService, UserRepository};

use super::register_user::AuthenticatedAccount;

/// Command to sign in with email and password.
#[derive(Debug, Clone)]
pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

/// Handler for login.
///
/// An unknown email and a wrong password produce the same error, so a
/// login response never confirms whether an address is registered.
pub struct LoginUserHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenService>,
}

impl LoginUserHandler {
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

    pub async fn handle(&self, cmd: LoginUserCommand) -> Result<AuthenticatedAccount, AccountError> {
        // 1. A malformed email can never match an account
        let email = match EmailAddress::parse(&cmd.email) {
            Ok(email) => email,
            Err(_) => return Err(AccountError::InvalidCredentials),
        };

        // 2. Look the account up and check the password
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        let matches = self
            .hasher
            .verify(&cmd.password, user.password_hash())
            .map_err(|err| AccountError::Internal(err.to_string()))?;
        if !matches {
            return Err(AccountError::InvalidCredentials);
        }

        // 3. Issue a fresh token
        let token = self
            .tokens
            .issue(user.id())
            .map_err(|err| AccountError::Internal(err.to_string()))?;

        Ok(AuthenticatedAccount { user, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::support::{
        InMemoryUsers, PlainTextHasher, StaticTokenService,
    };
    use crate::domain::foundation::{StoreError, UserId};
    use crate::domain::user::User;
    use crate::ports::PasswordHasher as _;

    fn stored_user(email: &str, password: &str) -> User {
        let hash = PlainTextHasher.hash(password).unwrap();
        User::register(
            UserId::generate(),
            "Ada Lovelace",
            EmailAddress::parse(email).unwrap(),
            hash,
        )
        .unwrap()
    }

    fn handler(users: Arc<InMemoryUsers>) -> LoginUserHandler {
        LoginUserHandler::new(users, Arc::new(PlainTextHasher), Arc::new(StaticTokenService))
    }

    #[tokio::test]
    async fn signs_in_with_correct_credentials() {
        let users = Arc::new(
            InMemoryUsers::new().with_user(stored_user("ada@example.com", "correct horse")),
        );

        let account = handler(users)
            .handle(LoginUserCommand {
                email: "ADA@example.com".to_string(),
                password: "correct horse".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(account.user.email().as_str(), "ada@example.com");
        assert_eq!(account.token, format!("token-{}", account.user.id()));
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_are_indistinguishable() {
        let users = Arc::new(
            InMemoryUsers::new().with_user(stored_user("ada@example.com", "correct horse")),
        );
        let h = handler(users);

        let wrong_password = h
            .handle(LoginUserCommand {
                email: "ada@example.com".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();

        let unknown_email = h
            .handle(LoginUserCommand {
                email: "nobody@example.com".to_string(),
                password: "correct horse".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(wrong_password, AccountError::InvalidCredentials);
        assert_eq!(unknown_email, wrong_password);
    }

    #[tokio::test]
    async fn malformed_email_is_invalid_credentials_not_validation() {
        let h = handler(Arc::new(InMemoryUsers::new()));
        let err = h
            .handle(LoginUserCommand {
                email: "not-an-email".to_string(),
                password: "whatever".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err, AccountError::InvalidCredentials);
    }

    #[tokio::test]
    async fn store_failure_surfaces_as_store_unavailable() {
        let users = Arc::new(InMemoryUsers::failing(StoreError::unavailable("down")));
        let err = handler(users)
            .handle(LoginUserCommand {
                email: "ada@example.com".to_string(),
                password: "correct horse".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AccountError::StoreUnavailable(_)));
    }
}
