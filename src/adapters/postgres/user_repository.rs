//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgRow};
use sqlx::Row;

use crate::domain::foundation::{StoreError, Timestamp, UserId};
use crate::domain::user::{EmailAddress, User};
use crate::ports::UserRepository;

use super::{column_error, store_error};

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO users (
                id, name, email, password_hash, email_verified, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.id().to_string())
        .bind(user.name())
        .bind(user.email().as_str())
        .bind(user.password_hash())
        .bind(user.email_verified())
        .bind(*user.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| store_error("insert user", e))?;

        Ok(())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, password_hash, email_verified, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error("fetch user", e))?;

        row.map(|r| row_to_user(&r)).transpose()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Helper functions
// ═══════════════════════════════════════════════════════════════════════════

/// Converts a database row to a User aggregate
fn row_to_user(row: &PgRow) -> Result<User, StoreError> {
    let id: String = row.try_get("id").map_err(|e| column_error("id", e))?;
    let id = UserId::parse(&id).map_err(|e| column_error("id", e))?;

    let name: String = row.try_get("name").map_err(|e| column_error("name", e))?;

    let email: String = row.try_get("email").map_err(|e| column_error("email", e))?;
    let email = EmailAddress::parse(&email).map_err(|e| column_error("email", e))?;

    let password_hash: String = row
        .try_get("password_hash")
        .map_err(|e| column_error("password_hash", e))?;

    let email_verified: bool = row
        .try_get("email_verified")
        .map_err(|e| column_error("email_verified", e))?;

    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| column_error("created_at", e))?;

    Ok(User::reconstitute(
        id,
        name,
        email,
        password_hash,
        email_verified,
        Timestamp::from_datetime(created_at),
    ))
}
