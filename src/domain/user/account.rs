//! User accounts and credential validation rules.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::foundation::{Timestamp, UserId, ValidationError};

/// Minimum length of a display name, in characters.
pub const MIN_NAME_LENGTH: usize = 2;

/// Maximum length of a display name, in characters.
pub const MAX_NAME_LENGTH: usize = 50;

/// Minimum length of a raw password, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Maximum length of a raw password, in characters.
pub const MAX_PASSWORD_LENGTH: usize = 100;

/// Maximum length of an email address, in characters.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// A syntactically valid, lowercased email address.
///
/// Normalizing at parse time makes the uniqueness check case-insensitive:
/// `Ada@Example.com` and `ada@example.com` are the same account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses and normalizes an email address.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty("email"));
        }
        let length = trimmed.chars().count();
        if length > MAX_EMAIL_LENGTH {
            return Err(ValidationError::too_long("email", MAX_EMAIL_LENGTH, length));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(ValidationError::invalid("email", "must not contain spaces"));
        }
        let (local, domain) = trimmed
            .split_once('@')
            .ok_or_else(|| ValidationError::invalid("email", "missing '@'"))?;
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(ValidationError::invalid("email", "malformed address"));
        }
        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return Err(ValidationError::invalid("email", "malformed domain"));
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EmailAddress {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A registered account.
///
/// Holds only the password hash, never the raw password. Raw passwords
/// are validated with [`User::validate_password`] before hashing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    email: EmailAddress,
    password_hash: String,
    email_verified: bool,
    created_at: Timestamp,
}

impl User {
    /// Creates a new unverified account from validated inputs.
    pub fn register(
        id: UserId,
        name: impl Into<String>,
        email: EmailAddress,
        password_hash: String,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        Self::validate_name(&name)?;
        Ok(Self {
            id,
            name,
            email,
            password_hash,
            email_verified: false,
            created_at: Timestamp::now(),
        })
    }

    /// Checks the length bounds of a display name.
    pub fn validate_name(name: &str) -> Result<(), ValidationError> {
        let length = name.chars().count();
        if name.trim().is_empty() {
            return Err(ValidationError::empty("name"));
        }
        if length < MIN_NAME_LENGTH {
            return Err(ValidationError::too_short("name", MIN_NAME_LENGTH, length));
        }
        if length > MAX_NAME_LENGTH {
            return Err(ValidationError::too_long("name", MAX_NAME_LENGTH, length));
        }
        Ok(())
    }

    /// Checks the length bounds of a raw password before it is hashed.
    pub fn validate_password(password: &str) -> Result<(), ValidationError> {
        let length = password.chars().count();
        if length < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::too_short(
                "password",
                MIN_PASSWORD_LENGTH,
                length,
            ));
        }
        if length > MAX_PASSWORD_LENGTH {
            return Err(ValidationError::too_long(
                "password",
                MAX_PASSWORD_LENGTH,
                length,
            ));
        }
        Ok(())
    }

    /// Rebuilds an account from stored state. For persistence adapters
    /// only.
    pub fn reconstitute(
        id: UserId,
        name: String,
        email: EmailAddress,
        password_hash: String,
        email_verified: bool,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
            email_verified,
            created_at,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn email_verified(&self) -> bool {
        self.email_verified
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
