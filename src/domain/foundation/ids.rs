//! Typed identifiers for goals, users, and check-ins.
//!
//! Every record is addressed by a [`DocumentId`]: 12 bytes rendered as a
//! 24-character lowercase hex string. The first four bytes are the creation
//! time in whole seconds (big-endian), the remaining eight are random, so
//! ids generated in the same process sort roughly by creation time.
//!
//! The newtype wrappers ([`GoalId`], [`UserId`], [`CheckinId`]) exist so a
//! goal id can never be passed where a user id is expected. Malformed ids
//! are rejected at parse time, before any store access happens.

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of raw bytes in a document id.
const ID_BYTES: usize = 12;

/// Number of hex characters in the canonical string form.
const ID_CHARS: usize = 24;

/// Error returned when a string is not a well-formed document id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid document id '{value}': expected 24 hex characters")]
pub struct ParseIdError {
    value: String,
}

impl ParseIdError {
    fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The rejected input, for error reporting.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A 12-byte document identifier with a 24-hex-char canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId([u8; ID_BYTES]);

impl DocumentId {
    /// Generates a fresh id: 4-byte big-endian unix seconds + 8 random bytes.
    pub fn generate() -> Self {
        let mut bytes = [0u8; ID_BYTES];
        let seconds = Utc::now().timestamp().max(0) as u32;
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        rand::thread_rng().fill(&mut bytes[4..]);
        Self(bytes)
    }

    /// Parses the canonical 24-hex-character form. Accepts either case,
    /// renders lowercase.
    pub fn parse(s: &str) -> Result<Self, ParseIdError> {
        if s.len() != ID_CHARS || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseIdError::new(s));
        }
        let mut bytes = [0u8; ID_BYTES];
        for (i, chunk) in bytes.iter_mut().enumerate() {
            let pair = &s[i * 2..i * 2 + 2];
            *chunk = u8::from_str_radix(pair, 16).map_err(|_| ParseIdError::new(s))?;
        }
        Ok(Self(bytes))
    }

    /// Raw bytes, mostly useful in tests.
    pub fn as_bytes(&self) -> &[u8; ID_BYTES] {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl FromStr for DocumentId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for DocumentId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Declares a typed wrapper around [`DocumentId`].
macro_rules! typed_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(DocumentId);

        impl $name {
            /// Generates a fresh id.
            pub fn generate() -> Self {
                Self(DocumentId::generate())
            }

            /// Parses the canonical 24-hex-character form.
            pub fn parse(s: &str) -> Result<Self, ParseIdError> {
                DocumentId::parse(s).map(Self)
            }

            /// The underlying document id.
            pub fn document_id(&self) -> DocumentId {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

typed_id! {
    /// Identifier of a learning goal.
    GoalId
}

typed_id! {
    /// Identifier of a registered user account.
    UserId
}

typed_id! {
    /// Identifier of a progress check-in.
    CheckinId
}
