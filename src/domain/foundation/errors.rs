//! Shared error vocabulary for the domain layer.
//!
//! [`ValidationError`] describes a rejected input field and carries enough
//! structure for HTTP handlers to report which field failed and why.
//! [`StoreError`] is the error contract of the persistence gateway ports;
//! it distinguishes an unreachable store from a failed query so callers can
//! map the former to a service-unavailable response.

use thiserror::Error;

/// A boundary input that failed domain validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was empty or missing.
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    /// A text field exceeded its maximum length.
    #[error("{field} must be at most {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    /// A text field fell short of its minimum length.
    #[error("{field} must be at least {min} characters, got {actual}")]
    TooShort {
        field: &'static str,
        min: usize,
        actual: usize,
    },

    /// A numeric field was outside its allowed range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },

    /// A field had a well-formed type but an unacceptable value.
    #[error("{field} is invalid: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ValidationError {
    /// A required field was empty.
    pub fn empty(field: &'static str) -> Self {
        Self::Empty { field }
    }

    /// A text field exceeded its maximum length.
    pub fn too_long(field: &'static str, max: usize, actual: usize) -> Self {
        Self::TooLong { field, max, actual }
    }

    /// A text field fell short of its minimum length.
    pub fn too_short(field: &'static str, min: usize, actual: usize) -> Self {
        Self::TooShort { field, min, actual }
    }

    /// A numeric field was outside its allowed range.
    pub fn out_of_range(field: &'static str, min: i64, max: i64, value: i64) -> Self {
        Self::OutOfRange {
            field,
            min,
            max,
            value,
        }
    }

    /// A field with an unacceptable value.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }

    /// The name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Empty { field }
            | Self::TooLong { field, .. }
            | Self::TooShort { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::Invalid { field, .. } => field,
        }
    }
}

/// Failure reported by a persistence gateway.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store could not be reached at all.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store was reachable but the operation failed.
    #[error("store operation failed: {0}")]
    Query(String),
}

impl StoreError {
    /// The store could not be reached.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }

    /// A query or row decode failed.
    pub fn query(reason: impl Into<String>) -> Self {
        Self::Query(reason.into())
    }
}
