//! Foundation types shared across the domain.
//!
//! Identifiers, timestamps, progress percentages, and the common error
//! vocabulary. Everything here is a plain value object with no I/O.

mod auth;
mod errors;
mod ids;
mod progress;
mod timestamp;

pub use auth::AuthError;
pub use errors::{StoreError, ValidationError};
pub use ids::{CheckinId, DocumentId, GoalId, ParseIdError, UserId};
pub use progress::{Progress, ProgressOutOfRange};
pub use timestamp::Timestamp;
