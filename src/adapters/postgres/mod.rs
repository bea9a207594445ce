//! PostgreSQL persistence adapters.

mod checkin_repository;
mod goal_repository;
mod user_repository;

pub use checkin_repository::PostgresCheckinRepository;
pub use goal_repository::PostgresGoalRepository;
pub use user_repository::PostgresUserRepository;

use crate::domain::foundation::StoreError;

/// Classifies an sqlx failure into the store error contract.
///
/// Connectivity problems become `Unavailable`; everything else, bad
/// rows included, is a `Query` failure.
pub(crate) fn store_error(context: &str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => StoreError::unavailable(format!("{}: {}", context, err)),
        other => StoreError::query(format!("{}: {}", context, other)),
    }
}

/// Decoding error for one column of a fetched row.
pub(crate) fn column_error(column: &str, err: impl std::fmt::Display) -> StoreError {
    StoreError::query(format!("Failed to decode {}: {}", column, err))
}
