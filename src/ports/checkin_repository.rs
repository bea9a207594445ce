//! Persistence gateway for check-ins.

use async_trait::async_trait;

use crate::domain::checkin::Checkin;
use crate::domain::foundation::{GoalId, StoreError};

/// Maximum number of check-ins returned for one goal.
pub const CHECKIN_LIST_LIMIT: usize = 100;

/// Stores and retrieves the append-only check-in journal.
#[async_trait]
pub trait CheckinRepository: Send + Sync {
    /// Appends a check-in. Never updates or deletes existing entries.
    async fn insert(&self, checkin: &Checkin) -> Result<(), StoreError>;

    /// Lists check-ins for a goal, newest first, at most
    /// [`CHECKIN_LIST_LIMIT`].
    async fn find_by_goal(&self, goal_id: GoalId) -> Result<Vec<Checkin>, StoreError>;
}
