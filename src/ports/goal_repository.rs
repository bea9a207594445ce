//! Persistence gateway for goals.

use async_trait::async_trait;

use crate::domain::foundation::{GoalId, StoreError, UserId};
use crate::domain::goal::Goal;

/// Maximum number of goals returned by a listing.
pub const GOAL_LIST_LIMIT: usize = 100;

/// Stores and retrieves goal aggregates, always scoped to their owner.
///
/// `update` writes the whole aggregate, milestones included, as a single
/// statement, so a milestone change and its rollup land together. The
/// read-modify-write window between a fetch and that update is not
/// compare-and-swapped; concurrent writers follow last-write-wins.
#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Inserts a freshly created goal.
    async fn insert(&self, goal: &Goal) -> Result<(), StoreError>;

    /// Loads a goal by id, only if it belongs to `owner`.
    async fn find_by_id(&self, id: GoalId, owner: UserId) -> Result<Option<Goal>, StoreError>;

    /// Lists the owner's goals, newest first, at most [`GOAL_LIST_LIMIT`].
    async fn find_by_owner(&self, owner: UserId) -> Result<Vec<Goal>, StoreError>;

    /// Overwrites a stored goal. Returns false when no row matched the
    /// goal id and owner.
    async fn update(&self, goal: &Goal) -> Result<bool, StoreError>;

    /// Deletes a goal owned by `owner`. Returns false when nothing was
    /// deleted.
    async fn delete(&self, id: GoalId, owner: UserId) -> Result<bool, StoreError>;
}
