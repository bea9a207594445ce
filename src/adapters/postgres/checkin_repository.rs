//! PostgreSQL implementation of the check-in repository.
//!
//! The journal is append-only; this adapter never issues an UPDATE or
//! DELETE against the checkins table.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgRow};
use sqlx::Row;

use crate::domain::checkin::Checkin;
use crate::domain::foundation::{CheckinId, GoalId, StoreError, Timestamp, UserId};
use crate::ports::{CheckinRepository, CHECKIN_LIST_LIMIT};

use super::{column_error, store_error};

/// PostgreSQL-backed check-in repository
#[derive(Clone)]
pub struct PostgresCheckinRepository {
    pool: PgPool,
}

impl PostgresCheckinRepository {
    /// Creates a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CheckinRepository for PostgresCheckinRepository {
    async fn insert(&self, checkin: &Checkin) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO checkins (
                id, user_id, goal_id, progress_notes, completed_milestones,
                challenges, next_steps, checkin_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(checkin.id().to_string())
        .bind(checkin.user_id().to_string())
        .bind(checkin.goal_id().to_string())
        .bind(checkin.progress_notes())
        .bind(checkin.completed_milestones())
        .bind(checkin.challenges())
        .bind(checkin.next_steps())
        .bind(*checkin.checkin_date().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| store_error("insert checkin", e))?;

        Ok(())
    }

    async fn find_by_goal(&self, goal_id: GoalId) -> Result<Vec<Checkin>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, goal_id, progress_notes, completed_milestones,
                   challenges, next_steps, checkin_date
            FROM checkins
            WHERE goal_id = $1
            ORDER BY checkin_date DESC
            LIMIT $2
            "#,
        )
        .bind(goal_id.to_string())
        .bind(CHECKIN_LIST_LIMIT as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| store_error("list checkins", e))?;

        rows.iter().map(row_to_checkin).collect()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Helper functions
// ═══════════════════════════════════════════════════════════════════════════

/// Converts a database row to a Checkin record
fn row_to_checkin(row: &PgRow) -> Result<Checkin, StoreError> {
    let id: String = row.try_get("id").map_err(|e| column_error("id", e))?;
    let id = CheckinId::parse(&id).map_err(|e| column_error("id", e))?;

    let user_id: String = row
        .try_get("user_id")
        .map_err(|e| column_error("user_id", e))?;
    let user_id = UserId::parse(&user_id).map_err(|e| column_error("user_id", e))?;

    let goal_id: String = row
        .try_get("goal_id")
        .map_err(|e| column_error("goal_id", e))?;
    let goal_id = GoalId::parse(&goal_id).map_err(|e| column_error("goal_id", e))?;

    let progress_notes: String = row
        .try_get("progress_notes")
        .map_err(|e| column_error("progress_notes", e))?;

    let completed_milestones: Vec<String> = row
        .try_get("completed_milestones")
        .map_err(|e| column_error("completed_milestones", e))?;

    let challenges: String = row
        .try_get("challenges")
        .map_err(|e| column_error("challenges", e))?;

    let next_steps: String = row
        .try_get("next_steps")
        .map_err(|e| column_error("next_steps", e))?;

    let checkin_date: chrono::DateTime<chrono::Utc> = row
        .try_get("checkin_date")
        .map_err(|e| column_error("checkin_date", e))?;

    Ok(Checkin::reconstitute(
        id,
        user_id,
        goal_id,
        progress_notes,
        completed_milestones,
        challenges,
        next_steps,
        Timestamp::from_datetime(checkin_date),
    ))
}
