//! PostgreSQL implementation of the goal repository.
//!
//! Milestones are stored denormalized as a JSONB column on the goal row,
//! so an aggregate update writes the journey and its rollup in one
//! statement.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgRow};
use sqlx::types::Json;
use sqlx::Row;

use crate::domain::foundation::{GoalId, Progress, StoreError, Timestamp, UserId};
use crate::domain::goal::{Complexity, Goal, GoalStatus, Milestone};
use crate::ports::{GoalRepository, GOAL_LIST_LIMIT};

use super::{column_error, store_error};

/// PostgreSQL-backed goal repository
#[derive(Clone)]
pub struct PostgresGoalRepository {
    pool: PgPool,
}

impl PostgresGoalRepository {
    /// Creates a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GoalRepository for PostgresGoalRepository {
    async fn insert(&self, goal: &Goal) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO goals (
                id, user_id, title, description, category, complexity,
                duration_weeks, progress, status, milestones, current_week,
                created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(goal.id().to_string())
        .bind(goal.user_id().to_string())
        .bind(goal.title())
        .bind(goal.description())
        .bind(goal.category())
        .bind(goal.complexity().as_str())
        .bind(goal.duration_weeks() as i32)
        .bind(i32::from(goal.progress().value()))
        .bind(goal.status().as_str())
        .bind(Json(goal.milestones()))
        .bind(goal.current_week() as i32)
        .bind(*goal.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| store_error("insert goal", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: GoalId, owner: UserId) -> Result<Option<Goal>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, title, description, category, complexity,
                   duration_weeks, progress, status, milestones, current_week,
                   created_at
            FROM goals
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.to_string())
        .bind(owner.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error("fetch goal", e))?;

        row.map(|r| row_to_goal(&r)).transpose()
    }

    async fn find_by_owner(&self, owner: UserId) -> Result<Vec<Goal>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, title, description, category, complexity,
                   duration_weeks, progress, status, milestones, current_week,
                   created_at
            FROM goals
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(owner.to_string())
        .bind(GOAL_LIST_LIMIT as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| store_error("list goals", e))?;

        rows.iter().map(row_to_goal).collect()
    }

    async fn update(&self, goal: &Goal) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE goals
            SET title = $3, description = $4, category = $5, complexity = $6,
                duration_weeks = $7, progress = $8, status = $9,
                milestones = $10, current_week = $11
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(goal.id().to_string())
        .bind(goal.user_id().to_string())
        .bind(goal.title())
        .bind(goal.description())
        .bind(goal.category())
        .bind(goal.complexity().as_str())
        .bind(goal.duration_weeks() as i32)
        .bind(i32::from(goal.progress().value()))
        .bind(goal.status().as_str())
        .bind(Json(goal.milestones()))
        .bind(goal.current_week() as i32)
        .execute(&self.pool)
        .await
        .map_err(|e| store_error("update goal", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: GoalId, owner: UserId) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM goals
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.to_string())
        .bind(owner.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| store_error("delete goal", e))?;

        Ok(result.rows_affected() > 0)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Helper functions
// ═══════════════════════════════════════════════════════════════════════════

/// Converts a database row to a Goal aggregate
fn row_to_goal(row: &PgRow) -> Result<Goal, StoreError> {
    let id: String = row.try_get("id").map_err(|e| column_error("id", e))?;
    let id = GoalId::parse(&id).map_err(|e| column_error("id", e))?;

    let user_id: String = row
        .try_get("user_id")
        .map_err(|e| column_error("user_id", e))?;
    let user_id = UserId::parse(&user_id).map_err(|e| column_error("user_id", e))?;

    let title: String = row.try_get("title").map_err(|e| column_error("title", e))?;
    let description: String = row
        .try_get("description")
        .map_err(|e| column_error("description", e))?;
    let category: String = row
        .try_get("category")
        .map_err(|e| column_error("category", e))?;

    let complexity: String = row
        .try_get("complexity")
        .map_err(|e| column_error("complexity", e))?;
    let complexity: Complexity = complexity
        .parse()
        .map_err(|e| column_error("complexity", e))?;

    let duration_weeks: i32 = row
        .try_get("duration_weeks")
        .map_err(|e| column_error("duration_weeks", e))?;
    let duration_weeks =
        u32::try_from(duration_weeks).map_err(|e| column_error("duration_weeks", e))?;

    let progress: i32 = row
        .try_get("progress")
        .map_err(|e| column_error("progress", e))?;
    let progress =
        Progress::try_new(i64::from(progress)).map_err(|e| column_error("progress", e))?;

    let status: String = row
        .try_get("status")
        .map_err(|e| column_error("status", e))?;
    let status: GoalStatus = status.parse().map_err(|e| column_error("status", e))?;

    let milestones: Json<Vec<Milestone>> = row
        .try_get("milestones")
        .map_err(|e| column_error("milestones", e))?;

    let current_week: i32 = row
        .try_get("current_week")
        .map_err(|e| column_error("current_week", e))?;
    let current_week = u32::try_from(current_week).map_err(|e| column_error("current_week", e))?;

    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| column_error("created_at", e))?;

    Ok(Goal::reconstitute(
        id,
        user_id,
        title,
        description,
        category,
        complexity,
        duration_weeks,
        progress,
        status,
        milestones.0,
        current_week,
        Timestamp::from_datetime(created_at),
    ))
}
