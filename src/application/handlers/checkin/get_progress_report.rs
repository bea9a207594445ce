//! GetProgressReportHandler - Query handler for the goal progress report.

use std::sync::Arc;

use crate::domain::checkin::{Checkin, CheckinError};
use crate::domain::foundation::{GoalId, Timestamp, UserId};
use crate::domain::goal::Goal;
use crate::ports::{CheckinRepository, GoalRepository};

/// Query for the progress report of one goal.
#[derive(Debug, Clone)]
pub struct GetProgressReportQuery {
    pub user_id: UserId,
    pub goal_id: GoalId,
}

/// Derived progress metrics for a goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressMetrics {
    /// Fraction of milestones completed, 0.0 to 1.0.
    pub completion_rate: f64,
    /// Completed milestones per elapsed week since the goal was created.
    pub velocity: f64,
}

impl ProgressMetrics {
    /// Computes metrics for a goal as of `now`.
    ///
    /// Elapsed time is counted in started weeks with a floor of one, so
    /// a goal created today measures velocity against a single week and
    /// a goal with no milestones reports a zero completion rate.
    pub fn compute(goal: &Goal, now: Timestamp) -> Self {
        let counts = goal.milestone_counts();
        let completion_rate = if counts.total == 0 {
            0.0
        } else {
            counts.completed as f64 / counts.total as f64
        };

        let elapsed_days = now.duration_since(&goal.created_at()).num_days().max(0);
        let elapsed_weeks = ((elapsed_days + 6) / 7).max(1);
        let velocity = counts.completed as f64 / elapsed_weeks as f64;

        Self {
            completion_rate,
            velocity,
        }
    }
}

/// A goal, its recent check-ins, and derived metrics.
#[derive(Debug, Clone)]
pub struct ProgressReport {
    pub goal: Goal,
    pub checkins: Vec<Checkin>,
    pub metrics: ProgressMetrics,
}

/// Handler for assembling progress reports.
pub struct GetProgressReportHandler {
    goals: Arc<dyn GoalRepository>,
    checkins: Arc<dyn CheckinRepository>,
}

impl GetProgressReportHandler {
    pub fn new(goals: Arc<dyn GoalRepository>, checkins: Arc<dyn CheckinRepository>) -> Self {
        Self { goals, checkins }
    }

    pub async fn handle(&self, query: GetProgressReportQuery) -> Result<ProgressReport, CheckinError> {
        // 1. The goal must exist and belong to the requesting user
        let goal = self
            .goals
            .find_by_id(query.goal_id, query.user_id)
            .await?
            .ok_or(CheckinError::GoalNotFound(query.goal_id))?;

        // 2. Recent check-ins, newest first
        let checkins = self.checkins.find_by_goal(query.goal_id).await?;

        // 3. Metrics derived from the goal itself
        let metrics = ProgressMetrics::compute(&goal, Timestamp::now());

        Ok(ProgressReport {
            goal,
            checkins,
            metrics,
        })
    }
}
