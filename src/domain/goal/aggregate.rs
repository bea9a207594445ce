//! Goal aggregate: a learning goal and its weekly journey.
//!
//! The aggregate owns the milestone rollup rule. Whenever a milestone
//! status changes, progress is recomputed as the rounded share of
//! completed milestones and the goal status is derived from that
//! percentage. The partial-update path deliberately bypasses the rollup:
//! progress, status, and current week written through it land verbatim.

use crate::domain::foundation::{GoalId, Progress, Timestamp, UserId, ValidationError};

use super::errors::GoalError;
use super::milestone::{Milestone, MilestoneStatus};
use super::{Complexity, GoalStatus};

/// Maximum length of a goal title, in characters.
pub const MAX_TITLE_LENGTH: usize = 100;

/// Maximum length of a goal description, in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Shortest allowed journey.
pub const MIN_DURATION_WEEKS: u32 = 1;

/// Longest allowed journey, one year.
pub const MAX_DURATION_WEEKS: u32 = 52;

// ═══════════════════════════════════════════════════════════════════════
// New goal input
// ═══════════════════════════════════════════════════════════════════════

/// Validated fields for a goal that does not exist yet.
///
/// Construction is the validation boundary: once a `NewGoal` exists, its
/// fields are known to be within bounds.
#[derive(Debug, Clone)]
pub struct NewGoal {
    title: String,
    description: String,
    category: String,
    complexity: Complexity,
    duration_weeks: u32,
}

impl NewGoal {
    /// Validates the raw fields of a goal creation request.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        complexity: Complexity,
        duration_weeks: u32,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let description = description.into();
        validate_title(&title)?;
        validate_description(&description)?;
        validate_duration(duration_weeks)?;
        Ok(Self {
            title,
            description,
            category: category.into(),
            complexity,
            duration_weeks,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn complexity(&self) -> Complexity {
        self.complexity
    }

    pub fn duration_weeks(&self) -> u32 {
        self.duration_weeks
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Partial updates
// ═══════════════════════════════════════════════════════════════════════

/// Fields of a partial goal update. `None` means "leave unchanged".
///
/// Progress, status, and current week are the manual escape hatch: when
/// present they overwrite the stored values without triggering the
/// milestone rollup, and a later milestone update recomputes them again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub complexity: Option<Complexity>,
    pub duration_weeks: Option<u32>,
    pub progress: Option<Progress>,
    pub status: Option<GoalStatus>,
    pub current_week: Option<u32>,
}

impl GoalChanges {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.complexity.is_none()
            && self.duration_weeks.is_none()
            && self.progress.is_none()
            && self.status.is_none()
            && self.current_week.is_none()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Aggregate
// ═══════════════════════════════════════════════════════════════════════

/// Count of milestones per status for a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MilestoneCounts {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub not_started: usize,
}

/// A learning goal owned by one user, with its weekly milestones.
#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    id: GoalId,
    user_id: UserId,
    title: String,
    description: String,
    category: String,
    complexity: Complexity,
    duration_weeks: u32,
    progress: Progress,
    status: GoalStatus,
    milestones: Vec<Milestone>,
    current_week: u32,
    created_at: Timestamp,
}

impl Goal {
    /// Creates a new goal with its journey.
    ///
    /// Callers build the journey with [`Milestone::journey_from_plan`] or
    /// [`Milestone::placeholder_journey`], both of which produce exactly
    /// one milestone per week of the requested duration.
    pub fn create(id: GoalId, user_id: UserId, new: NewGoal, journey: Vec<Milestone>) -> Self {
        Self {
            id,
            user_id,
            title: new.title,
            description: new.description,
            category: new.category,
            complexity: new.complexity,
            duration_weeks: new.duration_weeks,
            progress: Progress::ZERO,
            status: GoalStatus::NotStarted,
            milestones: journey,
            current_week: 1,
            created_at: Timestamp::now(),
        }
    }

    /// Rebuilds a goal from stored state. For persistence adapters only;
    /// trusts that the stored data was valid when written.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: GoalId,
        user_id: UserId,
        title: String,
        description: String,
        category: String,
        complexity: Complexity,
        duration_weeks: u32,
        progress: Progress,
        status: GoalStatus,
        milestones: Vec<Milestone>,
        current_week: u32,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            title,
            description,
            category,
            complexity,
            duration_weeks,
            progress,
            status,
            milestones,
            current_week,
            created_at,
        }
    }

    // ───────────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────────

    pub fn id(&self) -> GoalId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn complexity(&self) -> Complexity {
        self.complexity
    }

    pub fn duration_weeks(&self) -> u32 {
        self.duration_weeks
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn status(&self) -> GoalStatus {
        self.status
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn current_week(&self) -> u32 {
        self.current_week
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    // ───────────────────────────────────────────────────────────────────
    // Mutations
    // ───────────────────────────────────────────────────────────────────

    /// Sets the status of the milestone for `week` and rolls the change
    /// up into progress, goal status, and current week.
    ///
    /// Any status transition is allowed. The current week becomes the
    /// updated week regardless of direction.
    pub fn update_milestone_status(
        &mut self,
        week: u32,
        status: MilestoneStatus,
    ) -> Result<(), GoalError> {
        let milestone = self
            .milestones
            .iter_mut()
            .find(|m| m.week() == week)
            .ok_or_else(|| GoalError::milestone_not_found(self.id, week))?;
        milestone.set_status(status);
        self.current_week = week;
        self.recompute_rollup();
        Ok(())
    }

    /// Applies a validated partial update.
    ///
    /// Milestones are never touched here; changing the duration does not
    /// regenerate the journey. Progress and status land verbatim without
    /// recomputing the rollup.
    pub fn apply_update(&mut self, changes: GoalChanges) -> Result<(), GoalError> {
        if let Some(title) = changes.title {
            validate_title(&title)?;
            self.title = title;
        }
        if let Some(description) = changes.description {
            validate_description(&description)?;
            self.description = description;
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
        if let Some(complexity) = changes.complexity {
            self.complexity = complexity;
        }
        if let Some(duration_weeks) = changes.duration_weeks {
            validate_duration(duration_weeks)?;
            self.duration_weeks = duration_weeks;
        }
        if let Some(progress) = changes.progress {
            self.progress = progress;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        if let Some(current_week) = changes.current_week {
            validate_current_week(current_week)?;
            self.current_week = current_week;
        }
        Ok(())
    }

    /// Milestone counts per status. `not_started` is derived by
    /// subtraction, which cannot go negative since every milestone is in
    /// exactly one state.
    pub fn milestone_counts(&self) -> MilestoneCounts {
        let total = self.milestones.len();
        let completed = self
            .milestones
            .iter()
            .filter(|m| m.status().is_completed())
            .count();
        let in_progress = self
            .milestones
            .iter()
            .filter(|m| m.status().is_in_progress())
            .count();
        MilestoneCounts {
            total,
            completed,
            in_progress,
            not_started: total - completed - in_progress,
        }
    }

    fn recompute_rollup(&mut self) {
        let completed = self
            .milestones
            .iter()
            .filter(|m| m.status().is_completed())
            .count();
        self.progress = Progress::from_counts(completed, self.milestones.len());
        self.status = GoalStatus::from_progress(self.progress);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Field validation
// ═══════════════════════════════════════════════════════════════════════

fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::empty("title"));
    }
    let length = title.chars().count();
    if length > MAX_TITLE_LENGTH {
        return Err(ValidationError::too_long("title", MAX_TITLE_LENGTH, length));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), ValidationError> {
    let length = description.chars().count();
    if length > MAX_DESCRIPTION_LENGTH {
        return Err(ValidationError::too_long(
            "description",
            MAX_DESCRIPTION_LENGTH,
            length,
        ));
    }
    Ok(())
}

fn validate_duration(duration_weeks: u32) -> Result<(), ValidationError> {
    if !(MIN_DURATION_WEEKS..=MAX_DURATION_WEEKS).contains(&duration_weeks) {
        return Err(ValidationError::out_of_range(
            "duration",
            MIN_DURATION_WEEKS as i64,
            MAX_DURATION_WEEKS as i64,
            duration_weeks as i64,
        ));
    }
    Ok(())
}

fn validate_current_week(current_week: u32) -> Result<(), ValidationError> {
    if current_week < 1 {
        return Err(ValidationError::invalid(
            "current_week",
            "must be at least 1",
        ));
    }
    Ok(())
}
