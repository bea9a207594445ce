//! Progress check-ins: an append-only journal of self-reported updates.

use crate::domain::foundation::{CheckinId, GoalId, Timestamp, UserId};

/// Free-text payload of a new check-in.
///
/// The referenced goal is not required to exist. Check-ins are journal
/// entries, not foreign keys, so a check-in against a deleted or foreign
/// goal is stored as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCheckin {
    pub goal_id: GoalId,
    pub progress_notes: String,
    pub completed_milestones: Vec<String>,
    pub challenges: String,
    pub next_steps: String,
}

/// A recorded check-in. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkin {
    id: CheckinId,
    user_id: UserId,
    goal_id: GoalId,
    progress_notes: String,
    completed_milestones: Vec<String>,
    challenges: String,
    next_steps: String,
    checkin_date: Timestamp,
}

impl Checkin {
    /// Records a check-in at the current moment.
    pub fn record(id: CheckinId, user_id: UserId, new: NewCheckin) -> Self {
        Self {
            id,
            user_id,
            goal_id: new.goal_id,
            progress_notes: new.progress_notes,
            completed_milestones: new.completed_milestones,
            challenges: new.challenges,
            next_steps: new.next_steps,
            checkin_date: Timestamp::now(),
        }
    }

    /// Rebuilds a check-in from stored state. For persistence adapters
    /// only.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: CheckinId,
        user_id: UserId,
        goal_id: GoalId,
        progress_notes: String,
        completed_milestones: Vec<String>,
        challenges: String,
        next_steps: String,
        checkin_date: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            goal_id,
            progress_notes,
            completed_milestones,
            challenges,
            next_steps,
            checkin_date,
        }
    }

    pub fn id(&self) -> CheckinId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn goal_id(&self) -> GoalId {
        self.goal_id
    }

    pub fn progress_notes(&self) -> &str {
        &self.progress_notes
    }

    pub fn completed_milestones(&self) -> &[String] {
        &self.completed_milestones
    }

    pub fn challenges(&self) -> &str {
        &self.challenges
    }

    pub fn next_steps(&self) -> &str {
        &self.next_steps
    }

    pub fn checkin_date(&self) -> Timestamp {
        self.checkin_date
    }
}
