//! Goal domain: aggregate, weekly milestones, and the progress rollup.

mod aggregate;
mod complexity;
mod errors;
mod milestone;
mod status;

pub use aggregate::{
    Goal, GoalChanges, MilestoneCounts, NewGoal, MAX_DESCRIPTION_LENGTH, MAX_DURATION_WEEKS,
    MAX_TITLE_LENGTH, MIN_DURATION_WEEKS,
};
pub use complexity::Complexity;
pub use errors::GoalError;
pub use milestone::{Milestone, MilestonePlan, MilestoneStatus};
pub use status::GoalStatus;
