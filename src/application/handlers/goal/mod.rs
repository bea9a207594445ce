//! Goal command and query handlers.

mod create_goal;
mod delete_goal;
mod get_goal;
mod get_goal_progress;
mod list_goals;
mod update_goal;
mod update_milestone;

pub use create_goal::{CreateGoalCommand, CreateGoalHandler};
pub use delete_goal::{DeleteGoalCommand, DeleteGoalHandler};
pub use get_goal::{GetGoalHandler, GetGoalQuery};
pub use get_goal_progress::{GetGoalProgressHandler, GetGoalProgressQuery, ProgressSummary};
pub use list_goals::{ListGoalsHandler, ListGoalsQuery};
pub use update_goal::{UpdateGoalCommand, UpdateGoalHandler};
pub use update_milestone::{UpdateMilestoneCommand, UpdateMilestoneHandler};
