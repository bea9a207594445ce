//! HTTP adapter for goal endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreateGoalRequest, DeleteGoalResponse, GoalEnvelope, GoalListEnvelope, GoalResponse,
    MilestoneCountsResponse, MilestoneUpdatedResponse, ProgressSummaryResponse, UpdateGoalRequest,
    UpdateMilestoneRequest,
};
pub use handlers::GoalHandlers;
pub use routes::goal_routes;
