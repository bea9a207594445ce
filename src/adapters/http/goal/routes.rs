//! HTTP routes for goal endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    create_goal, delete_goal, get_goal, get_goal_progress, list_goals, update_goal,
    update_milestone, GoalHandlers,
};

/// Creates the goal router with all endpoints.
pub fn goal_routes(handlers: GoalHandlers) -> Router {
    Router::new()
        .route("/", post(create_goal))
        .route("/", get(list_goals))
        .route("/:id", get(get_goal).put(update_goal).delete(delete_goal))
        .route("/:id/milestone/:week", put(update_milestone))
        .route("/:id/progress", get(get_goal_progress))
        .with_state(handlers)
}
