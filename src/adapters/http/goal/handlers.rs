//! HTTP handlers for goal endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::goal::{
    CreateGoalCommand, CreateGoalHandler, DeleteGoalCommand, DeleteGoalHandler, GetGoalHandler,
    GetGoalProgressHandler, GetGoalProgressQuery, GetGoalQuery, ListGoalsHandler, ListGoalsQuery,
    UpdateGoalCommand, UpdateGoalHandler, UpdateMilestoneCommand, UpdateMilestoneHandler,
};
use crate::domain::foundation::GoalId;
use crate::domain::goal::GoalError;

use super::super::response::ErrorResponse;
use super::dto::{
    CreateGoalRequest, DeleteGoalResponse, GoalEnvelope, GoalListEnvelope,
    MilestoneUpdatedResponse, ProgressSummaryResponse, UpdateGoalRequest, UpdateMilestoneRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct GoalHandlers {
    create_handler: Arc<CreateGoalHandler>,
    list_handler: Arc<ListGoalsHandler>,
    get_handler: Arc<GetGoalHandler>,
    update_handler: Arc<UpdateGoalHandler>,
    delete_handler: Arc<DeleteGoalHandler>,
    milestone_handler: Arc<UpdateMilestoneHandler>,
    progress_handler: Arc<GetGoalProgressHandler>,
}

impl GoalHandlers {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        create_handler: Arc<CreateGoalHandler>,
        list_handler: Arc<ListGoalsHandler>,
        get_handler: Arc<GetGoalHandler>,
        update_handler: Arc<UpdateGoalHandler>,
        delete_handler: Arc<DeleteGoalHandler>,
        milestone_handler: Arc<UpdateMilestoneHandler>,
        progress_handler: Arc<GetGoalProgressHandler>,
    ) -> Self {
        Self {
            create_handler,
            list_handler,
            get_handler,
            update_handler,
            delete_handler,
            milestone_handler,
            progress_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/goals - Create a goal with its milestone journey
pub async fn create_goal(
    State(handlers): State<GoalHandlers>,
    RequireAuth(user_id): RequireAuth,
    Json(req): Json<CreateGoalRequest>,
) -> Response {
    let cmd = CreateGoalCommand {
        user_id,
        title: req.title,
        description: req.description,
        category: req.category,
        complexity: req.complexity,
        duration_weeks: req.duration,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(goal) => (StatusCode::CREATED, Json(GoalEnvelope::from(&goal))).into_response(),
        Err(e) => handle_goal_error(e),
    }
}

/// GET /api/goals - List the caller's goals, newest first
pub async fn list_goals(
    State(handlers): State<GoalHandlers>,
    RequireAuth(user_id): RequireAuth,
) -> Response {
    let query = ListGoalsQuery { user_id };

    match handlers.list_handler.handle(query).await {
        Ok(goals) => (
            StatusCode::OK,
            Json(GoalListEnvelope::from(goals.as_slice())),
        )
            .into_response(),
        Err(e) => handle_goal_error(e),
    }
}

/// GET /api/goals/:id - Get one goal
pub async fn get_goal(
    State(handlers): State<GoalHandlers>,
    RequireAuth(user_id): RequireAuth,
    Path(goal_id): Path<String>,
) -> Response {
    let goal_id = match goal_id.parse::<GoalId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::invalid_id("goal")),
            )
                .into_response()
        }
    };

    let query = GetGoalQuery { user_id, goal_id };

    match handlers.get_handler.handle(query).await {
        Ok(goal) => (StatusCode::OK, Json(GoalEnvelope::from(&goal))).into_response(),
        Err(e) => handle_goal_error(e),
    }
}

/// PUT /api/goals/:id - Update fields of a goal
pub async fn update_goal(
    State(handlers): State<GoalHandlers>,
    RequireAuth(user_id): RequireAuth,
    Path(goal_id): Path<String>,
    Json(req): Json<UpdateGoalRequest>,
) -> Response {
    let goal_id = match goal_id.parse::<GoalId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::invalid_id("goal")),
            )
                .into_response()
        }
    };

    let changes = match req.into_changes() {
        Ok(changes) => changes,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(e.to_string())),
            )
                .into_response()
        }
    };

    let cmd = UpdateGoalCommand {
        user_id,
        goal_id,
        changes,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(goal) => (StatusCode::OK, Json(GoalEnvelope::from(&goal))).into_response(),
        Err(e) => handle_goal_error(e),
    }
}

/// DELETE /api/goals/:id - Delete a goal
pub async fn delete_goal(
    State(handlers): State<GoalHandlers>,
    RequireAuth(user_id): RequireAuth,
    Path(goal_id): Path<String>,
) -> Response {
    let goal_id = match goal_id.parse::<GoalId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::invalid_id("goal")),
            )
                .into_response()
        }
    };

    let cmd = DeleteGoalCommand { user_id, goal_id };

    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => (
            StatusCode::OK,
            Json(DeleteGoalResponse::new(goal_id.to_string())),
        )
            .into_response(),
        Err(e) => handle_goal_error(e),
    }
}

/// PUT /api/goals/:id/milestone/:week - Set a milestone's status
pub async fn update_milestone(
    State(handlers): State<GoalHandlers>,
    RequireAuth(user_id): RequireAuth,
    Path((goal_id, week)): Path<(String, u32)>,
    Json(req): Json<UpdateMilestoneRequest>,
) -> Response {
    let goal_id = match goal_id.parse::<GoalId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::invalid_id("goal")),
            )
                .into_response()
        }
    };

    let cmd = UpdateMilestoneCommand {
        user_id,
        goal_id,
        week,
        status: req.status,
    };

    match handlers.milestone_handler.handle(cmd).await {
        Ok(_) => (StatusCode::OK, Json(MilestoneUpdatedResponse::new())).into_response(),
        Err(e) => handle_goal_error(e),
    }
}

/// GET /api/goals/:id/progress - Progress summary for a goal
pub async fn get_goal_progress(
    State(handlers): State<GoalHandlers>,
    RequireAuth(user_id): RequireAuth,
    Path(goal_id): Path<String>,
) -> Response {
    let goal_id = match goal_id.parse::<GoalId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::invalid_id("goal")),
            )
                .into_response()
        }
    };

    let query = GetGoalProgressQuery { user_id, goal_id };

    match handlers.progress_handler.handle(query).await {
        Ok(summary) => (
            StatusCode::OK,
            Json(ProgressSummaryResponse::from(summary)),
        )
            .into_response(),
        Err(e) => handle_goal_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_goal_error(error: GoalError) -> Response {
    match error {
        GoalError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Goal", &id.to_string())),
        )
            .into_response(),
        GoalError::MilestoneNotFound { week, .. } => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Milestone", &format!("week {}", week))),
        )
            .into_response(),
        GoalError::Validation(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(e.to_string())),
        )
            .into_response(),
        GoalError::StoreUnavailable(reason) => {
            tracing::error!("Goal store unavailable: {}", reason);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::unavailable("Service temporarily unavailable")),
            )
                .into_response()
        }
        GoalError::Internal(reason) => {
            tracing::error!("Goal operation failed: {}", reason);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Internal server error")),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;

    #[test]
    fn goal_not_found_maps_to_404() {
        let response = handle_goal_error(GoalError::NotFound(GoalId::generate()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn milestone_not_found_maps_to_404() {
        let error = GoalError::milestone_not_found(GoalId::generate(), 3);
        let response = handle_goal_error(error);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_failure_maps_to_400() {
        let error = GoalError::Validation(ValidationError::empty("title"));
        let response = handle_goal_error(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn store_unavailable_maps_to_503() {
        let error = GoalError::StoreUnavailable("connection refused".to_string());
        let response = handle_goal_error(error);
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn internal_maps_to_500() {
        let error = GoalError::Internal("row decode failed".to_string());
        let response = handle_goal_error(error);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
