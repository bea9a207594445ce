//! HTTP handlers for check-in and progress report endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::checkin::{
    CreateCheckinCommand, CreateCheckinHandler, GetProgressReportHandler, GetProgressReportQuery,
};
use crate::domain::checkin::{CheckinError, NewCheckin};
use crate::domain::foundation::GoalId;

use super::super::response::ErrorResponse;
use super::dto::{CheckinRecordedResponse, CreateCheckinRequest, ProgressReportResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct CheckinHandlers {
    create_handler: Arc<CreateCheckinHandler>,
    report_handler: Arc<GetProgressReportHandler>,
}

impl CheckinHandlers {
    pub fn new(
        create_handler: Arc<CreateCheckinHandler>,
        report_handler: Arc<GetProgressReportHandler>,
    ) -> Self {
        Self {
            create_handler,
            report_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/checkins - Record a progress check-in
pub async fn create_checkin(
    State(handlers): State<CheckinHandlers>,
    RequireAuth(user_id): RequireAuth,
    Json(req): Json<CreateCheckinRequest>,
) -> Response {
    let goal_id = match req.goal_id.parse::<GoalId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::invalid_id("goal")),
            )
                .into_response()
        }
    };

    let cmd = CreateCheckinCommand {
        user_id,
        checkin: NewCheckin {
            goal_id,
            progress_notes: req.progress_notes,
            completed_milestones: req.completed_milestones,
            challenges: req.challenges,
            next_steps: req.next_steps,
        },
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(_) => (StatusCode::CREATED, Json(CheckinRecordedResponse::new())).into_response(),
        Err(e) => handle_checkin_error(e),
    }
}

/// GET /api/progress/:goal_id - Progress report for a goal
pub async fn get_progress_report(
    State(handlers): State<CheckinHandlers>,
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

    let query = GetProgressReportQuery { user_id, goal_id };

    match handlers.report_handler.handle(query).await {
        Ok(report) => (
            StatusCode::OK,
            Json(ProgressReportResponse::from(&report)),
        )
            .into_response(),
        Err(e) => handle_checkin_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_checkin_error(error: CheckinError) -> Response {
    match error {
        CheckinError::GoalNotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Goal", &id.to_string())),
        )
            .into_response(),
        CheckinError::StoreUnavailable(reason) => {
            tracing::error!("Check-in store unavailable: {}", reason);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::unavailable("Service temporarily unavailable")),
            )
                .into_response()
        }
        CheckinError::Internal(reason) => {
            tracing::error!("Check-in operation failed: {}", reason);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Internal server error")),
            )
                .into_response()
        }
    }
}
