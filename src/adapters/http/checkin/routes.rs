//! HTTP routes for check-in and progress report endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_checkin, get_progress_report, CheckinHandlers};

/// Creates the check-in router.
pub fn checkin_routes(handlers: CheckinHandlers) -> Router {
    Router::new()
        .route("/", post(create_checkin))
        .with_state(handlers)
}

/// Creates the progress report router.
pub fn progress_routes(handlers: CheckinHandlers) -> Router {
    Router::new()
        .route("/:goal_id", get(get_progress_report))
        .with_state(handlers)
}
