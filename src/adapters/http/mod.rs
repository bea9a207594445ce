//! HTTP adapters - REST API implementation.
//!
//! Each domain module has its own router; [`api_router`] assembles them
//! into the full application surface.

use std::time::Duration;

use axum::{routing::get, Json, Router};
use serde_json::json;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

pub mod account;
pub mod checkin;
pub mod goal;
pub mod middleware;
pub mod response;

pub use account::{account_routes, AccountHandlers};
pub use checkin::{checkin_routes, progress_routes, CheckinHandlers};
pub use goal::{goal_routes, GoalHandlers};
pub use response::ErrorResponse;

use self::middleware::{auth_middleware, AuthState};

/// GET / - Service banner
async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "AI Learning Tutor API" }))
}

/// GET /api/health - Liveness probe
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy" }))
}

/// Assembles the complete application router.
///
/// The auth middleware resolves Bearer tokens for every request; routes
/// that need a caller identity enforce it with the `RequireAuth`
/// extractor, so the public register/login/health endpoints pass through
/// untouched.
pub fn api_router(
    account_handlers: AccountHandlers,
    goal_handlers: GoalHandlers,
    checkin_handlers: CheckinHandlers,
    auth_state: AuthState,
    request_timeout: Duration,
) -> Router {
    let api = Router::new()
        .nest("/auth", account_routes(account_handlers))
        .nest("/goals", goal_routes(goal_handlers))
        .nest("/checkins", checkin_routes(checkin_handlers.clone()))
        .nest("/progress", progress_routes(checkin_handlers))
        .route("/health", get(health_check));

    Router::new()
        .route("/", get(root))
        .nest("/api", api)
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            auth_middleware,
        ))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}
