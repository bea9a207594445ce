//! HTTP routes for authentication endpoints.

use axum::{routing::post, Router};

use super::handlers::{login, register, AccountHandlers};

/// Creates the auth router with registration and login endpoints.
pub fn account_routes(handlers: AccountHandlers) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .with_state(handlers)
}
