//! HTTP handlers for registration and login.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::account::{
    LoginUserCommand, LoginUserHandler, RegisterUserCommand, RegisterUserHandler,
};
use crate::domain::user::AccountError;

use super::super::response::ErrorResponse;
use super::dto::{LoginRequest, RegisterRequest, TokenResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AccountHandlers {
    register_handler: Arc<RegisterUserHandler>,
    login_handler: Arc<LoginUserHandler>,
}

impl AccountHandlers {
    pub fn new(
        register_handler: Arc<RegisterUserHandler>,
        login_handler: Arc<LoginUserHandler>,
    ) -> Self {
        Self {
            register_handler,
            login_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/auth/register - Register a new account
pub async fn register(
    State(handlers): State<AccountHandlers>,
    Json(req): Json<RegisterRequest>,
) -> Response {
    let cmd = RegisterUserCommand {
        name: req.name,
        email: req.email,
        password: req.password,
    };

    match handlers.register_handler.handle(cmd).await {
        Ok(account) => {
            let response = TokenResponse::from(account);
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_account_error(e),
    }
}

/// POST /api/auth/login - Sign in with email and password
pub async fn login(
    State(handlers): State<AccountHandlers>,
    Json(req): Json<LoginRequest>,
) -> Response {
    let cmd = LoginUserCommand {
        email: req.email,
        password: req.password,
    };

    match handlers.login_handler.handle(cmd).await {
        Ok(account) => {
            let response = TokenResponse::from(account);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_account_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_account_error(error: AccountError) -> Response {
    match error {
        AccountError::EmailTaken => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Email already registered")),
        )
            .into_response(),
        AccountError::InvalidCredentials => (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::unauthorized("Invalid credentials")),
        )
            .into_response(),
        AccountError::Validation(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(e.to_string())),
        )
            .into_response(),
        AccountError::StoreUnavailable(reason) => {
            tracing::error!("Account store unavailable: {}", reason);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::unavailable("Service temporarily unavailable")),
            )
                .into_response()
        }
        AccountError::Internal(reason) => {
            tracing::error!("Account operation failed: {}", reason);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Internal server error")),
            )
                .into_response()
        }
    }
}
