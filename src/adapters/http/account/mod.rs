//! HTTP adapter for authentication endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{LoginRequest, RegisterRequest, TokenResponse, UserResponse};
pub use handlers::AccountHandlers;
pub use routes::account_routes;
