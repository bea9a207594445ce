//! Ports: contracts between the application core and the outside world.
//!
//! Command and query handlers hold these as `Arc<dyn Trait>`, injected
//! at startup. Adapters implement them; tests substitute mocks.

mod checkin_repository;
mod goal_repository;
mod journey_generator;
mod password_hasher;
mod token_service;
mod user_repository;

pub use checkin_repository::{CheckinRepository, CHECKIN_LIST_LIMIT};
pub use goal_repository::{GoalRepository, GOAL_LIST_LIMIT};
pub use journey_generator::{GenerationError, JourneyGenerator};
pub use password_hasher::{HashingError, PasswordHasher};
pub use token_service::TokenService;
pub use user_repository::UserRepository;
