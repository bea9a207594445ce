//! Domain layer: entities, value objects, and invariants.
//!
//! No I/O happens here. Persistence, token handling, and journey
//! generation are reached through the contracts in [`crate::ports`].

pub mod checkin;
pub mod foundation;
pub mod goal;
pub mod user;
