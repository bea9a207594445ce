//! GoalLab - Learning Goal Tracking Backend
//!
//! This crate tracks learning goals with weekly milestone journeys,
//! progress check-ins, and derived progress reports. Journeys come from
//! an AI generator with a deterministic placeholder fallback.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
