//! Adapters: implementations of the ports against real infrastructure.
//!
//! Postgres persistence, Argon2 password hashing, JWT tokens, the OpenAI
//! journey generator, and the HTTP surface. Everything here depends on
//! the domain and ports; nothing in the domain depends on anything here.

pub mod ai;
pub mod auth;
pub mod http;
pub mod postgres;
