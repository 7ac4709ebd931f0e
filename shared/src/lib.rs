//! Shared types for the onboarding backend
//!
//! Entity models and request payloads used by the server crate. Database
//! mappings (`sqlx::FromRow` / `sqlx::Type`) are gated behind the `db`
//! feature so lightweight consumers can depend on the plain types.

pub mod models;
pub mod util;
