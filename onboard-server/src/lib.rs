//! Restaurant Onboarding Backend
//!
//! A validated restaurant/table registry over SQLite, served as a small
//! HTTP API.
//!
//! # Module structure
//!
//! ```text
//! onboard-server/src/
//! ├── core/          # Config, state, server lifecycle
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # SQLite pool, migrations, repositories
//! └── utils/         # Errors, logging, validation
//! ```
//!
//! The registry enforces three relational invariants: restaurant slugs are
//! globally unique, table codes are unique within their restaurant, and
//! deleting a restaurant cascades to its tables.

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use core::{build_router, Config, Server, ServerState};
pub use utils::{AppError, AppResult};
