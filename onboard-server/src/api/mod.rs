//! API Route Modules
//!
//! # Structure
//!
//! - [`health`] - health check (public)
//! - [`restaurants`] - restaurant onboarding and management
//! - [`tables`] - dining table management and occupancy

pub mod health;
pub mod restaurants;
pub mod tables;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};
