//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations. It performs no I/O; where the
//! decision domain comes from is decided by a port at startup.

pub mod handlers;

pub use handlers::{RecommendApplicationCommand, RecommendApplicationHandler, ScoringSettings};
