//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod ranking;

pub use ranking::{RecommendApplicationCommand, RecommendApplicationHandler, ScoringSettings};
