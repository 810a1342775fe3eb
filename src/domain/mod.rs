//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `ranking` - Pure domain services for weighting criteria and ranking alternatives

pub mod foundation;
pub mod ranking;
