//! Ports - Interfaces for external dependencies.
//!
//! Ports define the contracts that adapters must implement.
//! This enables dependency inversion and easy testing with mocks.

mod domain_profile_source;

pub use domain_profile_source::{DomainProfileSource, ProfileSourceError};
