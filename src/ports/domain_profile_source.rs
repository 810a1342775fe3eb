//! DomainProfileSource port - where the decision domain comes from.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::ranking::{DecisionDomain, DomainProfileError};

/// Errors that can occur while loading a decision domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileSourceError {
    /// Profile file not found
    #[error("Profile not found: {0}")]
    NotFound(String),

    /// Permission denied
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Other IO error
    #[error("IO error: {0}")]
    IoError(String),

    /// File is not a well-formed profile document
    #[error("Malformed profile: {0}")]
    Malformed(String),

    /// Well-formed profile that fails domain validation
    #[error("Invalid profile: {0}")]
    Invalid(#[from] DomainProfileError),
}

impl From<ProfileSourceError> for DomainError {
    fn from(err: ProfileSourceError) -> Self {
        let code = match err {
            ProfileSourceError::Malformed(_) | ProfileSourceError::Invalid(_) => {
                ErrorCode::InvalidProfile
            }
            _ => ErrorCode::ProfileUnavailable,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Supplies the immutable decision domain a handler is bound to.
///
/// Loaded once at startup; scoring itself never touches this port.
pub trait DomainProfileSource: Send + Sync {
    /// Loads and validates the domain.
    fn load(&self) -> Result<DecisionDomain, ProfileSourceError>;

    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;
}
