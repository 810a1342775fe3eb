//! Scoring configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the decision domain comes from
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct ScoringConfig {
    /// YAML domain profile; the built-in food-delivery domain when unset
    pub profile_path: Option<PathBuf>,
}

impl ScoringConfig {
    /// Validate scoring configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.profile_path {
            Some(path) if path.as_os_str().is_empty() => Err(ValidationError::EmptyProfilePath),
            _ => Ok(()),
        }
    }
}
