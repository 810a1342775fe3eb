//! Feature flags configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ranking::DEFAULT_MAX_CONSISTENCY_RATIO;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FeatureFlags {
    /// Reject judgment sets above the consistency ratio bound
    #[serde(default)]
    pub enforce_consistency: bool,

    /// Upper bound for an accepted consistency ratio
    #[serde(default = "default_max_consistency_ratio")]
    pub max_consistency_ratio: f64,
}

impl FeatureFlags {
    /// Validate feature flag values
    pub fn validate(&self) -> Result<(), ValidationError> {
        let ratio = self.max_consistency_ratio;
        if ratio.is_nan() || ratio <= 0.0 || ratio > 1.0 {
            return Err(ValidationError::InvalidConsistencyRatio(ratio));
        }
        Ok(())
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enforce_consistency: false,
            max_consistency_ratio: default_max_consistency_ratio(),
        }
    }
}

fn default_max_consistency_ratio() -> f64 {
    DEFAULT_MAX_CONSISTENCY_RATIO
}
