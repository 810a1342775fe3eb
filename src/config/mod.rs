//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DELIVERY_RECOMMENDER` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use delivery_recommender::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let domain = config.profile_source().load().expect("Failed to load domain");
//! println!("Scoring against {}", domain.name());
//! ```

mod environment;
mod error;
mod features;
mod logging;
mod scoring;

pub use environment::Environment;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use logging::{LogFormat, LoggingConfig};
pub use scoring::ScoringConfig;

use serde::Deserialize;

use crate::adapters::{BuiltinProfileSource, YamlProfileSource};
use crate::application::ScoringSettings;
use crate::ports::DomainProfileSource;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// configuration bound to the built-in food-delivery domain.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Deployment environment
    #[serde(default)]
    pub environment: Environment,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Decision domain source
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DELIVERY_RECOMMENDER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DELIVERY_RECOMMENDER__LOGGING__FORMAT=json` -> `logging.format = json`
    /// - `DELIVERY_RECOMMENDER__FEATURES__ENFORCE_CONSISTENCY=true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DELIVERY_RECOMMENDER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.scoring.validate()?;
        self.features.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Scoring behaviour for the application handler
    pub fn scoring_settings(&self) -> ScoringSettings {
        ScoringSettings {
            enforce_consistency: self.features.enforce_consistency,
            max_consistency_ratio: self.features.max_consistency_ratio,
        }
    }

    /// The configured decision domain source
    pub fn profile_source(&self) -> Box<dyn DomainProfileSource> {
        match &self.scoring.profile_path {
            Some(path) => Box::new(YamlProfileSource::new(path)),
            None => Box::new(BuiltinProfileSource::new()),
        }
    }
}
