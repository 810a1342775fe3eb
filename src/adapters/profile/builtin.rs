//! Built-in profile source for the food-delivery domain

use tracing::debug;

use crate::domain::ranking::DecisionDomain;
use crate::ports::{DomainProfileSource, ProfileSourceError};

/// Serves the compiled-in food-delivery domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinProfileSource;

impl BuiltinProfileSource {
    pub fn new() -> Self {
        Self
    }
}

impl DomainProfileSource for BuiltinProfileSource {
    fn load(&self) -> Result<DecisionDomain, ProfileSourceError> {
        let domain = DecisionDomain::food_delivery();
        debug!(
            domain = domain.name(),
            criteria = domain.criteria().len(),
            alternatives = domain.alternatives().len(),
            "Loaded built-in decision domain"
        );
        Ok(domain)
    }

    fn describe(&self) -> String {
        "builtin:food-delivery".to_string()
    }
}
