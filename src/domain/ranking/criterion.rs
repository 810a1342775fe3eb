//! Criteria and alternatives of a decision domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether lower or higher values are preferable on a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionKind {
    /// Lower is better (prices, fees).
    Cost,
    /// Higher is better.
    Benefit,
}

impl CriterionKind {
    /// Returns the opposite classification.
    pub fn inverted(&self) -> Self {
        match self {
            CriterionKind::Cost => CriterionKind::Benefit,
            CriterionKind::Benefit => CriterionKind::Cost,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            CriterionKind::Cost => "cost",
            CriterionKind::Benefit => "benefit",
        }
    }
}

impl fmt::Display for CriterionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A decision criterion, identified by a short code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Criterion {
    pub code: String,
    pub name: String,
    pub kind: CriterionKind,
}

impl Criterion {
    /// Creates a new criterion.
    pub fn new(code: impl Into<String>, name: impl Into<String>, kind: CriterionKind) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            kind,
        }
    }

    /// Creates a cost criterion.
    pub fn cost(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(code, name, CriterionKind::Cost)
    }

    /// Creates a benefit criterion.
    pub fn benefit(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(code, name, CriterionKind::Benefit)
    }

    pub fn is_cost(&self) -> bool {
        self.kind == CriterionKind::Cost
    }
}

/// An option being ranked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Alternative {
    pub code: String,
    pub name: String,
}

impl Alternative {
    /// Creates a new alternative.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}
