//! Ranking domain events.
//!
//! Emitted once per completed judgment form. The record carries everything
//! the presentation layer needs, so it can be serialized and handed over as is.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RecommendationId, Timestamp};

use super::{Ranking, ResultSummary, WeightVector};

/// Published when a recommendation is computed from a set of judgments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationComputed {
    /// Unique identifier of this computation.
    pub recommendation_id: RecommendationId,
    /// Name of the decision domain the judgments were scored against.
    pub domain: String,
    /// Criterion weights derived from the judgments.
    pub weights: WeightVector,
    /// Saaty consistency ratio of the judgments (reported even when not enforced).
    pub consistency_ratio: f64,
    /// All alternatives, best first.
    pub ranking: Ranking,
    /// Best alternative, its top criteria, and the runners-up.
    pub summary: ResultSummary,
    /// When the recommendation was computed.
    pub computed_at: Timestamp,
}

impl RecommendationComputed {
    pub const EVENT_TYPE: &'static str = "ranking.recommendation_computed";

    pub fn event_type(&self) -> &'static str {
        Self::EVENT_TYPE
    }
}
