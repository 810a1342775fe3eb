//! Ranking Module - Pure domain services for recommending an alternative.
//!
//! Criterion weights come from pairwise comparisons (AHP priority vector);
//! alternatives are then ranked with fuzzy TOPSIS against those weights.
//!
//! # Components
//!
//! - `DecisionDomain` - Criteria, alternatives, fuzzy ratings, question order
//! - `Questionnaire` - Pairwise questions and the nine answer options
//! - `WeightDeriver` - Reciprocal comparison matrix and priority vector
//! - `ConsistencyCheck` - Saaty consistency ratio (opt-in gate)
//! - `FuzzyRanker` - Weighting, defuzzification, ideals, closeness coefficient
//! - `ResultFormatter` - Best alternative, top criteria, runners-up
//!
//! # Design Philosophy
//!
//! Everything here is pure and stateless. A scoring run is bound to an
//! immutable `DecisionDomain`; nothing is read from global state.

mod comparison_matrix;
mod consistency;
mod criterion;
mod decision_domain;
mod errors;
mod events;
mod food_delivery;
mod fuzzy;
mod fuzzy_ranker;
mod judgment;
mod questionnaire;
mod result_formatter;
mod weight_deriver;

// Re-export all public types
pub use comparison_matrix::ComparisonMatrix;
pub use consistency::{
    ConsistencyCheck, ConsistencyReport, DEFAULT_MAX_CONSISTENCY_RATIO, RANDOM_INDEX,
};
pub use criterion::{Alternative, Criterion, CriterionKind};
pub use decision_domain::{DecisionDomain, DecisionDomainBuilder, DomainProfile};
pub use errors::{DomainProfileError, JudgmentError, RankingError};
pub use events::RecommendationComputed;
pub use fuzzy::{FuzzyDecisionMatrix, TriangularFuzzyNumber};
pub use fuzzy_ranker::{
    CrispMatrix, FuzzyRanker, IdealSolutions, RankedAlternative, Ranking, DEGENERATE_CLOSENESS,
    WEIGHT_SUM_TOLERANCE,
};
pub use judgment::{ComparisonOption, PairwiseJudgment, SCALE_RATIOS};
pub use questionnaire::{Question, Questionnaire};
pub use result_formatter::{
    CriterionContribution, RankedEntry, ResultFormatter, ResultSummary, TOP_CRITERIA,
};
pub use weight_deriver::{CriterionWeight, WeightDeriver, WeightVector};
