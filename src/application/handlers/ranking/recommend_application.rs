//! RecommendApplicationHandler - Command handler scoring one judgment form.
//!
//! Pipeline: validate judgments → derive weights → optional consistency
//! gate → fuzzy TOPSIS ranking → result summary.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::foundation::{DomainError, RecommendationId, Timestamp};
use crate::domain::ranking::{
    ComparisonOption, ConsistencyCheck, DecisionDomain, FuzzyRanker, JudgmentError,
    PairwiseJudgment, Questionnaire, RecommendationComputed, ResultFormatter, WeightDeriver,
    DEFAULT_MAX_CONSISTENCY_RATIO,
};

/// Command to score one completed set of pairwise judgments.
#[derive(Debug, Clone)]
pub struct RecommendApplicationCommand {
    pub judgments: Vec<PairwiseJudgment>,
}

impl RecommendApplicationCommand {
    pub fn new(judgments: Vec<PairwiseJudgment>) -> Self {
        Self { judgments }
    }

    /// Builds the command from one answer per questionnaire question.
    pub fn from_answers(
        questionnaire: &Questionnaire,
        answers: &[ComparisonOption],
    ) -> Result<Self, JudgmentError> {
        Ok(Self::new(questionnaire.judgments(answers)?))
    }
}

/// Scoring behaviour that can be toggled per deployment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringSettings {
    /// Reject judgment sets whose consistency ratio exceeds the maximum.
    pub enforce_consistency: bool,
    pub max_consistency_ratio: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            enforce_consistency: false,
            max_consistency_ratio: DEFAULT_MAX_CONSISTENCY_RATIO,
        }
    }
}

/// Handler producing a recommendation from pairwise judgments.
///
/// Holds no mutable state; one instance can serve any number of requests.
pub struct RecommendApplicationHandler {
    domain: Arc<DecisionDomain>,
    settings: ScoringSettings,
}

impl RecommendApplicationHandler {
    pub fn new(domain: Arc<DecisionDomain>, settings: ScoringSettings) -> Self {
        Self { domain, settings }
    }

    pub fn domain(&self) -> &DecisionDomain {
        &self.domain
    }

    pub fn settings(&self) -> ScoringSettings {
        self.settings
    }

    /// The questions a caller has to answer for this handler's domain.
    pub fn questionnaire(&self) -> Questionnaire {
        Questionnaire::for_domain(&self.domain)
    }

    pub fn handle(
        &self,
        cmd: RecommendApplicationCommand,
    ) -> Result<RecommendationComputed, DomainError> {
        let domain = self.domain.as_ref();
        debug!(
            domain = domain.name(),
            judgments = cmd.judgments.len(),
            "Scoring judgment set"
        );

        // 1. Validate and derive weights
        let (matrix, weights) = WeightDeriver::new(domain.criteria())
            .derive(&cmd.judgments)
            .map_err(|err| {
                warn!(error = %err, "Rejected judgment set");
                DomainError::from(err)
            })?;
        debug!(weights = ?weights.values(), "Derived criterion weights");

        // 2. Consistency
        let report = if self.settings.enforce_consistency {
            ConsistencyCheck::enforce(&matrix, self.settings.max_consistency_ratio).map_err(
                |err| {
                    warn!(error = %err, "Rejected inconsistent judgment set");
                    DomainError::from(err)
                },
            )?
        } else {
            ConsistencyCheck::evaluate(&matrix)
        };
        debug!(
            lambda_max = report.lambda_max,
            consistency_ratio = report.consistency_ratio,
            "Evaluated judgment consistency"
        );

        // 3. Rank
        let (ranking, crisp) = FuzzyRanker::new(domain).rank(&weights)?;

        // 4. Summarize
        let summary = ResultFormatter::new(domain).format_result(&ranking, &crisp)?;

        let event = RecommendationComputed {
            recommendation_id: RecommendationId::new(),
            domain: domain.name().to_string(),
            weights,
            consistency_ratio: report.consistency_ratio,
            ranking,
            summary,
            computed_at: Timestamp::now(),
        };

        info!(
            recommendation_id = %event.recommendation_id,
            best = %event.summary.best.code,
            score = event.summary.best.score,
            "Recommendation computed"
        );

        Ok(event)
    }
}
