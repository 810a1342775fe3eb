//! Error types for weight derivation, ranking, and domain profiles.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Rejected pairwise-comparison input.
///
/// Raised before any weight computation starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JudgmentError {
    #[error("Unknown criterion '{code}'")]
    UnknownCriterion { code: String },

    #[error("Criterion '{code}' cannot be compared with itself")]
    SelfComparison { code: String },

    #[error("Pair {a}/{b} was judged more than once")]
    DuplicatePair { a: String, b: String },

    #[error("Missing judgment for pair {a}/{b}")]
    MissingPair { a: String, b: String },

    #[error("Ratio for {a}/{b} must be strictly positive, got {ratio}")]
    NonPositiveRatio { a: String, b: String, ratio: f64 },

    #[error("Ratio for {a}/{b} is not on the 1-9 comparison scale: {ratio}")]
    OffScaleRatio { a: String, b: String, ratio: f64 },

    #[error("Expected {expected} answers, got {actual}")]
    AnswerCountMismatch { expected: usize, actual: usize },

    #[error("Answer option index {index} is out of range (0-8)")]
    InvalidOptionIndex { index: usize },

    #[error("Consistency ratio {ratio:.4} exceeds the accepted maximum {threshold}")]
    Inconsistent { ratio: f64, threshold: f64 },
}

/// Weights or decision matrix that do not fit the decision domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankingError {
    #[error("Criteria mismatch: expected [{}], got [{}]", .expected.join(", "), .actual.join(", "))]
    CriteriaMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("Alternatives mismatch: expected [{}], got [{}]", .expected.join(", "), .actual.join(", "))]
    AlternativesMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("Weight for '{criterion}' must be finite and non-negative, got {weight}")]
    InvalidWeight { criterion: String, weight: f64 },

    #[error("Weights must sum to 1, got {sum}")]
    WeightsNotNormalized { sum: f64 },

    #[error("Ranking is empty")]
    EmptyRanking,

    #[error("Unknown alternative '{code}'")]
    UnknownAlternative { code: String },
}

/// Invalid decision-domain profile.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainProfileError {
    #[error("At least 2 criteria are required, got {count}")]
    TooFewCriteria { count: usize },

    #[error("At least 1 alternative is required")]
    NoAlternatives,

    #[error("Code '{code}' is declared more than once")]
    DuplicateCode { code: String },

    #[error("Code '{code}' is not declared in the profile")]
    UnknownCode { code: String },

    #[error("No rating for alternative '{alternative}' on criterion '{criterion}'")]
    MissingRating {
        alternative: String,
        criterion: String,
    },

    #[error("Alternative '{alternative}' is rated more than once on criterion '{criterion}'")]
    DuplicateRating {
        alternative: String,
        criterion: String,
    },

    #[error("Invalid rating for '{alternative}' on '{criterion}': {source}")]
    InvalidFuzzyNumber {
        alternative: String,
        criterion: String,
        #[source]
        source: ValidationError,
    },

    #[error("Invalid question {a}/{b}: {reason}")]
    InvalidQuestion { a: String, b: String, reason: String },

    #[error("No question covers pair {a}/{b}")]
    MissingQuestion { a: String, b: String },
}

impl From<JudgmentError> for DomainError {
    fn from(err: JudgmentError) -> Self {
        match &err {
            JudgmentError::Inconsistent { ratio, threshold } => {
                DomainError::new(ErrorCode::InconsistentJudgments, err.to_string())
                    .with_detail("consistency_ratio", format!("{:.4}", ratio))
                    .with_detail("threshold", threshold.to_string())
            }
            JudgmentError::UnknownCriterion { code } | JudgmentError::SelfComparison { code } => {
                DomainError::new(ErrorCode::InvalidJudgments, err.to_string())
                    .with_detail("criterion", code.clone())
            }
            JudgmentError::DuplicatePair { a, b }
            | JudgmentError::MissingPair { a, b }
            | JudgmentError::NonPositiveRatio { a, b, .. }
            | JudgmentError::OffScaleRatio { a, b, .. } => {
                DomainError::new(ErrorCode::InvalidJudgments, err.to_string())
                    .with_detail("pair", format!("{}/{}", a, b))
            }
            JudgmentError::AnswerCountMismatch { .. } | JudgmentError::InvalidOptionIndex { .. } => {
                DomainError::new(ErrorCode::InvalidJudgments, err.to_string())
            }
        }
    }
}

impl From<RankingError> for DomainError {
    fn from(err: RankingError) -> Self {
        match &err {
            RankingError::InvalidWeight { criterion, .. } => {
                DomainError::new(ErrorCode::ValidationFailed, err.to_string())
                    .with_detail("criterion", criterion.clone())
            }
            RankingError::WeightsNotNormalized { sum } => {
                DomainError::new(ErrorCode::ValidationFailed, err.to_string())
                    .with_detail("sum", sum.to_string())
            }
            _ => DomainError::new(ErrorCode::InternalError, err.to_string()),
        }
    }
}

impl From<DomainProfileError> for DomainError {
    fn from(err: DomainProfileError) -> Self {
        DomainError::new(ErrorCode::InvalidProfile, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_pair_maps_to_invalid_judgments() {
        let err: DomainError = JudgmentError::MissingPair {
            a: "HP".to_string(),
            b: "P".to_string(),
        }
        .into();

        assert_eq!(err.code, ErrorCode::InvalidJudgments);
        assert_eq!(err.message, "Missing judgment for pair HP/P");
        assert_eq!(err.details.get("pair"), Some(&"HP/P".to_string()));
    }

    #[test]
    fn inconsistency_maps_to_its_own_code() {
        let err: DomainError = JudgmentError::Inconsistent {
            ratio: 0.43923,
            threshold: 0.1,
        }
        .into();

        assert_eq!(err.code, ErrorCode::InconsistentJudgments);
        assert_eq!(err.details.get("consistency_ratio"), Some(&"0.4392".to_string()));
    }

    #[test]
    fn criteria_mismatch_lists_both_sides() {
        let err = RankingError::CriteriaMismatch {
            expected: vec!["HP".to_string(), "P".to_string()],
            actual: vec!["HP".to_string()],
        };
        assert_eq!(err.to_string(), "Criteria mismatch: expected [HP, P], got [HP]");
    }

    #[test]
    fn invalid_weight_maps_to_validation_failed() {
        let err: DomainError = RankingError::InvalidWeight {
            criterion: "HP".to_string(),
            weight: -0.5,
        }
        .into();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("criterion"), Some(&"HP".to_string()));
    }

    #[test]
    fn structural_mismatch_is_internal() {
        let err: DomainError = RankingError::EmptyRanking.into();
        assert_eq!(err.code, ErrorCode::InternalError);
    }

    #[test]
    fn profile_errors_map_to_invalid_profile() {
        let err: DomainError = DomainProfileError::NoAlternatives.into();
        assert_eq!(err.code, ErrorCode::InvalidProfile);
    }
}
