//! Consistency Check - Saaty consistency ratio of a comparison matrix.
//!
//! Weight derivation trusts judgments as given. This check is an opt-in
//! gate the application layer can apply after weights are derived.

use serde::{Deserialize, Serialize};

use super::{ComparisonMatrix, JudgmentError, WeightDeriver};

/// Saaty's random consistency index for matrices of size 1 through 15.
pub const RANDOM_INDEX: [f64; 15] = [
    0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49, 1.51, 1.48, 1.56, 1.57, 1.59,
];

/// Conventional upper bound for an acceptable consistency ratio.
pub const DEFAULT_MAX_CONSISTENCY_RATIO: f64 = 0.10;

/// Result of a consistency evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    pub lambda_max: f64,
    pub consistency_index: f64,
    pub consistency_ratio: f64,
}

impl ConsistencyReport {
    pub fn is_acceptable(&self, max_ratio: f64) -> bool {
        self.consistency_ratio <= max_ratio
    }
}

pub struct ConsistencyCheck;

impl ConsistencyCheck {
    /// Computes λmax, CI, and CR for a matrix.
    ///
    /// The priority vector is derived from `matrix` itself, so the weights
    /// always line up with its rows.
    ///
    /// # Edge Cases
    /// - n <= 2: always perfectly consistent (CR = 0)
    /// - n > 15: uses the largest tabulated random index
    pub fn evaluate(matrix: &ComparisonMatrix) -> ConsistencyReport {
        let n = matrix.size();
        if n <= 2 {
            return ConsistencyReport {
                lambda_max: n as f64,
                consistency_index: 0.0,
                consistency_ratio: 0.0,
            };
        }

        let w = WeightDeriver::priority_vector(matrix).values();
        let lambda_max = matrix
            .rows()
            .iter()
            .zip(&w)
            .map(|(row, wi)| {
                let weighted_sum: f64 = row.iter().zip(&w).map(|(a, wj)| a * wj).sum();
                weighted_sum / wi
            })
            .sum::<f64>()
            / n as f64;

        let consistency_index = ((lambda_max - n as f64) / (n as f64 - 1.0)).max(0.0);
        let random_index = RANDOM_INDEX
            .get(n - 1)
            .copied()
            .unwrap_or(RANDOM_INDEX[RANDOM_INDEX.len() - 1]);

        ConsistencyReport {
            lambda_max,
            consistency_index,
            consistency_ratio: consistency_index / random_index,
        }
    }

    /// Evaluates and rejects reports above `max_ratio`.
    pub fn enforce(
        matrix: &ComparisonMatrix,
        max_ratio: f64,
    ) -> Result<ConsistencyReport, JudgmentError> {
        let report = Self::evaluate(matrix);
        if !report.is_acceptable(max_ratio) {
            return Err(JudgmentError::Inconsistent {
                ratio: report.consistency_ratio,
                threshold: max_ratio,
            });
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ranking::{Criterion, DecisionDomain, PairwiseJudgment};

    fn judgments_with(overrides: &[(&str, &str, f64)]) -> Vec<PairwiseJudgment> {
        DecisionDomain::food_delivery()
            .questions()
            .iter()
            .map(|(a, b)| {
                let ratio = overrides
                    .iter()
                    .find(|(oa, ob, _)| oa == a && ob == b)
                    .map(|(_, _, r)| *r)
                    .unwrap_or(1.0);
                PairwiseJudgment::new(a.clone(), b.clone(), ratio)
            })
            .collect()
    }

    fn evaluate(judgments: &[PairwiseJudgment]) -> ConsistencyReport {
        let domain = DecisionDomain::food_delivery();
        let matrix = ComparisonMatrix::from_judgments(domain.criteria(), judgments).unwrap();
        ConsistencyCheck::evaluate(&matrix)
    }

    #[test]
    fn equal_judgments_are_perfectly_consistent() {
        let report = evaluate(&judgments_with(&[]));
        assert!((report.lambda_max - 7.0).abs() < 1e-9);
        assert!(report.consistency_ratio.abs() < 1e-9);
    }

    #[test]
    fn single_dominant_criterion_is_consistent() {
        let overrides: Vec<_> = ["P", "KP", "HO", "KR", "KM", "KK"]
            .iter()
            .map(|b| ("HP", *b, 9.0))
            .collect();
        let report = evaluate(&judgments_with(&overrides));
        assert!(report.consistency_ratio.abs() < 1e-9);
        assert!(report.is_acceptable(DEFAULT_MAX_CONSISTENCY_RATIO));
    }

    #[test]
    fn circular_preferences_are_inconsistent() {
        // HP >> P, P >> KP, yet KP >> HP.
        let report = evaluate(&judgments_with(&[
            ("HP", "P", 9.0),
            ("KP", "P", 1.0 / 9.0),
            ("HP", "KP", 1.0 / 9.0),
        ]));
        assert!((report.consistency_ratio - 0.4392).abs() < 1e-3);
        assert!(!report.is_acceptable(DEFAULT_MAX_CONSISTENCY_RATIO));
    }

    #[test]
    fn enforce_rejects_above_threshold() {
        let domain = DecisionDomain::food_delivery();
        let judgments = judgments_with(&[
            ("HP", "P", 9.0),
            ("KP", "P", 1.0 / 9.0),
            ("HP", "KP", 1.0 / 9.0),
        ]);
        let matrix = ComparisonMatrix::from_judgments(domain.criteria(), &judgments).unwrap();

        let err = ConsistencyCheck::enforce(&matrix, 0.1).unwrap_err();
        assert!(matches!(err, JudgmentError::Inconsistent { threshold, .. } if threshold == 0.1));
        assert!(ConsistencyCheck::enforce(&matrix, 0.5).is_ok());
    }

    #[test]
    fn two_criteria_are_always_consistent() {
        let criteria = vec![Criterion::cost("C1", "Price"), Criterion::benefit("C2", "Quality")];
        let matrix =
            ComparisonMatrix::from_judgments(&criteria, &[PairwiseJudgment::new("C1", "C2", 9.0)])
                .unwrap();
        let report = ConsistencyCheck::evaluate(&matrix);
        assert_eq!(report.consistency_ratio, 0.0);
    }

    #[test]
    fn three_criteria_textbook_matrix() {
        // A > B (3), A > C (5), B > C (3).
        let criteria = vec![
            Criterion::benefit("A", "Alpha"),
            Criterion::benefit("B", "Beta"),
            Criterion::benefit("C", "Gamma"),
        ];
        let matrix = ComparisonMatrix::from_judgments(
            &criteria,
            &[
                PairwiseJudgment::new("A", "B", 3.0),
                PairwiseJudgment::new("A", "C", 5.0),
                PairwiseJudgment::new("B", "C", 3.0),
            ],
        )
        .unwrap();

        let report = ConsistencyCheck::evaluate(&matrix);

        assert!((report.lambda_max - 3.0387).abs() < 1e-3, "{}", report.lambda_max);
        assert!((report.consistency_ratio - 0.0334).abs() < 1e-3);
        assert!(report.consistency_ratio.is_finite());
    }
}
