//! Weight Deriver - AHP priority vector from pairwise judgments.

use serde::{Deserialize, Serialize};

use super::{ComparisonMatrix, Criterion, JudgmentError, PairwiseJudgment};

/// Weight of one criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionWeight {
    pub criterion: String,
    pub weight: f64,
}

/// Non-negative criterion weights summing to 1, in criterion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightVector {
    entries: Vec<CriterionWeight>,
}

impl WeightVector {
    /// Wraps explicit weights without normalizing them.
    pub fn from_entries(entries: Vec<CriterionWeight>) -> Self {
        Self { entries }
    }

    /// Equal weight for every criterion.
    pub fn uniform(criteria: &[Criterion]) -> Self {
        let w = if criteria.is_empty() {
            0.0
        } else {
            1.0 / criteria.len() as f64
        };
        Self {
            entries: criteria
                .iter()
                .map(|c| CriterionWeight {
                    criterion: c.code.clone(),
                    weight: w,
                })
                .collect(),
        }
    }

    pub fn get(&self, criterion: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.criterion == criterion)
            .map(|e| e.weight)
    }

    pub fn entries(&self) -> &[CriterionWeight] {
        &self.entries
    }

    pub fn codes(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.criterion.clone()).collect()
    }

    /// Weights in criterion order.
    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.weight).collect()
    }

    pub fn sum(&self) -> f64 {
        self.entries.iter().map(|e| e.weight).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The highest-weighted criterion; the first one wins ties.
    pub fn dominant(&self) -> Option<&CriterionWeight> {
        self.entries
            .iter()
            .fold(None, |best: Option<&CriterionWeight>, e| match best {
                Some(b) if b.weight >= e.weight => Some(b),
                _ => Some(e),
            })
    }
}

/// Derives criterion weights with the mean-of-normalized-columns method.
///
/// No consistency check happens here; see [`super::ConsistencyCheck`].
pub struct WeightDeriver<'a> {
    criteria: &'a [Criterion],
}

impl<'a> WeightDeriver<'a> {
    pub fn new(criteria: &'a [Criterion]) -> Self {
        Self { criteria }
    }

    /// Validates the judgments, builds the comparison matrix, and returns
    /// both the matrix and the derived weights.
    pub fn derive(
        &self,
        judgments: &[PairwiseJudgment],
    ) -> Result<(ComparisonMatrix, WeightVector), JudgmentError> {
        let matrix = ComparisonMatrix::from_judgments(self.criteria, judgments)?;
        let weights = Self::priority_vector(&matrix);
        Ok((matrix, weights))
    }

    /// Validates the judgments and returns the derived weights.
    pub fn derive_weights(
        &self,
        judgments: &[PairwiseJudgment],
    ) -> Result<WeightVector, JudgmentError> {
        self.derive(judgments).map(|(_, weights)| weights)
    }

    /// # Algorithm
    /// 1. Divide every entry by its column sum.
    /// 2. Average each row of the normalized matrix.
    pub fn priority_vector(matrix: &ComparisonMatrix) -> WeightVector {
        let n = matrix.size();
        let column_sums = matrix.column_sums();

        let entries = matrix
            .rows()
            .iter()
            .zip(matrix.codes())
            .map(|(row, code)| {
                let normalized_sum: f64 = row
                    .iter()
                    .zip(&column_sums)
                    .map(|(value, sum)| value / sum)
                    .sum();
                CriterionWeight {
                    criterion: code.clone(),
                    weight: normalized_sum / n as f64,
                }
            })
            .collect();

        WeightVector { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ranking::DecisionDomain;

    fn all_equal(domain: &DecisionDomain) -> Vec<PairwiseJudgment> {
        domain
            .questions()
            .iter()
            .map(|(a, b)| PairwiseJudgment::new(a.clone(), b.clone(), 1.0))
            .collect()
    }

    #[test]
    fn no_preference_gives_uniform_weights() {
        let domain = DecisionDomain::food_delivery();
        let weights = WeightDeriver::new(domain.criteria())
            .derive_weights(&all_equal(&domain))
            .unwrap();

        assert_eq!(weights.len(), 7);
        for entry in weights.entries() {
            assert!((entry.weight - 1.0 / 7.0).abs() < 1e-9, "{:?}", entry);
        }
    }

    #[test]
    fn weights_follow_criterion_order() {
        let domain = DecisionDomain::food_delivery();
        let weights = WeightDeriver::new(domain.criteria())
            .derive_weights(&all_equal(&domain))
            .unwrap();
        assert_eq!(weights.codes(), domain.criterion_codes());
    }

    #[test]
    fn dominant_price_gets_largest_weight() {
        let domain = DecisionDomain::food_delivery();
        let judgments: Vec<_> = domain
            .questions()
            .iter()
            .map(|(a, b)| {
                let ratio = if a == "HP" { 9.0 } else { 1.0 };
                PairwiseJudgment::new(a.clone(), b.clone(), ratio)
            })
            .collect();

        let weights = WeightDeriver::new(domain.criteria())
            .derive_weights(&judgments)
            .unwrap();

        assert_eq!(weights.dominant().unwrap().criterion, "HP");
        assert!((weights.get("HP").unwrap() - 0.6).abs() < 1e-9);
        assert!((weights.get("KK").unwrap() - 1.0 / 15.0).abs() < 1e-9);
        assert!((weights.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn three_criteria_textbook_example() {
        let criteria = vec![
            Criterion::cost("C1", "Price"),
            Criterion::benefit("C2", "Quality"),
            Criterion::benefit("C3", "Speed"),
        ];
        let judgments = vec![
            PairwiseJudgment::new("C1", "C2", 3.0),
            PairwiseJudgment::new("C1", "C3", 5.0),
            PairwiseJudgment::new("C2", "C3", 3.0),
        ];

        let weights = WeightDeriver::new(&criteria).derive_weights(&judgments).unwrap();

        // Columns sum to 23/15, 13/3, 9.
        let c1 = (15.0 / 23.0 + 9.0 / 13.0 + 5.0 / 9.0) / 3.0;
        assert!((weights.get("C1").unwrap() - c1).abs() < 1e-12);
        assert!((weights.sum() - 1.0).abs() < 1e-12);
        assert!(weights.get("C1") > weights.get("C2"));
        assert!(weights.get("C2") > weights.get("C3"));
    }

    #[test]
    fn invalid_input_fails_before_computation() {
        let domain = DecisionDomain::food_delivery();
        let mut judgments = all_equal(&domain);
        judgments.pop();

        let err = WeightDeriver::new(domain.criteria())
            .derive_weights(&judgments)
            .unwrap_err();
        assert_eq!(
            err,
            JudgmentError::MissingPair {
                a: "KM".to_string(),
                b: "KK".to_string(),
            }
        );
    }

    #[test]
    fn uniform_vector_sums_to_one() {
        let domain = DecisionDomain::food_delivery();
        let weights = WeightVector::uniform(domain.criteria());
        assert!((weights.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn dominant_prefers_first_on_ties() {
        let domain = DecisionDomain::food_delivery();
        let weights = WeightVector::uniform(domain.criteria());
        assert_eq!(weights.dominant().unwrap().criterion, "HP");
    }

    #[test]
    fn weight_vector_serializes_as_list() {
        let weights = WeightVector::from_entries(vec![CriterionWeight {
            criterion: "HP".to_string(),
            weight: 0.5,
        }]);
        let json = serde_json::to_string(&weights).unwrap();
        assert_eq!(json, r#"[{"criterion":"HP","weight":0.5}]"#);
    }
}
