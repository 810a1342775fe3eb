//! Reciprocal pairwise-comparison matrix.

use std::collections::HashMap;

use super::{Criterion, JudgmentError, PairwiseJudgment};

/// Square criterion × criterion matrix with unit diagonal and
/// `m[i][j] * m[j][i] == 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonMatrix {
    codes: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl ComparisonMatrix {
    /// Builds the matrix from exactly one judgment per unordered pair.
    ///
    /// # Errors
    /// Fails on the first unknown criterion, self comparison, bad ratio,
    /// duplicate pair (including a supplied reverse), or missing pair.
    pub fn from_judgments(
        criteria: &[Criterion],
        judgments: &[PairwiseJudgment],
    ) -> Result<Self, JudgmentError> {
        let n = criteria.len();
        let index: HashMap<&str, usize> = criteria
            .iter()
            .enumerate()
            .map(|(i, c)| (c.code.as_str(), i))
            .collect();

        let mut values = vec![vec![1.0; n]; n];
        let mut judged = vec![vec![false; n]; n];

        for judgment in judgments {
            let i = Self::position(&index, &judgment.a)?;
            let j = Self::position(&index, &judgment.b)?;
            if i == j {
                return Err(JudgmentError::SelfComparison {
                    code: judgment.a.clone(),
                });
            }
            judgment.check_ratio()?;

            let (lo, hi) = (i.min(j), i.max(j));
            if judged[lo][hi] {
                return Err(JudgmentError::DuplicatePair {
                    a: judgment.a.clone(),
                    b: judgment.b.clone(),
                });
            }
            judged[lo][hi] = true;

            values[i][j] = judgment.ratio;
            values[j][i] = 1.0 / judgment.ratio;
        }

        for i in 0..n {
            for j in (i + 1)..n {
                if !judged[i][j] {
                    return Err(JudgmentError::MissingPair {
                        a: criteria[i].code.clone(),
                        b: criteria[j].code.clone(),
                    });
                }
            }
        }

        Ok(Self {
            codes: criteria.iter().map(|c| c.code.clone()).collect(),
            values,
        })
    }

    fn position(index: &HashMap<&str, usize>, code: &str) -> Result<usize, JudgmentError> {
        index
            .get(code)
            .copied()
            .ok_or_else(|| JudgmentError::UnknownCriterion {
                code: code.to_string(),
            })
    }

    pub fn size(&self) -> usize {
        self.codes.len()
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    /// Entry by position.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.values.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Entry by criterion codes.
    pub fn value(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.codes.iter().position(|c| c == a)?;
        let j = self.codes.iter().position(|c| c == b)?;
        self.get(i, j)
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Sum of each column.
    pub fn column_sums(&self) -> Vec<f64> {
        (0..self.size())
            .map(|j| self.values.iter().map(|row| row[j]).sum())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria() -> Vec<Criterion> {
        vec![
            Criterion::cost("C1", "Price"),
            Criterion::benefit("C2", "Quality"),
            Criterion::benefit("C3", "Speed"),
        ]
    }

    fn complete() -> Vec<PairwiseJudgment> {
        vec![
            PairwiseJudgment::new("C1", "C2", 3.0),
            PairwiseJudgment::new("C1", "C3", 5.0),
            PairwiseJudgment::new("C3", "C2", 1.0 / 3.0),
        ]
    }

    #[test]
    fn fills_judgments_and_reciprocals() {
        let m = ComparisonMatrix::from_judgments(&criteria(), &complete()).unwrap();

        assert_eq!(m.value("C1", "C2"), Some(3.0));
        assert_eq!(m.value("C2", "C1"), Some(1.0 / 3.0));
        assert_eq!(m.value("C3", "C2"), Some(1.0 / 3.0));
        assert_eq!(m.value("C2", "C3"), Some(3.0));
    }

    #[test]
    fn diagonal_is_one_and_matrix_is_reciprocal() {
        let m = ComparisonMatrix::from_judgments(&criteria(), &complete()).unwrap();
        for i in 0..m.size() {
            assert_eq!(m.get(i, i), Some(1.0));
            for j in 0..m.size() {
                let product = m.get(i, j).unwrap() * m.get(j, i).unwrap();
                assert!((product - 1.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn rejects_missing_pair() {
        let err = ComparisonMatrix::from_judgments(&criteria(), &complete()[..2]).unwrap_err();
        assert_eq!(
            err,
            JudgmentError::MissingPair {
                a: "C2".to_string(),
                b: "C3".to_string(),
            }
        );
    }

    #[test]
    fn rejects_reverse_of_existing_pair() {
        let mut judgments = complete();
        judgments.push(PairwiseJudgment::new("C2", "C1", 1.0 / 3.0));

        let err = ComparisonMatrix::from_judgments(&criteria(), &judgments).unwrap_err();
        assert_eq!(
            err,
            JudgmentError::DuplicatePair {
                a: "C2".to_string(),
                b: "C1".to_string(),
            }
        );
    }

    #[test]
    fn rejects_unknown_criterion() {
        let judgments = vec![PairwiseJudgment::new("C1", "C9", 3.0)];
        let err = ComparisonMatrix::from_judgments(&criteria(), &judgments).unwrap_err();
        assert_eq!(err, JudgmentError::UnknownCriterion { code: "C9".to_string() });
    }

    #[test]
    fn rejects_self_comparison() {
        let judgments = vec![PairwiseJudgment::new("C2", "C2", 1.0)];
        let err = ComparisonMatrix::from_judgments(&criteria(), &judgments).unwrap_err();
        assert_eq!(err, JudgmentError::SelfComparison { code: "C2".to_string() });
    }

    #[test]
    fn rejects_off_scale_ratio_before_filling() {
        let mut judgments = complete();
        judgments[1].ratio = 4.0;
        let err = ComparisonMatrix::from_judgments(&criteria(), &judgments).unwrap_err();
        assert!(matches!(err, JudgmentError::OffScaleRatio { .. }));
    }

    #[test]
    fn column_sums_add_up_entries() {
        let m = ComparisonMatrix::from_judgments(&criteria(), &complete()).unwrap();
        let sums = m.column_sums();
        assert!((sums[0] - (1.0 + 1.0 / 3.0 + 1.0 / 5.0)).abs() < 1e-12);
        assert!((sums[1] - (3.0 + 1.0 + 1.0 / 3.0)).abs() < 1e-12);
    }
}
