//! Fuzzy Ranker - fuzzy TOPSIS over a weighted fuzzy decision matrix.
//!
//! The base ratings are already scaled into [0, 1], so weighting is applied
//! directly without a separate normalization step.

use serde::{Deserialize, Serialize};

use super::{CriterionKind, DecisionDomain, FuzzyDecisionMatrix, RankingError, WeightVector};

/// Closeness assigned when an alternative is at distance zero from both
/// ideals (every alternative identical on every criterion).
pub const DEGENERATE_CLOSENESS: f64 = 0.0;

/// Allowed deviation of the weight sum from 1.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Defuzzified weighted ratings, alternative × criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrispMatrix {
    alternative_codes: Vec<String>,
    criterion_codes: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl CrispMatrix {
    /// Weights each fuzzy rating and defuzzifies it.
    pub fn from_fuzzy(matrix: &FuzzyDecisionMatrix, weights: &[f64]) -> Self {
        let values = matrix
            .weighted(weights)
            .rows()
            .iter()
            .map(|row| row.iter().map(|tfn| tfn.defuzzify()).collect())
            .collect();
        Self {
            alternative_codes: matrix.alternative_codes().to_vec(),
            criterion_codes: matrix.criterion_codes().to_vec(),
            values,
        }
    }

    pub fn alternative_codes(&self) -> &[String] {
        &self.alternative_codes
    }

    pub fn criterion_codes(&self) -> &[String] {
        &self.criterion_codes
    }

    pub fn get(&self, alternative: &str, criterion: &str) -> Option<f64> {
        let i = self.alternative_codes.iter().position(|c| c == alternative)?;
        let j = self.criterion_codes.iter().position(|c| c == criterion)?;
        self.values.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Crisp values of one alternative, in criterion order.
    pub fn row(&self, alternative: &str) -> Option<&[f64]> {
        let i = self.alternative_codes.iter().position(|c| c == alternative)?;
        self.values.get(i).map(Vec::as_slice)
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Crisp values of one criterion across alternatives.
    pub fn column(&self, j: usize) -> Vec<f64> {
        self.values.iter().filter_map(|row| row.get(j).copied()).collect()
    }
}

/// Best (FPIS) and worst (FNIS) crisp value per criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealSolutions {
    pub criterion_codes: Vec<String>,
    pub positive: Vec<f64>,
    pub negative: Vec<f64>,
}

impl IdealSolutions {
    /// Benefit criteria take max as best; cost criteria take min as best.
    ///
    /// `kinds[j]` classifies criterion `j` of `crisp`.
    pub fn from_crisp(crisp: &CrispMatrix, kinds: &[CriterionKind]) -> Self {
        let mut positive = Vec::with_capacity(kinds.len());
        let mut negative = Vec::with_capacity(kinds.len());

        for (j, kind) in kinds.iter().enumerate() {
            let column = crisp.column(j);
            let max = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let min = column.iter().copied().fold(f64::INFINITY, f64::min);
            match kind {
                CriterionKind::Benefit => {
                    positive.push(max);
                    negative.push(min);
                }
                CriterionKind::Cost => {
                    positive.push(min);
                    negative.push(max);
                }
            }
        }

        Self {
            criterion_codes: crisp.criterion_codes().to_vec(),
            positive,
            negative,
        }
    }

    pub fn fpis(&self, criterion: &str) -> Option<f64> {
        let j = self.criterion_codes.iter().position(|c| c == criterion)?;
        self.positive.get(j).copied()
    }

    pub fn fnis(&self, criterion: &str) -> Option<f64> {
        let j = self.criterion_codes.iter().position(|c| c == criterion)?;
        self.negative.get(j).copied()
    }
}

/// One alternative's position in the ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    pub code: String,
    pub name: String,
    /// Euclidean distance to the positive ideal (D+).
    pub distance_to_best: f64,
    /// Euclidean distance to the negative ideal (D-).
    pub distance_to_worst: f64,
    /// `D- / (D+ + D-)`; higher is better.
    pub closeness: f64,
}

/// Alternatives sorted by closeness coefficient, descending.
///
/// Exact ties keep the domain's alternative order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ranking {
    entries: Vec<RankedAlternative>,
}

impl Ranking {
    pub fn entries(&self) -> &[RankedAlternative] {
        &self.entries
    }

    pub fn best(&self) -> Option<&RankedAlternative> {
        self.entries.first()
    }

    /// Zero-based rank of an alternative.
    pub fn position(&self, code: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.code == code)
    }

    pub fn codes(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.code.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ranks a domain's alternatives for a given weight vector.
pub struct FuzzyRanker<'a> {
    domain: &'a DecisionDomain,
}

impl<'a> FuzzyRanker<'a> {
    pub fn new(domain: &'a DecisionDomain) -> Self {
        Self { domain }
    }

    /// Ranks using the domain's own fuzzy decision matrix.
    pub fn rank(&self, weights: &WeightVector) -> Result<(Ranking, CrispMatrix), RankingError> {
        self.rank_alternatives(weights, self.domain.fuzzy_matrix())
    }

    /// # Algorithm
    /// 1. Scale every TFN by its criterion weight and defuzzify it.
    /// 2. Pick FPIS/FNIS per criterion according to cost/benefit kind.
    /// 3. Euclidean distances D+ and D- per alternative.
    /// 4. CC = D- / (D+ + D-), [`DEGENERATE_CLOSENESS`] when both are zero.
    /// 5. Stable sort by CC, descending.
    pub fn rank_alternatives(
        &self,
        weights: &WeightVector,
        matrix: &FuzzyDecisionMatrix,
    ) -> Result<(Ranking, CrispMatrix), RankingError> {
        let expected = self.domain.criterion_codes();
        if weights.codes() != expected {
            return Err(RankingError::CriteriaMismatch {
                expected,
                actual: weights.codes(),
            });
        }
        if matrix.criterion_codes() != expected.as_slice() {
            return Err(RankingError::CriteriaMismatch {
                expected,
                actual: matrix.criterion_codes().to_vec(),
            });
        }
        check_weights(weights)?;
        let expected_alternatives = self.domain.alternative_codes();
        if matrix.alternative_codes() != expected_alternatives.as_slice() {
            return Err(RankingError::AlternativesMismatch {
                expected: expected_alternatives,
                actual: matrix.alternative_codes().to_vec(),
            });
        }

        let crisp = CrispMatrix::from_fuzzy(matrix, &weights.values());
        let ideals = IdealSolutions::from_crisp(&crisp, &self.domain.criterion_kinds());

        let mut entries: Vec<RankedAlternative> = self
            .domain
            .alternatives()
            .iter()
            .zip(crisp.rows())
            .map(|(alternative, row)| {
                let distance_to_best = euclidean(row, &ideals.positive);
                let distance_to_worst = euclidean(row, &ideals.negative);
                RankedAlternative {
                    code: alternative.code.clone(),
                    name: alternative.name.clone(),
                    distance_to_best,
                    distance_to_worst,
                    closeness: closeness(distance_to_best, distance_to_worst),
                }
            })
            .collect();

        entries.sort_by(|a, b| b.closeness.total_cmp(&a.closeness));

        Ok((Ranking { entries }, crisp))
    }
}

/// Every weight finite and non-negative, summing to 1.
fn check_weights(weights: &WeightVector) -> Result<(), RankingError> {
    if let Some(bad) = weights
        .entries()
        .iter()
        .find(|w| !w.weight.is_finite() || w.weight < 0.0)
    {
        return Err(RankingError::InvalidWeight {
            criterion: bad.criterion.clone(),
            weight: bad.weight,
        });
    }
    let sum = weights.sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(RankingError::WeightsNotNormalized { sum });
    }
    Ok(())
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

fn closeness(distance_to_best: f64, distance_to_worst: f64) -> f64 {
    let total = distance_to_best + distance_to_worst;
    if total > 0.0 {
        distance_to_worst / total
    } else {
        DEGENERATE_CLOSENESS
    }
}
