//! Decision Domain - the immutable configuration a scoring run is bound to.
//!
//! A domain fixes the criteria (with their cost/benefit classification), the
//! alternatives, the fuzzy decision matrix, and the order in which pairwise
//! questions are asked. The built-in food-delivery domain is available via
//! [`DecisionDomain::food_delivery`]; other domains are assembled with
//! [`DecisionDomain::builder`] or deserialized from a [`DomainProfile`].

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

use super::food_delivery;
use super::{
    Alternative, Criterion, CriterionKind, DomainProfileError, FuzzyDecisionMatrix,
    TriangularFuzzyNumber,
};

/// Criteria, alternatives, and fuzzy ratings for one ranking problem.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionDomain {
    name: String,
    criteria: Vec<Criterion>,
    alternatives: Vec<Alternative>,
    fuzzy_matrix: FuzzyDecisionMatrix,
    questions: Vec<(String, String)>,
}

impl DecisionDomain {
    /// Creates a builder for constructing a decision domain.
    pub fn builder() -> DecisionDomainBuilder {
        DecisionDomainBuilder::new()
    }

    /// The food-delivery app domain: 7 criteria, 3 apps, 21 questions.
    pub fn food_delivery() -> Self {
        let criteria: Vec<Criterion> = food_delivery::CRITERIA
            .iter()
            .map(|(code, name, kind)| Criterion::new(*code, *name, *kind))
            .collect();
        let alternatives: Vec<Alternative> = food_delivery::ALTERNATIVES
            .iter()
            .map(|(code, name)| Alternative::new(*code, *name))
            .collect();
        let fuzzy_matrix = FuzzyDecisionMatrix::from_grid(
            alternatives.iter().map(|a| a.code.clone()).collect(),
            criteria.iter().map(|c| c.code.clone()).collect(),
            food_delivery::RATINGS.iter().map(|row| row.to_vec()).collect(),
        );
        let questions = food_delivery::QUESTIONS
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect();

        Self {
            name: food_delivery::NAME.to_string(),
            criteria,
            alternatives,
            fuzzy_matrix,
            questions,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    pub fn fuzzy_matrix(&self) -> &FuzzyDecisionMatrix {
        &self.fuzzy_matrix
    }

    /// Pairwise questions in asking order.
    pub fn questions(&self) -> &[(String, String)] {
        &self.questions
    }

    pub fn criterion_codes(&self) -> Vec<String> {
        self.criteria.iter().map(|c| c.code.clone()).collect()
    }

    pub fn alternative_codes(&self) -> Vec<String> {
        self.alternatives.iter().map(|a| a.code.clone()).collect()
    }

    pub fn criterion(&self, code: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.code == code)
    }

    pub fn alternative(&self, code: &str) -> Option<&Alternative> {
        self.alternatives.iter().find(|a| a.code == code)
    }

    /// Cost/benefit classification per criterion, in column order.
    pub fn criterion_kinds(&self) -> Vec<CriterionKind> {
        self.criteria.iter().map(|c| c.kind).collect()
    }

    /// Number of pairwise judgments a complete questionnaire yields.
    pub fn pair_count(&self) -> usize {
        let n = self.criteria.len();
        n * n.saturating_sub(1) / 2
    }

    /// Returns a copy with one criterion reclassified.
    pub fn with_criterion_kind(
        &self,
        code: &str,
        kind: CriterionKind,
    ) -> Result<Self, DomainProfileError> {
        let mut domain = self.clone();
        let criterion = domain
            .criteria
            .iter_mut()
            .find(|c| c.code == code)
            .ok_or_else(|| DomainProfileError::UnknownCode {
                code: code.to_string(),
            })?;
        criterion.kind = kind;
        Ok(domain)
    }

    /// Converts back into the serializable profile shape.
    pub fn to_profile(&self) -> DomainProfile {
        let mut ratings = BTreeMap::new();
        for (i, alt) in self.alternatives.iter().enumerate() {
            let mut row = BTreeMap::new();
            for (j, crit) in self.criteria.iter().enumerate() {
                if let Some(tfn) = self.fuzzy_matrix.get(i, j) {
                    row.insert(crit.code.clone(), tfn.as_array());
                }
            }
            ratings.insert(alt.code.clone(), row);
        }

        DomainProfile {
            name: self.name.clone(),
            criteria: self.criteria.clone(),
            alternatives: self.alternatives.clone(),
            ratings,
            questions: self.questions.clone(),
        }
    }
}

/// Serializable shape of a decision domain (YAML/JSON profile files).
///
/// ```yaml
/// name: food-delivery
/// criteria:
///   - { code: HP, name: Harga Produk, kind: cost }
/// alternatives:
///   - { code: GO, name: GoFood (Gojek) }
/// ratings:
///   GO: { HP: [0.544414, 0.765, 0.8812] }
/// questions:
///   - [HP, P]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainProfile {
    pub name: String,
    pub criteria: Vec<Criterion>,
    pub alternatives: Vec<Alternative>,
    /// alternative code -> criterion code -> `[lower, modal, upper]`
    pub ratings: BTreeMap<String, BTreeMap<String, [f64; 3]>>,
    /// Empty means every pair in criterion order.
    #[serde(default)]
    pub questions: Vec<(String, String)>,
}

impl TryFrom<DomainProfile> for DecisionDomain {
    type Error = DomainProfileError;

    fn try_from(profile: DomainProfile) -> Result<Self, Self::Error> {
        let mut builder = DecisionDomain::builder().name(profile.name);
        for criterion in profile.criteria {
            builder = builder.criterion(criterion);
        }
        for alternative in profile.alternatives {
            builder = builder.alternative(alternative);
        }
        for (alt, row) in profile.ratings {
            for (crit, [l, m, u]) in row {
                builder = builder.rating(alt.clone(), crit, l, m, u);
            }
        }
        for (a, b) in profile.questions {
            builder = builder.question(a, b);
        }
        builder.build()
    }
}

/// Builder for constructing validated DecisionDomain instances.
#[derive(Debug, Default)]
pub struct DecisionDomainBuilder {
    name: String,
    criteria: Vec<Criterion>,
    alternatives: Vec<Alternative>,
    ratings: Vec<(String, String, [f64; 3])>,
    questions: Vec<(String, String)>,
}

impl DecisionDomainBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the domain name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Appends a criterion (column order follows insertion order).
    pub fn criterion(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    /// Appends an alternative.
    pub fn alternative(mut self, alternative: Alternative) -> Self {
        self.alternatives.push(alternative);
        self
    }

    /// Adds the fuzzy rating of an alternative on a criterion.
    pub fn rating(
        mut self,
        alternative: impl Into<String>,
        criterion: impl Into<String>,
        lower: f64,
        modal: f64,
        upper: f64,
    ) -> Self {
        self.ratings
            .push((alternative.into(), criterion.into(), [lower, modal, upper]));
        self
    }

    /// Appends a pairwise question; "A" is the first code.
    pub fn question(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.questions.push((a.into(), b.into()));
        self
    }

    /// Validates and builds the domain.
    pub fn build(self) -> Result<DecisionDomain, DomainProfileError> {
        if self.criteria.len() < 2 {
            return Err(DomainProfileError::TooFewCriteria {
                count: self.criteria.len(),
            });
        }
        if self.alternatives.is_empty() {
            return Err(DomainProfileError::NoAlternatives);
        }

        let criterion_index = unique_index(self.criteria.iter().map(|c| c.code.as_str()))?;
        let alternative_index = unique_index(self.alternatives.iter().map(|a| a.code.as_str()))?;

        let mut grid: Vec<Vec<Option<TriangularFuzzyNumber>>> =
            vec![vec![None; self.criteria.len()]; self.alternatives.len()];
        for (alt, crit, [l, m, u]) in &self.ratings {
            let i = *alternative_index
                .get(alt.as_str())
                .ok_or_else(|| DomainProfileError::UnknownCode { code: alt.clone() })?;
            let j = *criterion_index
                .get(crit.as_str())
                .ok_or_else(|| DomainProfileError::UnknownCode { code: crit.clone() })?;
            if grid[i][j].is_some() {
                return Err(DomainProfileError::DuplicateRating {
                    alternative: alt.clone(),
                    criterion: crit.clone(),
                });
            }
            let tfn = TriangularFuzzyNumber::new(*l, *m, *u).map_err(|source| {
                DomainProfileError::InvalidFuzzyNumber {
                    alternative: alt.clone(),
                    criterion: crit.clone(),
                    source,
                }
            })?;
            grid[i][j] = Some(tfn);
        }

        let mut cells = Vec::with_capacity(grid.len());
        for (i, row) in grid.into_iter().enumerate() {
            let mut cells_row = Vec::with_capacity(row.len());
            for (j, cell) in row.into_iter().enumerate() {
                let tfn = cell.ok_or_else(|| DomainProfileError::MissingRating {
                    alternative: self.alternatives[i].code.clone(),
                    criterion: self.criteria[j].code.clone(),
                })?;
                cells_row.push(tfn);
            }
            cells.push(cells_row);
        }

        let questions = if self.questions.is_empty() {
            default_questions(&self.criteria)
        } else {
            check_questions(&self.questions, &self.criteria, &criterion_index)?;
            self.questions
        };

        let fuzzy_matrix = FuzzyDecisionMatrix::from_grid(
            self.alternatives.iter().map(|a| a.code.clone()).collect(),
            self.criteria.iter().map(|c| c.code.clone()).collect(),
            cells,
        );

        Ok(DecisionDomain {
            name: self.name,
            criteria: self.criteria,
            alternatives: self.alternatives,
            fuzzy_matrix,
            questions,
        })
    }
}

fn unique_index<'a>(
    codes: impl Iterator<Item = &'a str>,
) -> Result<HashMap<&'a str, usize>, DomainProfileError> {
    let mut index = HashMap::new();
    for (i, code) in codes.enumerate() {
        if index.insert(code, i).is_some() {
            return Err(DomainProfileError::DuplicateCode {
                code: code.to_string(),
            });
        }
    }
    Ok(index)
}

fn default_questions(criteria: &[Criterion]) -> Vec<(String, String)> {
    let mut questions = Vec::new();
    for (i, a) in criteria.iter().enumerate() {
        for b in &criteria[i + 1..] {
            questions.push((a.code.clone(), b.code.clone()));
        }
    }
    questions
}

/// Every unordered pair must be asked exactly once.
fn check_questions(
    questions: &[(String, String)],
    criteria: &[Criterion],
    criterion_index: &HashMap<&str, usize>,
) -> Result<(), DomainProfileError> {
    let mut seen = HashSet::new();
    for (a, b) in questions {
        let i = criterion_index
            .get(a.as_str())
            .ok_or_else(|| DomainProfileError::UnknownCode { code: a.clone() })?;
        let j = criterion_index
            .get(b.as_str())
            .ok_or_else(|| DomainProfileError::UnknownCode { code: b.clone() })?;
        if i == j {
            return Err(DomainProfileError::InvalidQuestion {
                a: a.clone(),
                b: b.clone(),
                reason: "a criterion cannot be compared with itself".to_string(),
            });
        }
        if !seen.insert((*i.min(j), *i.max(j))) {
            return Err(DomainProfileError::InvalidQuestion {
                a: a.clone(),
                b: b.clone(),
                reason: "pair is asked more than once".to_string(),
            });
        }
    }

    for i in 0..criteria.len() {
        for j in (i + 1)..criteria.len() {
            if !seen.contains(&(i, j)) {
                return Err(DomainProfileError::MissingQuestion {
                    a: criteria[i].code.clone(),
                    b: criteria[j].code.clone(),
                });
            }
        }
    }
    Ok(())
}
