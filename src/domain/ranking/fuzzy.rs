//! Triangular fuzzy numbers and the fuzzy decision matrix.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// An imprecise judgment `(lower, modal, upper)` with `lower <= modal <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangularFuzzyNumber {
    pub lower: f64,
    pub modal: f64,
    pub upper: f64,
}

impl TriangularFuzzyNumber {
    /// Creates a fuzzy number, rejecting non-finite or unordered components.
    pub fn new(lower: f64, modal: f64, upper: f64) -> Result<Self, ValidationError> {
        if !(lower.is_finite() && modal.is_finite() && upper.is_finite()) {
            return Err(ValidationError::invalid_format(
                "fuzzy_number",
                "components must be finite",
            ));
        }
        if lower > modal || modal > upper {
            return Err(ValidationError::invalid_format(
                "fuzzy_number",
                format!("expected lower <= modal <= upper, got ({}, {}, {})", lower, modal, upper),
            ));
        }
        Ok(Self { lower, modal, upper })
    }

    /// Constructor for compile-time constants that are known to be ordered.
    pub(crate) const fn from_parts(lower: f64, modal: f64, upper: f64) -> Self {
        Self { lower, modal, upper }
    }

    /// Multiplies every component by `factor`.
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            lower: self.lower * factor,
            modal: self.modal * factor,
            upper: self.upper * factor,
        }
    }

    /// Graded mean integration: `(l + 4m + u) / 6`.
    pub fn defuzzify(&self) -> f64 {
        (self.lower + 4.0 * self.modal + self.upper) / 6.0
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.lower, self.modal, self.upper]
    }
}

/// Fuzzy ratings indexed by alternative (rows) and criterion (columns).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyDecisionMatrix {
    alternative_codes: Vec<String>,
    criterion_codes: Vec<String>,
    cells: Vec<Vec<TriangularFuzzyNumber>>,
}

impl FuzzyDecisionMatrix {
    /// Assembles a matrix; `cells[i][j]` rates alternative `i` on criterion `j`.
    ///
    /// Returns `None` when the cell grid does not match the code lists.
    pub fn new(
        alternative_codes: Vec<String>,
        criterion_codes: Vec<String>,
        cells: Vec<Vec<TriangularFuzzyNumber>>,
    ) -> Option<Self> {
        if cells.len() != alternative_codes.len()
            || cells.iter().any(|row| row.len() != criterion_codes.len())
        {
            return None;
        }
        Some(Self {
            alternative_codes,
            criterion_codes,
            cells,
        })
    }

    /// Assembles a matrix whose grid shape the caller has already checked.
    pub(crate) fn from_grid(
        alternative_codes: Vec<String>,
        criterion_codes: Vec<String>,
        cells: Vec<Vec<TriangularFuzzyNumber>>,
    ) -> Self {
        debug_assert_eq!(cells.len(), alternative_codes.len());
        Self {
            alternative_codes,
            criterion_codes,
            cells,
        }
    }

    pub fn alternative_codes(&self) -> &[String] {
        &self.alternative_codes
    }

    pub fn criterion_codes(&self) -> &[String] {
        &self.criterion_codes
    }

    /// Rating of alternative `alt` on criterion `crit`, by position.
    pub fn get(&self, alt: usize, crit: usize) -> Option<&TriangularFuzzyNumber> {
        self.cells.get(alt).and_then(|row| row.get(crit))
    }

    /// Rating looked up by codes.
    pub fn rating(&self, alternative: &str, criterion: &str) -> Option<&TriangularFuzzyNumber> {
        let alt = self.alternative_codes.iter().position(|c| c == alternative)?;
        let crit = self.criterion_codes.iter().position(|c| c == criterion)?;
        self.get(alt, crit)
    }

    pub fn rows(&self) -> &[Vec<TriangularFuzzyNumber>] {
        &self.cells
    }

    /// Returns a copy with every column scaled by its criterion weight.
    ///
    /// `weights[j]` applies to criterion `j`; missing weights count as zero.
    pub fn weighted(&self, weights: &[f64]) -> Self {
        let cells = self
            .cells
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(j, tfn)| tfn.scale(weights.get(j).copied().unwrap_or(0.0)))
                    .collect()
            })
            .collect();
        Self {
            alternative_codes: self.alternative_codes.clone(),
            criterion_codes: self.criterion_codes.clone(),
            cells,
        }
    }
}
