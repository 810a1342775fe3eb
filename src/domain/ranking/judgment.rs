//! Pairwise judgments on the 1-9 comparison scale.

use serde::{Deserialize, Serialize};

use super::JudgmentError;

/// Ratios a judgment may take: 1, 3, 5, 7, 9 and their reciprocals.
pub const SCALE_RATIOS: [f64; 9] = [
    1.0,
    3.0,
    5.0,
    7.0,
    9.0,
    1.0 / 3.0,
    1.0 / 5.0,
    1.0 / 7.0,
    1.0 / 9.0,
];

const SCALE_TOLERANCE: f64 = 1e-9;

/// One answer to "which matters more, A or B?", by option position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonOption {
    Equal,
    ASlightlyMore,
    AMore,
    AMuchMore,
    AExtremelyMore,
    BSlightlyMore,
    BMore,
    BMuchMore,
    BExtremelyMore,
}

impl ComparisonOption {
    /// All options in presentation order; position equals [`Self::index`].
    pub const ALL: [ComparisonOption; 9] = [
        ComparisonOption::Equal,
        ComparisonOption::ASlightlyMore,
        ComparisonOption::AMore,
        ComparisonOption::AMuchMore,
        ComparisonOption::AExtremelyMore,
        ComparisonOption::BSlightlyMore,
        ComparisonOption::BMore,
        ComparisonOption::BMuchMore,
        ComparisonOption::BExtremelyMore,
    ];

    /// Looks up an option by its position in the answer list.
    pub fn from_index(index: usize) -> Result<Self, JudgmentError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(JudgmentError::InvalidOptionIndex { index })
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// How many times more important A is than B.
    pub fn ratio(&self) -> f64 {
        SCALE_RATIOS[self.index()]
    }

    /// Answer label naming both criteria.
    pub fn label(&self, a: &str, b: &str) -> String {
        match self {
            ComparisonOption::Equal => format!("{} and {} are equally important", a, b),
            ComparisonOption::ASlightlyMore => format!("{} is slightly more important than {}", a, b),
            ComparisonOption::AMore => format!("{} is more important than {}", a, b),
            ComparisonOption::AMuchMore => format!("{} is much more important than {}", a, b),
            ComparisonOption::AExtremelyMore => {
                format!("{} is extremely more important than {}", a, b)
            }
            ComparisonOption::BSlightlyMore => format!("{} is slightly more important than {}", b, a),
            ComparisonOption::BMore => format!("{} is more important than {}", b, a),
            ComparisonOption::BMuchMore => format!("{} is much more important than {}", b, a),
            ComparisonOption::BExtremelyMore => {
                format!("{} is extremely more important than {}", b, a)
            }
        }
    }
}

/// "`a` is `ratio` times as important as `b`".
///
/// The reverse judgment is implied as the reciprocal and never supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairwiseJudgment {
    pub a: String,
    pub b: String,
    pub ratio: f64,
}

impl PairwiseJudgment {
    /// Creates a judgment from a raw ratio; checked when the matrix is built.
    pub fn new(a: impl Into<String>, b: impl Into<String>, ratio: f64) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            ratio,
        }
    }

    /// Creates a judgment from an answer option.
    pub fn from_option(a: impl Into<String>, b: impl Into<String>, option: ComparisonOption) -> Self {
        Self::new(a, b, option.ratio())
    }

    /// Rejects non-positive and off-scale ratios.
    pub fn check_ratio(&self) -> Result<(), JudgmentError> {
        if self.ratio.is_nan() || self.ratio <= 0.0 {
            return Err(JudgmentError::NonPositiveRatio {
                a: self.a.clone(),
                b: self.b.clone(),
                ratio: self.ratio,
            });
        }
        let on_scale = SCALE_RATIOS
            .iter()
            .any(|allowed| (self.ratio - allowed).abs() <= SCALE_TOLERANCE * allowed.max(1.0));
        if !on_scale {
            return Err(JudgmentError::OffScaleRatio {
                a: self.a.clone(),
                b: self.b.clone(),
                ratio: self.ratio,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_positions_map_to_scale() {
        let ratios: Vec<f64> = ComparisonOption::ALL.iter().map(|o| o.ratio()).collect();
        assert_eq!(ratios, SCALE_RATIOS.to_vec());
        assert_eq!(ComparisonOption::from_index(4).unwrap(), ComparisonOption::AExtremelyMore);
        assert_eq!(ComparisonOption::BMore.index(), 6);
    }

    #[test]
    fn from_index_rejects_out_of_range() {
        assert_eq!(
            ComparisonOption::from_index(9),
            Err(JudgmentError::InvalidOptionIndex { index: 9 })
        );
    }

    #[test]
    fn labels_name_the_preferred_criterion_first() {
        assert_eq!(
            ComparisonOption::AMore.label("Promo", "Keramahan Kurir"),
            "Promo is more important than Keramahan Kurir"
        );
        assert_eq!(
            ComparisonOption::BSlightlyMore.label("Promo", "Keramahan Kurir"),
            "Keramahan Kurir is slightly more important than Promo"
        );
    }

    #[test]
    fn check_ratio_accepts_scale_and_reciprocals() {
        for ratio in SCALE_RATIOS {
            assert!(PairwiseJudgment::new("A", "B", ratio).check_ratio().is_ok());
        }
        assert!(PairwiseJudgment::new("A", "B", 0.333333333333).check_ratio().is_ok());
    }

    #[test]
    fn check_ratio_rejects_non_positive() {
        for ratio in [0.0, -3.0, f64::NAN] {
            assert!(matches!(
                PairwiseJudgment::new("A", "B", ratio).check_ratio(),
                Err(JudgmentError::NonPositiveRatio { .. })
            ));
        }
    }

    #[test]
    fn check_ratio_rejects_off_scale() {
        for ratio in [2.0, 4.0, 0.5, 10.0, f64::INFINITY] {
            assert!(matches!(
                PairwiseJudgment::new("A", "B", ratio).check_ratio(),
                Err(JudgmentError::OffScaleRatio { .. })
            ));
        }
    }

    #[test]
    fn option_serializes_snake_case() {
        let json = serde_json::to_string(&ComparisonOption::AMuchMore).unwrap();
        assert_eq!(json, "\"a_much_more\"");
    }
}
