//! Result Formatter - boundary between the scoring core and presentation.
//!
//! Turns a ranking into the best alternative, its strongest criteria, and
//! the runners-up. The only arithmetic here is normalizing the winner's own
//! crisp row into percentage shares.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Percentage;

use super::{CrispMatrix, DecisionDomain, RankedAlternative, Ranking, RankingError};

/// Number of contributing criteria reported for the best alternative.
pub const TOP_CRITERIA: usize = 3;

/// An alternative and its closeness coefficient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub code: String,
    pub name: String,
    pub score: f64,
}

impl From<&RankedAlternative> for RankedEntry {
    fn from(ranked: &RankedAlternative) -> Self {
        Self {
            code: ranked.code.clone(),
            name: ranked.name.clone(),
            score: ranked.closeness,
        }
    }
}

/// Share of one criterion in the best alternative's crisp total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionContribution {
    pub code: String,
    pub name: String,
    pub share: Percentage,
}

/// What the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub best: RankedEntry,
    pub top_criteria: Vec<CriterionContribution>,
    pub runners_up: Vec<RankedEntry>,
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Best choice: {} (score {:.4})",
            self.best.name, self.best.score
        )?;
        for contribution in &self.top_criteria {
            writeln!(f, "  {}: {:.1}", contribution.name, contribution.share)?;
        }
        for (place, entry) in self.runners_up.iter().enumerate() {
            writeln!(f, "#{} {} (score {:.4})", place + 2, entry.name, entry.score)?;
        }
        Ok(())
    }
}

pub struct ResultFormatter<'a> {
    domain: &'a DecisionDomain,
}

impl<'a> ResultFormatter<'a> {
    pub fn new(domain: &'a DecisionDomain) -> Self {
        Self { domain }
    }

    /// # Errors
    /// - `EmptyRanking` when there is nothing to recommend
    /// - `UnknownAlternative` when the crisp matrix has no row for the winner
    pub fn format_result(
        &self,
        ranking: &Ranking,
        crisp: &CrispMatrix,
    ) -> Result<ResultSummary, RankingError> {
        let best = ranking.best().ok_or(RankingError::EmptyRanking)?;
        let row = crisp
            .row(&best.code)
            .ok_or_else(|| RankingError::UnknownAlternative {
                code: best.code.clone(),
            })?;

        Ok(ResultSummary {
            best: RankedEntry::from(best),
            top_criteria: self.top_criteria(crisp.criterion_codes(), row),
            runners_up: ranking.entries().iter().skip(1).map(RankedEntry::from).collect(),
        })
    }

    fn top_criteria(&self, codes: &[String], row: &[f64]) -> Vec<CriterionContribution> {
        let total: f64 = row.iter().sum();

        let mut shares: Vec<(&String, f64)> = codes
            .iter()
            .zip(row)
            .map(|(code, value)| {
                let fraction = if total > 0.0 { value / total } else { 0.0 };
                (code, fraction)
            })
            .collect();
        shares.sort_by(|a, b| b.1.total_cmp(&a.1));

        shares
            .into_iter()
            .take(TOP_CRITERIA)
            .map(|(code, fraction)| CriterionContribution {
                code: code.clone(),
                name: self
                    .domain
                    .criterion(code)
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| code.clone()),
                share: Percentage::from_fraction(fraction),
            })
            .collect()
    }
}
