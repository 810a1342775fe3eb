//! Questionnaire - the fixed list of pairwise questions for a domain.

use serde::{Deserialize, Serialize};

use super::{ComparisonOption, DecisionDomain, JudgmentError, PairwiseJudgment};

/// One "which matters more?" question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// 1-based position in the questionnaire.
    pub number: usize,
    pub a: String,
    pub b: String,
    pub prompt: String,
}

impl Question {
    /// Answer labels in option order, naming both criteria.
    pub fn option_labels(&self, a_name: &str, b_name: &str) -> Vec<String> {
        ComparisonOption::ALL
            .iter()
            .map(|option| option.label(a_name, b_name))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Questionnaire {
    /// Enumerates the domain's questions in asking order.
    pub fn for_domain(domain: &DecisionDomain) -> Self {
        let questions = domain
            .questions()
            .iter()
            .enumerate()
            .map(|(i, (a, b))| {
                let name_of = |code: &str| {
                    domain
                        .criterion(code)
                        .map(|c| c.name.clone())
                        .unwrap_or_else(|| code.to_string())
                };
                Question {
                    number: i + 1,
                    a: a.clone(),
                    b: b.clone(),
                    prompt: format!("{} vs {}", name_of(a.as_str()), name_of(b.as_str())),
                }
            })
            .collect();
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Pairs one answer with each question, in order.
    pub fn judgments(
        &self,
        answers: &[ComparisonOption],
    ) -> Result<Vec<PairwiseJudgment>, JudgmentError> {
        if answers.len() != self.questions.len() {
            return Err(JudgmentError::AnswerCountMismatch {
                expected: self.questions.len(),
                actual: answers.len(),
            });
        }
        Ok(self
            .questions
            .iter()
            .zip(answers)
            .map(|(q, option)| PairwiseJudgment::from_option(q.a.clone(), q.b.clone(), *option))
            .collect())
    }

    /// Same as [`Self::judgments`] but from raw option positions (0-8).
    pub fn judgments_from_indices(
        &self,
        indices: &[usize],
    ) -> Result<Vec<PairwiseJudgment>, JudgmentError> {
        let answers = indices
            .iter()
            .map(|&index| ComparisonOption::from_index(index))
            .collect::<Result<Vec<_>, _>>()?;
        self.judgments(&answers)
    }
}
