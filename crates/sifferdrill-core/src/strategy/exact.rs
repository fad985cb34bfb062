//! Exact string match.

use crate::model::{EvaluationResult, Question};
use crate::strategy::EvaluationStrategy;

/// Requires the input to equal the target value verbatim. No atom grading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExactMatchStrategy;

impl EvaluationStrategy for ExactMatchStrategy {
    fn name(&self) -> &'static str {
        "exact-match"
    }

    fn evaluate(&self, input: &str, question: &Question) -> EvaluationResult {
        EvaluationResult::new(input == question.target_value, Default::default())
    }
}
