//! Ordinal number strategy.

use crate::atoms::ORDINAL_PREFIX;
use crate::model::{EvaluationResult, Question};
use crate::strategy::standard::evaluate_integer;
use crate::strategy::EvaluationStrategy;

/// Like [`StandardNumberStrategy`](super::StandardNumberStrategy), but the
/// input is decomposed into `ord:` atoms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrdinalNumberStrategy;

impl EvaluationStrategy for OrdinalNumberStrategy {
    fn name(&self) -> &'static str {
        "ordinal-number"
    }

    fn evaluate(&self, input: &str, question: &Question) -> EvaluationResult {
        evaluate_integer(input, question, ORDINAL_PREFIX)
    }
}
