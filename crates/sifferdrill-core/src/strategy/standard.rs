//! Standard (cardinal) number strategy.

use crate::atoms::decompose_number;
use crate::compare::{compare_bag, fail_all};
use crate::model::{EvaluationResult, Question};
use crate::strategy::EvaluationStrategy;

/// Integers 0–1000 compared numerically, atoms graded by bag logic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardNumberStrategy;

impl EvaluationStrategy for StandardNumberStrategy {
    fn name(&self) -> &'static str {
        "standard-number"
    }

    fn evaluate(&self, input: &str, question: &Question) -> EvaluationResult {
        evaluate_integer(input, question, "")
    }
}

/// Shared integer evaluation; `prefix` selects the atom family of the input.
pub(super) fn evaluate_integer(
    input: &str,
    question: &Question,
    prefix: &str,
) -> EvaluationResult {
    let Ok(target) = question.target_value.parse::<i64>() else {
        tracing::warn!(
            target_value = %question.target_value,
            "integer question has non-numeric target"
        );
        return EvaluationResult::ungraded();
    };

    let Ok(answer) = input.trim().parse::<i64>() else {
        tracing::debug!(input, "non-numeric answer, failing all atoms");
        return EvaluationResult::new(false, fail_all(&question.atoms));
    };

    let input_atoms = decompose_number(answer, prefix);
    EvaluationResult::new(answer == target, compare_bag(&question.atoms, &input_atoms))
}
