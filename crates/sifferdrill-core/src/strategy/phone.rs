//! Phone number strategy.

use crate::atoms::{decompose_phone_number, PHONE_NUMBER_DIGITS};
use crate::compare::{compare_bag, fail_all};
use crate::model::{EvaluationResult, Question};
use crate::strategy::EvaluationStrategy;

/// Ten-digit phone numbers with hybrid decomposition.
///
/// Non-numeric input fails every atom; numeric input of the wrong length is
/// not graded at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhoneNumberStrategy;

impl EvaluationStrategy for PhoneNumberStrategy {
    fn name(&self) -> &'static str {
        "phone-number"
    }

    fn evaluate(&self, input: &str, question: &Question) -> EvaluationResult {
        let trimmed = input.trim();

        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return EvaluationResult::new(false, fail_all(&question.atoms));
        }

        let Some(input_atoms) = decompose_phone_number(trimmed) else {
            tracing::debug!(
                len = trimmed.len(),
                expected = PHONE_NUMBER_DIGITS,
                "phone answer has wrong length, not grading"
            );
            return EvaluationResult::ungraded();
        };

        EvaluationResult::new(
            trimmed == question.target_value,
            compare_bag(&question.atoms, &input_atoms),
        )
    }
}
