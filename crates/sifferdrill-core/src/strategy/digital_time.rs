//! Digital clock time strategy.

use crate::atoms::decompose_two_digit_part;
use crate::compare::{compare_positional, fail_all};
use crate::model::{EvaluationResult, Question};
use crate::strategy::EvaluationStrategy;

/// Strict HHMM evaluation with positional grading per field.
///
/// Hour atoms are compared index for index against hour atoms, minute atoms
/// against minute atoms. The answer is correct only when every position
/// matches and neither field of the input decomposes into more atoms than
/// the target's.
///
/// Grades for a repeated atom follow the target's atom order, hour field
/// first: target `0003` answered with `0103` grades `"0"` as
/// `[true, false, true]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigitalTimeStrategy;

/// Left-pad a three-digit time to four digits; `None` for any other length.
fn normalize(time: &str) -> Option<String> {
    match time.len() {
        3 => Some(format!("0{time}")),
        4 => Some(time.to_string()),
        _ => None,
    }
}

/// Split a normalized HHMM string into its two field values.
fn fields(time: &str) -> Option<(u32, u32)> {
    if !time.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let normalized = normalize(time)?;
    let hour = normalized[..2].parse().ok()?;
    let minute = normalized[2..].parse().ok()?;
    Some((hour, minute))
}

impl EvaluationStrategy for DigitalTimeStrategy {
    fn name(&self) -> &'static str {
        "digital-time"
    }

    fn evaluate(&self, input: &str, question: &Question) -> EvaluationResult {
        if !input.bytes().all(|b| b.is_ascii_digit()) {
            tracing::debug!(input, "time answer contains non-digits, not grading");
            return EvaluationResult::ungraded();
        }

        let Some((input_hour, input_minute)) = fields(input) else {
            tracing::debug!(input, "time answer must be 3 or 4 digits");
            return EvaluationResult::new(false, fail_all(&question.atoms));
        };

        let Some((target_hour, _)) = fields(question.stimulus()) else {
            tracing::warn!(
                target_value = %question.target_value,
                "digital time question has malformed target"
            );
            return EvaluationResult::new(false, fail_all(&question.atoms));
        };

        // The hour field owns as many leading atoms as its decomposition has.
        let hour_len = decompose_two_digit_part(target_hour)
            .len()
            .min(question.atoms.len());
        let (target_hour_atoms, target_minute_atoms) = question.atoms.split_at(hour_len);

        let hours = compare_positional(target_hour_atoms, &decompose_two_digit_part(input_hour));
        let minutes = compare_positional(
            target_minute_atoms,
            &decompose_two_digit_part(input_minute),
        );

        let is_correct = hours.is_exact() && minutes.is_exact();
        EvaluationResult::new(is_correct, hours.updates.merge(minutes.updates))
    }
}
