//! Decimal number strategy.

use crate::atoms::{decompose_cardinal, decompose_decimal_fraction};
use crate::compare::{compare_bag, fail_all};
use crate::model::{EvaluationResult, Question};
use crate::strategy::EvaluationStrategy;

/// Default separator between integer and fractional digits.
pub const DEFAULT_DECIMAL_SEPARATOR: char = ',';

/// Decimals such as "2,25": integer and fractional parts are graded as
/// separate bags, and correctness requires the exact written form, so
/// "2,5" and "2,50" are different answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalsStrategy {
    separator: char,
}

impl Default for DecimalsStrategy {
    fn default() -> Self {
        Self {
            separator: DEFAULT_DECIMAL_SEPARATOR,
        }
    }
}

impl DecimalsStrategy {
    pub fn with_separator(separator: char) -> Self {
        Self { separator }
    }

    pub fn separator(&self) -> char {
        self.separator
    }
}

impl EvaluationStrategy for DecimalsStrategy {
    fn name(&self) -> &'static str {
        "decimals"
    }

    fn evaluate(&self, input: &str, question: &Question) -> EvaluationResult {
        let target_atoms = &question.atoms;

        let target_parts: Vec<&str> = question.target_value.split(self.separator).collect();
        let [target_integer, _] = target_parts[..] else {
            tracing::warn!(
                target_value = %question.target_value,
                "decimal question target has no single separator"
            );
            return EvaluationResult::new(false, fail_all(target_atoms));
        };

        // The integer part owns as many leading atoms as its decomposition has.
        let integer_len = decompose_cardinal(target_integer.parse().unwrap_or(0)).len();
        let split_at = integer_len.min(target_atoms.len());
        let (target_int_atoms, target_dec_atoms) = target_atoms.split_at(split_at);

        let mut input_parts = input.split(self.separator);
        let input_integer = input_parts.next().unwrap_or_default();
        let input_fraction = input_parts.next().unwrap_or_default();

        let input_int_atoms = input_integer
            .parse::<i64>()
            .map(decompose_cardinal)
            .unwrap_or_default();
        let input_dec_atoms = decompose_decimal_fraction(input_fraction);

        let updates = compare_bag(target_int_atoms, &input_int_atoms)
            .merge(compare_bag(target_dec_atoms, &input_dec_atoms));

        EvaluationResult::new(input.trim() == question.target_value, updates)
    }
}
