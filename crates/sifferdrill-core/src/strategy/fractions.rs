//! Fraction strategy.

use crate::atoms::fraction_atoms;
use crate::compare::{compare_bag, fail_all};
use crate::model::{EvaluationResult, Question};
use crate::strategy::EvaluationStrategy;

const FRACTION_SEPARATOR: char = '/';

/// Fractions such as "3/4": numerator graded as a cardinal atom, denominator
/// as an ordinal atom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FractionsStrategy;

impl EvaluationStrategy for FractionsStrategy {
    fn name(&self) -> &'static str {
        "fractions"
    }

    fn evaluate(&self, input: &str, question: &Question) -> EvaluationResult {
        let trimmed = input.trim();

        let parts: Vec<&str> = trimmed.split(FRACTION_SEPARATOR).collect();
        let [numerator, denominator] = parts[..] else {
            tracing::debug!(input, "fraction answer needs exactly one separator");
            return EvaluationResult::new(false, fail_all(&question.atoms));
        };
        if numerator.parse::<i64>().is_err() || denominator.parse::<i64>().is_err() {
            tracing::debug!(input, "fraction answer has non-integer parts");
            return EvaluationResult::new(false, fail_all(&question.atoms));
        }

        let input_atoms = fraction_atoms(numerator, denominator);
        EvaluationResult::new(
            trimmed == question.target_value,
            compare_bag(&question.atoms, &input_atoms),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_quarters() -> Question {
        Question::new("3/4", ["3", "ord:4"])
    }

    #[test]
    fn correct_fraction() {
        let result = FractionsStrategy.evaluate(" 3/4 ", &three_quarters());
        assert!(result.is_correct);
        assert!(result.atom_updates.all_passed());
    }

    #[test]
    fn wrong_numerator() {
        let result = FractionsStrategy.evaluate("5/4", &three_quarters());
        assert!(!result.is_correct);
        assert_eq!(result.atom_updates.get("3"), Some(&[false][..]));
        assert_eq!(result.atom_updates.get("ord:4"), Some(&[true][..]));
    }

    #[test]
    fn inverted_fraction_matches_nothing() {
        let result = FractionsStrategy.evaluate("4/3", &three_quarters());
        assert!(!result.is_correct);
        assert_eq!(result.atom_updates.get("3"), Some(&[false][..]));
        assert_eq!(result.atom_updates.get("ord:4"), Some(&[false][..]));
    }

    #[test]
    fn malformed_splits_fail_all() {
        for input in ["34", "3/4/5", "/4", "3/x", ""] {
            let result = FractionsStrategy.evaluate(input, &three_quarters());
            assert!(!result.is_correct, "{input}");
            assert_eq!(result.atom_updates.get("3"), Some(&[false][..]), "{input}");
            assert_eq!(result.atom_updates.get("ord:4"), Some(&[false][..]), "{input}");
        }
    }
}
