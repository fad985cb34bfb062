//! Evaluation strategies, one per kind of drill answer.
//!
//! Every strategy decides `is_correct` by comparing the answer against the
//! target value, and separately grades the question's atoms for feedback.
//! [`Evaluator`] closes the set so a lesson resolves its strategy once.

mod decimals;
mod digital_time;
mod exact;
mod fractions;
mod informal_time;
mod ordinal;
mod phone;
mod standard;

pub use decimals::DecimalsStrategy;
pub use digital_time::DigitalTimeStrategy;
pub use exact::ExactMatchStrategy;
pub use fractions::FractionsStrategy;
pub use informal_time::InformalTimeStrategy;
pub use ordinal::OrdinalNumberStrategy;
pub use phone::PhoneNumberStrategy;
pub use standard::StandardNumberStrategy;

use crate::model::{EvaluationResult, Question};

/// Evaluates a learner's raw input against a question.
///
/// Implementations are pure: the same input and question always give the
/// same result, and malformed input is a graded outcome rather than an error.
pub trait EvaluationStrategy: Send + Sync {
    /// Short strategy name (e.g. "informal-time").
    fn name(&self) -> &'static str;

    /// Evaluate `input` against `question`.
    fn evaluate(&self, input: &str, question: &Question) -> EvaluationResult;
}

/// The closed set of strategies, dispatched without boxing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluator {
    ExactMatch(ExactMatchStrategy),
    StandardNumber(StandardNumberStrategy),
    OrdinalNumber(OrdinalNumberStrategy),
    Decimals(DecimalsStrategy),
    Fractions(FractionsStrategy),
    PhoneNumber(PhoneNumberStrategy),
    DigitalTime(DigitalTimeStrategy),
    InformalTime(InformalTimeStrategy),
}

impl Evaluator {
    fn strategy(&self) -> &dyn EvaluationStrategy {
        match self {
            Evaluator::ExactMatch(s) => s,
            Evaluator::StandardNumber(s) => s,
            Evaluator::OrdinalNumber(s) => s,
            Evaluator::Decimals(s) => s,
            Evaluator::Fractions(s) => s,
            Evaluator::PhoneNumber(s) => s,
            Evaluator::DigitalTime(s) => s,
            Evaluator::InformalTime(s) => s,
        }
    }
}

impl EvaluationStrategy for Evaluator {
    fn name(&self) -> &'static str {
        self.strategy().name()
    }

    fn evaluate(&self, input: &str, question: &Question) -> EvaluationResult {
        let result = self.strategy().evaluate(input, question);
        tracing::debug!(
            strategy = self.name(),
            target_value = %question.target_value,
            input,
            correct = result.is_correct,
            graded = result.atom_updates.graded_count(),
            "evaluated answer"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluator_delegates_to_strategy() {
        let evaluator = Evaluator::StandardNumber(StandardNumberStrategy);
        let question = Question::new("123", ["1", "20", "3"]);
        let result = evaluator.evaluate("123", &question);
        assert!(result.is_correct);
        assert_eq!(evaluator.name(), "standard-number");
    }

    #[test]
    fn evaluate_is_idempotent() {
        let evaluator = Evaluator::InformalTime(InformalTimeStrategy);
        let question = Question::new("0415|1615", ["#kvart", "#over", "4"]);
        assert_eq!(
            evaluator.evaluate("0430", &question),
            evaluator.evaluate("0430", &question)
        );
    }
}
