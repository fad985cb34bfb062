use rand::Rng;

use crate::atoms::decompose_decimal;
use crate::generator::QuestionGenerator;
use crate::model::Question;
use crate::speech::decimal_phrase;
use crate::strategy::DecimalsStrategy;

/// Decimal numbers `0,0`–`99,99` with one or two fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalsGenerator {
    separator: char,
}

impl Default for DecimalsGenerator {
    fn default() -> Self {
        Self {
            separator: DecimalsStrategy::default().separator(),
        }
    }
}

impl DecimalsGenerator {
    pub fn with_separator(separator: char) -> Self {
        Self { separator }
    }
}

impl QuestionGenerator for DecimalsGenerator {
    fn name(&self) -> &'static str {
        "decimals"
    }

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Question {
        let integer: u32 = rng.gen_range(0..100);
        let digits = if rng.gen_bool(0.5) {
            format!("{:02}", rng.gen_range(0..100))
        } else {
            rng.gen_range(0..10).to_string()
        };

        let target = format!("{integer}{}{digits}", self.separator);
        Question::new(target.clone(), decompose_decimal(i64::from(integer), &digits))
            .with_spoken_text(decimal_phrase(integer, &digits))
            .with_visual_hint(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::lesson_rng;
    use crate::strategy::EvaluationStrategy;

    #[test]
    fn generated_decimals_grade_as_correct() {
        let strategy = DecimalsStrategy::default();
        let mut rng = lesson_rng(Some(2));
        for question in DecimalsGenerator::default().generate_lesson(&mut rng, 200) {
            let (_, digits) = question.target_value.split_once(',').unwrap();
            assert!(matches!(digits.len(), 1 | 2));

            let result = strategy.evaluate(&question.target_value, &question);
            assert!(result.is_correct, "{}", question.target_value);
            assert!(result.atom_updates.all_passed(), "{}", question.target_value);
        }
    }
}
