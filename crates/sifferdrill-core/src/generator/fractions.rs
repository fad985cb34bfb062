use rand::Rng;

use crate::atoms::fraction_atoms;
use crate::generator::QuestionGenerator;
use crate::model::Question;
use crate::speech::fraction_phrase;

const MIN_DENOMINATOR: u32 = 2;
const MAX_DENOMINATOR: u32 = 10;

/// Proper fractions with denominators 2–10.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FractionsGenerator;

impl QuestionGenerator for FractionsGenerator {
    fn name(&self) -> &'static str {
        "fractions"
    }

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Question {
        let denominator = rng.gen_range(MIN_DENOMINATOR..=MAX_DENOMINATOR);
        let numerator = rng.gen_range(1..denominator);
        let target = format!("{numerator}/{denominator}");

        Question::new(target.clone(), fraction_atoms(numerator, denominator))
            .with_spoken_text(fraction_phrase(numerator, denominator))
            .with_visual_hint(target)
    }
}
