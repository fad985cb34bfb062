//! Question generators, one per lesson type.
//!
//! Generators own the atoms: every question they produce carries the atom
//! list built by the same decomposition functions the strategies use to
//! decompose answers.

mod decimals;
mod fractions;
mod number;
mod phone;
mod time;

pub use decimals::DecimalsGenerator;
pub use fractions::FractionsGenerator;
pub use number::{CardinalGenerator, OrdinalGenerator, TrickyPairsGenerator, TRICKY_NUMBERS};
pub use phone::PhoneNumberGenerator;
pub use time::{DigitalTimeGenerator, InformalTimeGenerator};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::model::Question;

/// Produces drill questions from a source of randomness.
pub trait QuestionGenerator {
    /// Short generator name (e.g. "cardinal").
    fn name(&self) -> &'static str;

    /// Produce a single question.
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Question;

    /// Produce `count` questions for one lesson.
    fn generate_lesson<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<Question> {
        (0..count).map(|_| self.generate(rng)).collect()
    }
}

/// The closed set of generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generator {
    Cardinal(CardinalGenerator),
    Ordinal(OrdinalGenerator),
    TrickyPairs(TrickyPairsGenerator),
    DigitalTime(DigitalTimeGenerator),
    InformalTime(InformalTimeGenerator),
    Decimals(DecimalsGenerator),
    Fractions(FractionsGenerator),
    PhoneNumber(PhoneNumberGenerator),
}

impl QuestionGenerator for Generator {
    fn name(&self) -> &'static str {
        match self {
            Generator::Cardinal(g) => g.name(),
            Generator::Ordinal(g) => g.name(),
            Generator::TrickyPairs(g) => g.name(),
            Generator::DigitalTime(g) => g.name(),
            Generator::InformalTime(g) => g.name(),
            Generator::Decimals(g) => g.name(),
            Generator::Fractions(g) => g.name(),
            Generator::PhoneNumber(g) => g.name(),
        }
    }

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Question {
        match self {
            Generator::Cardinal(g) => g.generate(rng),
            Generator::Ordinal(g) => g.generate(rng),
            Generator::TrickyPairs(g) => g.generate(rng),
            Generator::DigitalTime(g) => g.generate(rng),
            Generator::InformalTime(g) => g.generate(rng),
            Generator::Decimals(g) => g.generate(rng),
            Generator::Fractions(g) => g.generate(rng),
            Generator::PhoneNumber(g) => g.generate(rng),
        }
    }
}

/// Random source for a lesson: reproducible when `seed` is given.
pub fn lesson_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}
