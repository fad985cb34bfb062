//! Cardinal, ordinal and tricky-pair number generators.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::atoms::{decompose_cardinal, decompose_ordinal};
use crate::error::DrillError;
use crate::generator::QuestionGenerator;
use crate::model::Question;
use crate::speech::ordinal_text;

/// Largest number the decomposition rules cover.
const MAX_NUMBER: i64 = 1000;

fn check_range(min: i64, max: i64) -> Result<(), DrillError> {
    if min < 0 || max > MAX_NUMBER || min > max {
        return Err(DrillError::InvalidRange { min, max });
    }
    Ok(())
}

/// Uniform cardinal numbers in `min..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardinalGenerator {
    min: i64,
    max: i64,
}

impl CardinalGenerator {
    pub fn new(min: i64, max: i64) -> Result<Self, DrillError> {
        check_range(min, max)?;
        Ok(Self { min, max })
    }
}

impl QuestionGenerator for CardinalGenerator {
    fn name(&self) -> &'static str {
        "cardinal"
    }

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Question {
        let number = rng.gen_range(self.min..=self.max);
        Question::new(number.to_string(), decompose_cardinal(number))
            .with_spoken_text(number.to_string())
    }
}

/// Uniform ordinal numbers in `min..=max`, spoken as "1:a", "3:e".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrdinalGenerator {
    min: i64,
    max: i64,
}

impl OrdinalGenerator {
    pub fn new(min: i64, max: i64) -> Result<Self, DrillError> {
        check_range(min, max)?;
        Ok(Self { min, max })
    }
}

impl QuestionGenerator for OrdinalGenerator {
    fn name(&self) -> &'static str {
        "ordinal"
    }

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Question {
        let number = rng.gen_range(self.min..=self.max);
        // Range is validated to 0..=1000, so the conversion cannot fail.
        let spoken = u32::try_from(number).map(ordinal_text).unwrap_or_default();
        Question::new(number.to_string(), decompose_ordinal(number)).with_spoken_text(spoken)
    }
}

/// Numbers Swedish learners commonly confuse by ear ("sjutton"/"sjuttio").
pub const TRICKY_NUMBERS: [i64; 17] = [
    7, 20, 70, 6, 60, 13, 30, 14, 40, 15, 50, 16, 17, 18, 80, 19, 90,
];

/// Picks from [`TRICKY_NUMBERS`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrickyPairsGenerator;

impl QuestionGenerator for TrickyPairsGenerator {
    fn name(&self) -> &'static str {
        "tricky-pairs"
    }

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Question {
        let number = TRICKY_NUMBERS.choose(rng).copied().unwrap_or(TRICKY_NUMBERS[0]);
        Question::new(number.to_string(), decompose_cardinal(number))
            .with_spoken_text(number.to_string())
    }
}
