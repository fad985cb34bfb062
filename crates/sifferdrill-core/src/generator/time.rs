//! Clock time generators.

use rand::Rng;

use crate::atoms::{decompose_digital_time, informal_time_atoms};
use crate::generator::QuestionGenerator;
use crate::model::{Question, ALTERNATIVE_SEPARATOR};
use crate::speech::informal_time_phrase;

fn random_time<R: Rng + ?Sized>(rng: &mut R) -> (u32, u32) {
    (rng.gen_range(0..24), rng.gen_range(0..60))
}

/// Digital 24-hour times, shown as "HH:MM" and answered as "HHMM".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigitalTimeGenerator;

impl QuestionGenerator for DigitalTimeGenerator {
    fn name(&self) -> &'static str {
        "digital-time"
    }

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Question {
        let (hour, minute) = random_time(rng);
        Question::new(
            format!("{hour:02}{minute:02}"),
            decompose_digital_time(hour, minute),
        )
        .with_spoken_text(format!("{hour:02}:{minute:02}"))
    }
}

/// Colloquial clock phrases; both the morning and afternoon reading of the
/// phrase are accepted targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InformalTimeGenerator;

impl InformalTimeGenerator {
    /// Build the question for a specific time.
    pub fn question(hour: u32, minute: u32) -> Question {
        let counterpart = (hour + 12) % 24;
        let target = format!(
            "{hour:02}{minute:02}{ALTERNATIVE_SEPARATOR}{counterpart:02}{minute:02}"
        );
        Question::new(target, informal_time_atoms(hour, minute))
            .with_spoken_text(informal_time_phrase(hour, minute))
    }
}

impl QuestionGenerator for InformalTimeGenerator {
    fn name(&self) -> &'static str {
        "informal-time"
    }

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Question {
        let (hour, minute) = random_time(rng);
        Self::question(hour, minute)
    }
}
