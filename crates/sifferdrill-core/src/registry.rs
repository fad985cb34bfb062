//! Lesson registry: the fixed mapping from [`LessonType`] to its title,
//! evaluator and generator.

use crate::atoms::{
    decompose_cardinal, decompose_decimal, decompose_digital_time, decompose_ordinal,
    decompose_phone_number, fraction_atoms, informal_time_atoms,
};
use crate::error::DrillError;
use crate::generator::{
    CardinalGenerator, DecimalsGenerator, DigitalTimeGenerator, FractionsGenerator, Generator,
    InformalTimeGenerator, OrdinalGenerator, PhoneNumberGenerator, TrickyPairsGenerator,
};
use crate::model::LessonType;
use crate::strategy::{
    DecimalsStrategy, DigitalTimeStrategy, Evaluator, ExactMatchStrategy, FractionsStrategy,
    InformalTimeStrategy, OrdinalNumberStrategy, PhoneNumberStrategy, StandardNumberStrategy,
};

/// Everything the drill needs to run one lesson type.
#[derive(Debug, Clone, Copy)]
pub struct LessonDefinition {
    pub lesson: LessonType,
    /// Human-readable lesson title.
    pub title: &'static str,
    /// Whether the lesson's strategy grades atoms at all.
    pub grades_atoms: bool,
    evaluator: fn() -> Evaluator,
    generator: fn() -> Result<Generator, DrillError>,
}

impl LessonDefinition {
    /// Build the lesson's evaluator.
    pub fn evaluator(&self) -> Evaluator {
        (self.evaluator)()
    }

    /// Build the lesson's question generator.
    pub fn generator(&self) -> Result<Generator, DrillError> {
        (self.generator)()
    }
}

static LESSONS: [LessonDefinition; 10] = [
    LessonDefinition {
        lesson: LessonType::Cardinal0To20,
        title: "Numbers 0-20",
        grades_atoms: true,
        evaluator: || Evaluator::StandardNumber(StandardNumberStrategy),
        generator: || Ok(Generator::Cardinal(CardinalGenerator::new(0, 20)?)),
    },
    LessonDefinition {
        lesson: LessonType::Cardinal20To100,
        title: "Numbers 20-100",
        grades_atoms: true,
        evaluator: || Evaluator::StandardNumber(StandardNumberStrategy),
        generator: || Ok(Generator::Cardinal(CardinalGenerator::new(20, 100)?)),
    },
    LessonDefinition {
        lesson: LessonType::Cardinal100To1000,
        title: "Numbers 100-1000",
        grades_atoms: true,
        evaluator: || Evaluator::StandardNumber(StandardNumberStrategy),
        generator: || Ok(Generator::Cardinal(CardinalGenerator::new(100, 1000)?)),
    },
    LessonDefinition {
        lesson: LessonType::Ordinal1To20,
        title: "Ordinals 1-20",
        grades_atoms: true,
        evaluator: || Evaluator::OrdinalNumber(OrdinalNumberStrategy),
        generator: || Ok(Generator::Ordinal(OrdinalGenerator::new(1, 20)?)),
    },
    LessonDefinition {
        lesson: LessonType::TrickyPairs,
        title: "Tricky pairs",
        grades_atoms: false,
        evaluator: || Evaluator::ExactMatch(ExactMatchStrategy),
        generator: || Ok(Generator::TrickyPairs(TrickyPairsGenerator)),
    },
    LessonDefinition {
        lesson: LessonType::DigitalTime,
        title: "Digital time",
        grades_atoms: true,
        evaluator: || Evaluator::DigitalTime(DigitalTimeStrategy),
        generator: || Ok(Generator::DigitalTime(DigitalTimeGenerator)),
    },
    LessonDefinition {
        lesson: LessonType::InformalTime,
        title: "Informal time",
        grades_atoms: true,
        evaluator: || Evaluator::InformalTime(InformalTimeStrategy),
        generator: || Ok(Generator::InformalTime(InformalTimeGenerator)),
    },
    LessonDefinition {
        lesson: LessonType::Decimals,
        title: "Decimals",
        grades_atoms: true,
        evaluator: || Evaluator::Decimals(DecimalsStrategy::default()),
        generator: || Ok(Generator::Decimals(DecimalsGenerator::default())),
    },
    LessonDefinition {
        lesson: LessonType::Fractions,
        title: "Fractions",
        grades_atoms: true,
        evaluator: || Evaluator::Fractions(FractionsStrategy),
        generator: || Ok(Generator::Fractions(FractionsGenerator)),
    },
    LessonDefinition {
        lesson: LessonType::PhoneNumbers,
        title: "Phone numbers",
        grades_atoms: true,
        evaluator: || Evaluator::PhoneNumber(PhoneNumberStrategy),
        generator: || Ok(Generator::PhoneNumber(PhoneNumberGenerator)),
    },
];

/// All registered lessons, in display order.
pub fn lessons() -> &'static [LessonDefinition] {
    &LESSONS
}

/// Definition for `lesson`.
pub fn definition(lesson: LessonType) -> &'static LessonDefinition {
    // LESSONS holds one entry per variant in declaration order.
    &LESSONS[lesson as usize]
}

/// Evaluator for `lesson`, resolved once per lesson load.
pub fn evaluator(lesson: LessonType) -> Evaluator {
    definition(lesson).evaluator()
}

/// Generator for `lesson`.
pub fn generator(lesson: LessonType) -> Result<Generator, DrillError> {
    definition(lesson).generator()
}

fn parse_clock(time: &str) -> Option<(u32, u32)> {
    if !(3..=4).contains(&time.len()) || !time.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let (hour, minute) = time.split_at(time.len() - 2);
    Some((hour.parse().ok()?, minute.parse().ok()?))
}

/// Atoms the lesson's generator would attach to `target`.
///
/// Returns `None` when `target` is not a well-formed value for the lesson.
/// Drill-set validation uses this to catch hand-written atoms that have
/// drifted from the decomposition the strategies expect.
pub fn canonical_atoms(lesson: LessonType, target: &str) -> Option<Vec<String>> {
    let target = target.trim();
    let atoms = match lesson {
        LessonType::Cardinal0To20
        | LessonType::Cardinal20To100
        | LessonType::Cardinal100To1000
        | LessonType::TrickyPairs => decompose_cardinal(target.parse().ok()?),
        LessonType::Ordinal1To20 => decompose_ordinal(target.parse().ok()?),
        LessonType::DigitalTime => {
            let (hour, minute) = parse_clock(target)?;
            decompose_digital_time(hour, minute)
        }
        LessonType::InformalTime => {
            let stimulus = target.split(crate::model::ALTERNATIVE_SEPARATOR).next()?;
            let (hour, minute) = parse_clock(stimulus)?;
            if hour > 24 || minute > 59 {
                return None;
            }
            informal_time_atoms(hour, minute)
        }
        LessonType::Decimals => {
            let separator = DecimalsStrategy::default().separator();
            let (integer, digits) = target.split_once(separator)?;
            decompose_decimal(integer.parse().ok()?, digits)
        }
        LessonType::Fractions => {
            let (numerator, denominator) = target.split_once('/')?;
            let numerator: i64 = numerator.trim().parse().ok()?;
            let denominator: i64 = denominator.trim().parse().ok()?;
            fraction_atoms(numerator, denominator)
        }
        LessonType::PhoneNumbers => decompose_phone_number(target)?,
    };
    (!atoms.is_empty()).then_some(atoms)
}
