//! Informal clock time strategy ("kvart över fyra", "fem i halv tre").
//!
//! The learner types a digital HHMM answer for a spoken colloquial phrase.
//! Correctness is decided on the clock values; the atoms of the phrase are
//! graded one by one against the typed time:
//!
//! - the **hour atom** is the last non-concept atom. It passes when the typed
//!   hour equals the atom's hour, or the hour before it (phrases such as
//!   "halv tre" name the coming hour), both modulo 12.
//! - any other numeric atom is a **minute atom**. The typed minute is folded
//!   into its distance from the nearest quarter/half boundary, which is what
//!   the phrase actually says ("fem i halv" and "fem över halv" both say 5).
//! - `#kvart` passes for minutes 15 and 45, `#halv` for minutes 21–39.
//! - `#over` / `#i` are graded only once their minute side passed. An
//!   unproven minute cannot certify a direction, so they are left out of the
//!   result rather than marked false.

use crate::atoms::{is_concept, Concept};
use crate::model::{AtomUpdates, EvaluationResult, Question};
use crate::strategy::EvaluationStrategy;

/// Atom-level grading for informal clock phrases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InformalTimeStrategy;

/// Parse a 3–4 digit HHMM string. Hour 24 is accepted as midnight.
fn parse_clock(time: &str) -> Option<(u32, u32)> {
    if !(3..=4).contains(&time.len()) || !time.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let (hour, minute) = time.split_at(time.len() - 2);
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    (hour <= 24 && minute <= 59).then_some((hour, minute))
}

/// The number a phrase speaks for `minute`, or `None` on a quarter or half
/// mark where no number is spoken.
fn spoken_minute(minute: u32) -> Option<u32> {
    match minute {
        0 | 15 | 30 | 45 => None,
        1..=20 => Some(minute),
        21..=29 => Some(30 - minute),
        31..=39 => Some(minute - 30),
        40..=59 => Some(60 - minute),
        _ => None,
    }
}

/// Direction a phrase uses for `minute`; none on the hour or the half.
fn direction(minute: u32) -> Option<Concept> {
    match minute {
        1..=20 | 31..=39 => Some(Concept::Past),
        21..=29 | 40..=59 => Some(Concept::To),
        _ => None,
    }
}

fn parse_atom_value(atom: &str) -> Option<u32> {
    let value = atom.parse().ok();
    if value.is_none() {
        tracing::warn!(atom, "informal time atom is not numeric");
    }
    value
}

fn grade_hour(atom: &str, hour: u32) -> bool {
    let Some(value) = parse_atom_value(atom) else {
        return false;
    };
    let typed = hour % 12;
    let value = value % 12;
    typed == value || typed == (value + 11) % 12
}

fn grade_minute(atom: &str, minute: u32) -> bool {
    match (parse_atom_value(atom), spoken_minute(minute)) {
        (Some(value), Some(spoken)) => value == spoken,
        _ => false,
    }
}

fn grade_quarter(minute: u32) -> bool {
    minute == 15 || minute == 45
}

fn grade_half(minute: u32) -> bool {
    (21..=39).contains(&minute)
}

/// Whether the atom that qualifies the phrase's direction passed.
///
/// That is the first numeric atom ahead of the first directional atom, or
/// `#kvart` when no number precedes it.
fn minute_side_passed(atoms: &[String], minute: u32) -> bool {
    let Some(first_direction) = atoms
        .iter()
        .position(|atom| Concept::from_atom(atom).is_some_and(|c| c.is_directional()))
    else {
        return false;
    };

    if let Some(number) = atoms[..first_direction].iter().find(|atom| !is_concept(atom)) {
        return grade_minute(number, minute);
    }
    if atoms.iter().any(|atom| atom == Concept::Quarter.as_str()) {
        return grade_quarter(minute);
    }
    false
}

fn grade_direction(concept: Concept, atoms: &[String], minute: u32) -> Option<bool> {
    if !minute_side_passed(atoms, minute) {
        return None;
    }
    direction(minute).map(|expected| expected == concept)
}

impl EvaluationStrategy for InformalTimeStrategy {
    fn name(&self) -> &'static str {
        "informal-time"
    }

    fn evaluate(&self, input: &str, question: &Question) -> EvaluationResult {
        let Some((hour, minute)) = parse_clock(input) else {
            tracing::debug!(input, "informal time answer is not a valid HHMM time");
            return EvaluationResult::ungraded();
        };
        let Some((stimulus_hour, stimulus_minute)) = parse_clock(question.stimulus()) else {
            tracing::warn!(
                target_value = %question.target_value,
                "informal time question has malformed target"
            );
            return EvaluationResult::ungraded();
        };

        let is_correct = hour % 12 == stimulus_hour % 12 && minute == stimulus_minute;

        let atoms = &question.atoms;
        let hour_index = atoms.iter().rposition(|atom| !is_concept(atom));

        let mut updates = AtomUpdates::new();
        for (i, atom) in atoms.iter().enumerate() {
            let grade = match Concept::from_atom(atom) {
                Some(Concept::Quarter) => Some(grade_quarter(minute)),
                Some(Concept::Half) => Some(grade_half(minute)),
                Some(directional) => grade_direction(directional, atoms, minute),
                None if Some(i) == hour_index => Some(grade_hour(atom, hour)),
                None => Some(grade_minute(atom, minute)),
            };
            if let Some(passed) = grade {
                updates.record(atom, passed);
            }
        }

        EvaluationResult::new(is_correct, updates)
    }
}
