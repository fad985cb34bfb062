//! Aggregate statistics over drill outcomes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::LessonType;
use crate::results::{CaseOutcome, ExpectationCheck};

/// Accuracy of one lesson's cases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LessonStats {
    pub cases: usize,
    pub correct: usize,
    /// `correct / cases`, 0 when there are no cases.
    pub accuracy: f64,
}

/// Pass/fail tallies for one atom across all cases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtomTally {
    pub passed: u32,
    pub failed: u32,
}

impl AtomTally {
    /// Fraction of graded occurrences that passed.
    pub fn pass_rate(&self) -> f64 {
        let total = self.passed + self.failed;
        if total == 0 {
            0.0
        } else {
            f64::from(self.passed) / f64::from(total)
        }
    }
}

/// How many declared expectations held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectationTally {
    pub checked: usize,
    pub met: usize,
    pub mismatched: usize,
}

/// Aggregate statistics for a drill run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrillStats {
    pub total_cases: usize,
    pub correct: usize,
    pub skipped: usize,
    pub per_lesson: BTreeMap<LessonType, LessonStats>,
    pub per_atom: BTreeMap<String, AtomTally>,
    pub expectations: ExpectationTally,
}

/// Compute aggregate statistics from evaluated outcomes.
pub fn compute_drill_stats(outcomes: &[CaseOutcome], skipped: usize) -> DrillStats {
    let mut stats = DrillStats {
        total_cases: outcomes.len() + skipped,
        skipped,
        ..DrillStats::default()
    };

    for outcome in outcomes {
        let lesson = stats.per_lesson.entry(outcome.lesson).or_default();
        lesson.cases += 1;
        if outcome.result.is_correct {
            lesson.correct += 1;
            stats.correct += 1;
        }

        for (atom, grades) in outcome.result.atom_updates.iter() {
            let tally = stats.per_atom.entry(atom.to_string()).or_default();
            for &passed in grades {
                if passed {
                    tally.passed += 1;
                } else {
                    tally.failed += 1;
                }
            }
        }

        match outcome.expectation {
            ExpectationCheck::Unchecked => {}
            ExpectationCheck::Met => {
                stats.expectations.checked += 1;
                stats.expectations.met += 1;
            }
            ExpectationCheck::Mismatch { .. } => {
                stats.expectations.checked += 1;
                stats.expectations.mismatched += 1;
            }
        }
    }

    for lesson in stats.per_lesson.values_mut() {
        lesson.accuracy = lesson.correct as f64 / lesson.cases.max(1) as f64;
    }

    stats
}
