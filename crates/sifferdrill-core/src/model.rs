//! Core data model types for sifferdrill.
//!
//! A [`Question`] is produced by a generator (or read from a drill-set file)
//! and consumed by an evaluation strategy, which returns an
//! [`EvaluationResult`]. Both are immutable values built fresh per attempt.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DrillError;

/// Separator between equally valid renderings of a target value.
pub const ALTERNATIVE_SEPARATOR: char = '|';

/// A single drill item: what is spoken and what the learner must type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Canonical answer. May hold `|`-separated alternatives (e.g. "0415|1615").
    pub target_value: String,
    /// Text handed to the speech engine.
    #[serde(default)]
    pub spoken_text: String,
    /// Optional text shown alongside the audio.
    #[serde(default)]
    pub visual_hint: Option<String>,
    /// Ordered atoms decomposing the target. Owned by whoever built the
    /// question; strategies treat this list as ground truth.
    #[serde(default)]
    pub atoms: Vec<String>,
}

impl Question {
    /// Build a question from a target and its atoms.
    pub fn new<I, S>(target_value: impl Into<String>, atoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            target_value: target_value.into(),
            spoken_text: String::new(),
            visual_hint: None,
            atoms: atoms.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_spoken_text(mut self, spoken_text: impl Into<String>) -> Self {
        self.spoken_text = spoken_text.into();
        self
    }

    pub fn with_visual_hint(mut self, visual_hint: impl Into<String>) -> Self {
        self.visual_hint = Some(visual_hint.into());
        self
    }

    /// All accepted renderings of the target value.
    pub fn alternatives(&self) -> impl Iterator<Item = &str> {
        self.target_value.split(ALTERNATIVE_SEPARATOR)
    }

    /// The first alternative, used as the canonical reference.
    pub fn stimulus(&self) -> &str {
        self.alternatives().next().unwrap_or_default()
    }
}

/// Per-atom grades: one boolean per occurrence of the atom in the target.
///
/// Built once by a strategy and handed out read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AtomUpdates(BTreeMap<String, Vec<bool>>);

impl AtomUpdates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grades recorded for `atom`, in target occurrence order.
    pub fn get(&self, atom: &str) -> Option<&[bool]> {
        self.0.get(atom).map(Vec::as_slice)
    }

    pub fn contains(&self, atom: &str) -> bool {
        self.0.contains_key(atom)
    }

    /// Number of distinct atoms graded.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[bool])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Total number of graded occurrences across all atoms.
    pub fn graded_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// `true` when at least one occurrence was graded and none failed.
    pub fn all_passed(&self) -> bool {
        !self.is_empty() && self.0.values().flatten().all(|&ok| ok)
    }

    /// Append `other`'s grades after this map's grades, atom by atom.
    pub fn merge(mut self, other: AtomUpdates) -> Self {
        for (atom, grades) in other.0 {
            self.0.entry(atom).or_default().extend(grades);
        }
        self
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<bool>> {
        self.0
    }

    pub(crate) fn record(&mut self, atom: &str, passed: bool) {
        self.0.entry(atom.to_string()).or_default().push(passed);
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<bool>)> for AtomUpdates {
    fn from_iter<T: IntoIterator<Item = (K, Vec<bool>)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Outcome of evaluating one answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Overall verdict.
    pub is_correct: bool,
    /// Diagnostic per-atom grades. Empty when grading was not possible.
    #[serde(default)]
    pub atom_updates: AtomUpdates,
}

impl EvaluationResult {
    pub fn new(is_correct: bool, atom_updates: AtomUpdates) -> Self {
        Self {
            is_correct,
            atom_updates,
        }
    }

    /// An incorrect verdict with no atom grading at all.
    pub fn ungraded() -> Self {
        Self::default()
    }
}

/// The closed set of lesson types the drill supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LessonType {
    #[serde(rename = "cardinal_0_20")]
    Cardinal0To20,
    #[serde(rename = "cardinal_20_100")]
    Cardinal20To100,
    #[serde(rename = "cardinal_100_1000")]
    Cardinal100To1000,
    #[serde(rename = "ordinal_1_20")]
    Ordinal1To20,
    #[serde(rename = "tricky_pairs")]
    TrickyPairs,
    #[serde(rename = "time_digital")]
    DigitalTime,
    #[serde(rename = "time_informal")]
    InformalTime,
    #[serde(rename = "decimals")]
    Decimals,
    #[serde(rename = "fractions")]
    Fractions,
    #[serde(rename = "phone_numbers")]
    PhoneNumbers,
}

impl LessonType {
    pub const ALL: [LessonType; 10] = [
        LessonType::Cardinal0To20,
        LessonType::Cardinal20To100,
        LessonType::Cardinal100To1000,
        LessonType::Ordinal1To20,
        LessonType::TrickyPairs,
        LessonType::DigitalTime,
        LessonType::InformalTime,
        LessonType::Decimals,
        LessonType::Fractions,
        LessonType::PhoneNumbers,
    ];

    /// Stable identifier used in files, on the command line, and in reports.
    pub fn id(&self) -> &'static str {
        match self {
            LessonType::Cardinal0To20 => "cardinal_0_20",
            LessonType::Cardinal20To100 => "cardinal_20_100",
            LessonType::Cardinal100To1000 => "cardinal_100_1000",
            LessonType::Ordinal1To20 => "ordinal_1_20",
            LessonType::TrickyPairs => "tricky_pairs",
            LessonType::DigitalTime => "time_digital",
            LessonType::InformalTime => "time_informal",
            LessonType::Decimals => "decimals",
            LessonType::Fractions => "fractions",
            LessonType::PhoneNumbers => "phone_numbers",
        }
    }
}

impl fmt::Display for LessonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for LessonType {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        LessonType::ALL
            .into_iter()
            .find(|lesson| lesson.id() == wanted)
            .ok_or_else(|| DrillError::UnknownLesson(s.to_string()))
    }
}

/// Expected outcome of a drill case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expectation {
    /// Expected overall verdict.
    #[serde(default)]
    pub correct: Option<bool>,
    /// Expected per-atom grades. Only the atoms listed are checked.
    #[serde(default)]
    pub atoms: Option<AtomUpdates>,
}

/// A single hand-written evaluation case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillCase {
    /// Unique identifier within the drill set.
    pub id: String,
    /// Lesson whose evaluator grades the case. Falls back to the set's lesson.
    pub lesson: Option<LessonType>,
    /// The question being answered.
    pub question: Question,
    /// The learner's raw answer.
    pub input: String,
    /// What evaluation should produce, if checked.
    #[serde(default)]
    pub expect: Option<Expectation>,
}

/// A collection of drill cases loaded from one TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillSet {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Default lesson for cases that don't name one.
    pub lesson: Option<LessonType>,
    pub cases: Vec<DrillCase>,
}

impl DrillSet {
    /// Effective lesson of `case`.
    pub fn lesson_for(&self, case: &DrillCase) -> Option<LessonType> {
        case.lesson.or(self.lesson)
    }
}
