//! Atom list comparators.
//!
//! Bag logic compares multisets and ignores position; the positional
//! comparator grades index for index. Neither decides correctness on its
//! own; that is left to each strategy.

use std::collections::BTreeMap;

use crate::model::AtomUpdates;

fn occurrence_counts<S: AsRef<str>>(atoms: &[S]) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for atom in atoms {
        *counts.entry(atom.as_ref()).or_insert(0) += 1;
    }
    counts
}

/// Bag-logic comparison of `input` against `target`.
///
/// For each distinct target atom, `min(required, provided)` occurrences are
/// graded `true` followed by the remaining misses graded `false`. Atoms that
/// only appear in the input are not recorded.
pub fn compare_bag<T, I>(target: &[T], input: &[I]) -> AtomUpdates
where
    T: AsRef<str>,
    I: AsRef<str>,
{
    let provided = occurrence_counts(input);

    occurrence_counts(target)
        .into_iter()
        .map(|(atom, required)| {
            let matches = required.min(provided.get(atom).copied().unwrap_or(0));
            let mut grades = vec![true; matches];
            grades.resize(required, false);
            (atom, grades)
        })
        .collect()
}

/// Grade every occurrence of every target atom `false`.
pub fn fail_all<T: AsRef<str>>(target: &[T]) -> AtomUpdates {
    occurrence_counts(target)
        .into_iter()
        .map(|(atom, required)| (atom, vec![false; required]))
        .collect()
}

/// Result of a positional comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionalMatch {
    /// One grade per target occurrence, in target order.
    pub updates: AtomUpdates,
    /// Every target position matched.
    pub all_matched: bool,
    /// The input supplied more atoms than the target holds.
    pub has_extra: bool,
}

impl PositionalMatch {
    /// All positions matched and nothing extra was supplied.
    pub fn is_exact(&self) -> bool {
        self.all_matched && !self.has_extra
    }
}

/// Positional comparison: target atom `i` passes iff input atom `i` equals it.
pub fn compare_positional<T, I>(target: &[T], input: &[I]) -> PositionalMatch
where
    T: AsRef<str>,
    I: AsRef<str>,
{
    let mut updates = AtomUpdates::new();
    let mut all_matched = true;

    for (i, atom) in target.iter().enumerate() {
        let matched = input.get(i).is_some_and(|given| given.as_ref() == atom.as_ref());
        all_matched &= matched;
        updates.record(atom.as_ref(), matched);
    }

    PositionalMatch {
        updates,
        all_matched,
        has_extra: input.len() > target.len(),
    }
}
