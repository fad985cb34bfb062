//! Per-atom mastery tracking.
//!
//! Each atom carries a Beta(α, β) belief about how reliably the learner
//! hears it. A passed occurrence adds one to α, a failed one adds one to β.
//! The book only consumes [`AtomUpdates`]; evaluation never reads it.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::AtomUpdates;

/// Uninformative prior for unseen atoms.
pub const PRIOR_ALPHA: f64 = 1.0;
pub const PRIOR_BETA: f64 = 1.0;

/// Beta parameters for one atom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtomState {
    /// Passed occurrences plus the prior.
    pub alpha: f64,
    /// Failed occurrences plus the prior.
    pub beta: f64,
    pub last_updated: DateTime<Utc>,
}

impl AtomState {
    fn prior(now: DateTime<Utc>) -> Self {
        Self {
            alpha: PRIOR_ALPHA,
            beta: PRIOR_BETA,
            last_updated: now,
        }
    }

    /// Expected pass probability, α / (α + β).
    pub fn mastery(&self) -> f64 {
        let total = self.alpha + self.beta;
        if total > 0.0 {
            self.alpha / total
        } else {
            0.5
        }
    }

    /// Graded occurrences seen so far, excluding the prior.
    pub fn observations(&self) -> f64 {
        (self.alpha + self.beta - PRIOR_ALPHA - PRIOR_BETA).max(0.0)
    }
}

/// Mastery state for every atom the learner has been graded on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBook {
    atoms: BTreeMap<String, AtomState>,
}

impl KnowledgeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// State for `atom`, if it was ever graded.
    pub fn state(&self, atom: &str) -> Option<&AtomState> {
        self.atoms.get(atom)
    }

    /// Mastery for `atom`; unseen atoms report the prior mean.
    pub fn mastery(&self, atom: &str) -> f64 {
        self.atoms
            .get(atom)
            .map(AtomState::mastery)
            .unwrap_or(PRIOR_ALPHA / (PRIOR_ALPHA + PRIOR_BETA))
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Fold one evaluation's grades into the book.
    pub fn apply(&mut self, updates: &AtomUpdates) {
        self.apply_at(updates, Utc::now());
    }

    /// [`apply`](Self::apply) with an explicit timestamp.
    pub fn apply_at(&mut self, updates: &AtomUpdates, now: DateTime<Utc>) {
        for (atom, grades) in updates.iter() {
            let state = self
                .atoms
                .entry(atom.to_string())
                .or_insert_with(|| AtomState::prior(now));
            for &passed in grades {
                if passed {
                    state.alpha += 1.0;
                } else {
                    state.beta += 1.0;
                }
            }
            state.last_updated = now;
        }
    }

    /// Up to `limit` atoms with the lowest mastery, weakest first.
    pub fn weakest(&self, limit: usize) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self
            .atoms
            .iter()
            .map(|(atom, state)| (atom.as_str(), state.mastery()))
            .collect();
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(limit);
        ranked
    }

    /// Save the book as JSON.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("failed to serialize knowledge book")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write knowledge to {}", path.display()))?;
        Ok(())
    }

    /// Load a book from JSON.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read knowledge from {}", path.display()))?;
        serde_json::from_str(&content).context("failed to parse knowledge JSON")
    }

    /// Load `path` if it exists, otherwise start empty.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_json(path)
        } else {
            Ok(Self::default())
        }
    }
}
