//! Drill report types with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::results::{CaseOutcome, SkippedCase};
use crate::statistics::DrillStats;

/// A complete drill report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the drill set.
    pub drill_set: DrillSetSummary,
    /// Individual case outcomes.
    pub outcomes: Vec<CaseOutcome>,
    /// Cases that could not be evaluated.
    #[serde(default)]
    pub skipped: Vec<SkippedCase>,
    /// Aggregate statistics.
    pub statistics: DrillStats,
    /// Total wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

/// Summary of a drill set (without the full case definitions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillSetSummary {
    pub id: String,
    pub name: String,
    pub case_count: usize,
}

impl DrillReport {
    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: DrillReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// File name used when saving into an output directory.
    pub fn file_name(&self) -> String {
        format!(
            "{}-{}.json",
            self.drill_set.id,
            self.created_at.format("%Y%m%d-%H%M%S")
        )
    }

    /// Returns true if any case contradicted its expectation.
    pub fn has_mismatches(&self) -> bool {
        self.outcomes.iter().any(|o| o.expectation.is_mismatch())
    }

    /// Outcomes whose expectation failed.
    pub fn mismatches(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(|o| o.expectation.is_mismatch())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EvaluationResult, LessonType};
    use crate::results::ExpectationCheck;
    use crate::statistics::compute_drill_stats;

    fn make_report(outcomes: Vec<CaseOutcome>) -> DrillReport {
        DrillReport {
            id: Uuid::nil(),
            created_at: Utc::now(),
            drill_set: DrillSetSummary {
                id: "test".into(),
                name: "Test".into(),
                case_count: outcomes.len(),
            },
            statistics: compute_drill_stats(&outcomes, 0),
            outcomes,
            skipped: vec![],
            duration_ms: 0,
        }
    }

    fn make_outcome(case_id: &str, expectation: ExpectationCheck) -> CaseOutcome {
        CaseOutcome {
            case_id: case_id.into(),
            lesson: LessonType::Fractions,
            strategy: "fractions".into(),
            target_value: "3/4".into(),
            input: "5/4".into(),
            result: EvaluationResult::new(
                false,
                [("3", vec![false]), ("ord:4", vec![true])].into_iter().collect(),
            ),
            expectation,
        }
    }

    #[test]
    fn json_roundtrip() {
        let report = make_report(vec![make_outcome("case1", ExpectationCheck::Met)]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.json");

        report.save_json(&path).unwrap();
        let loaded = DrillReport::load_json(&path).unwrap();

        assert_eq!(loaded.drill_set.id, "test");
        assert_eq!(loaded.outcomes, report.outcomes);
        assert_eq!(loaded.statistics, report.statistics);
    }

    #[test]
    fn detects_mismatches() {
        let clean = make_report(vec![make_outcome("a", ExpectationCheck::Met)]);
        assert!(!clean.has_mismatches());

        let broken = make_report(vec![
            make_outcome("a", ExpectationCheck::Unchecked),
            make_outcome(
                "b",
                ExpectationCheck::Mismatch {
                    reasons: vec!["expected correct = true, got false".into()],
                },
            ),
        ]);
        assert!(broken.has_mismatches());
        assert_eq!(broken.mismatches().map(|o| o.case_id.as_str()).collect::<Vec<_>>(), ["b"]);
    }

    #[test]
    fn file_name_uses_set_id() {
        let report = make_report(vec![]);
        let name = report.file_name();
        assert!(name.starts_with("test-"));
        assert!(name.ends_with(".json"));
    }
}
