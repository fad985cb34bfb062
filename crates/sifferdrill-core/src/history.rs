//! Completed-lesson history and the daily practice streak.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::model::LessonType;
use crate::session::SessionSummary;

/// One finished lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonRecord {
    pub lesson: LessonType,
    /// Correct answers per attempt, as a percentage.
    pub accuracy: f64,
    pub average_answer_ms: u64,
    pub completed_at: DateTime<Utc>,
}

/// Aggregates over every record of one lesson.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonStats {
    pub lesson: LessonType,
    pub count: usize,
    pub mean_accuracy: f64,
    pub best_accuracy: f64,
    pub mean_answer_ms: u64,
}

/// Append-only list of completed lessons, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LessonHistory {
    records: Vec<LessonRecord>,
}

impl LessonHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished lesson. Abandoned lessons are not recorded.
    pub fn record(&mut self, summary: &SessionSummary, at: DateTime<Utc>) -> bool {
        if !summary.complete {
            return false;
        }
        self.records.push(LessonRecord {
            lesson: summary.lesson,
            accuracy: summary.accuracy,
            average_answer_ms: summary.average_answer_ms,
            completed_at: at,
        });
        true
    }

    pub fn records(&self) -> &[LessonRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Per-lesson aggregates, in lesson order.
    pub fn lesson_stats(&self) -> Vec<LessonStats> {
        let mut grouped: BTreeMap<LessonType, Vec<&LessonRecord>> = BTreeMap::new();
        for record in &self.records {
            grouped.entry(record.lesson).or_default().push(record);
        }
        grouped
            .into_iter()
            .map(|(lesson, records)| {
                let count = records.len();
                let mean_accuracy =
                    records.iter().map(|r| r.accuracy).sum::<f64>() / count as f64;
                let best_accuracy = records.iter().map(|r| r.accuracy).fold(0.0, f64::max);
                let total_ms: u128 = records
                    .iter()
                    .map(|r| u128::from(r.average_answer_ms))
                    .sum();
                let mean_answer_ms =
                    u64::try_from(total_ms / count as u128).unwrap_or(u64::MAX);
                LessonStats {
                    lesson,
                    count,
                    mean_accuracy,
                    best_accuracy,
                    mean_answer_ms,
                }
            })
            .collect()
    }

    /// Streak ending on `today`, with dates taken in the local time zone.
    pub fn streak_on(&self, today: NaiveDate) -> u32 {
        streak(
            self.records
                .iter()
                .map(|r| r.completed_at.with_timezone(&Local).date_naive()),
            today,
        )
    }

    pub fn current_streak(&self) -> u32 {
        self.streak_on(Local::now().date_naive())
    }

    /// Save the history as pretty JSON, creating parent directories.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("failed to serialize lesson history")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write history to {}", path.display()))?;
        Ok(())
    }

    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read history from {}", path.display()))?;
        serde_json::from_str(&content).context("failed to parse history JSON")
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

/// Consecutive practice days ending today or yesterday.
///
/// A day without practice today does not break the streak until tomorrow.
/// Dates after `today` are ignored.
pub fn streak(dates: impl IntoIterator<Item = NaiveDate>, today: NaiveDate) -> u32 {
    let days: BTreeSet<NaiveDate> = dates.into_iter().filter(|d| *d <= today).collect();

    let mut day = if days.contains(&today) {
        today
    } else {
        match today.pred_opt() {
            Some(yesterday) if days.contains(&yesterday) => yesterday,
            _ => return 0,
        }
    };

    let mut count = 0;
    while days.contains(&day) {
        count += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn summary(lesson: LessonType, accuracy: f64, ms: u64) -> SessionSummary {
        SessionSummary {
            lesson,
            total_questions: 10,
            attempts: 10,
            correct: 10,
            mistakes: 0,
            revealed: 0,
            accuracy,
            average_answer_ms: ms,
            complete: true,
        }
    }

    #[test]
    fn streak_cases() {
        let today = date("2026-03-10");
        let cases: &[(&[&str], u32)] = &[
            (&[], 0),
            (&["2026-03-10"], 1),
            (&["2026-03-09"], 1),
            (&["2026-03-08"], 0),
            (&["2026-03-10", "2026-03-09", "2026-03-08"], 3),
            (&["2026-03-09", "2026-03-08", "2026-03-06"], 2),
            (&["2026-03-10", "2026-03-10", "2026-03-09"], 2),
            (&["2026-03-11", "2026-03-10"], 1),
            (&["2026-03-01", "2026-02-28", "2026-02-27"], 0),
        ];
        for (dates, expected) in cases {
            let got = streak(dates.iter().map(|d| date(d)), today);
            assert_eq!(got, *expected, "dates {dates:?}");
        }
    }

    #[test]
    fn streak_crosses_month_boundary() {
        let dates = ["2026-03-01", "2026-02-28", "2026-02-27"].map(date);
        assert_eq!(streak(dates, date("2026-03-01")), 3);
    }

    #[test]
    fn abandoned_lessons_are_not_recorded() {
        let mut history = LessonHistory::new();
        let mut stopped = summary(LessonType::Fractions, 50.0, 100);
        stopped.complete = false;
        assert!(!history.record(&stopped, Utc::now()));
        assert!(history.is_empty());
    }

    #[test]
    fn lesson_stats_aggregate_per_lesson() {
        let at = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
        let mut history = LessonHistory::new();
        history.record(&summary(LessonType::Fractions, 50.0, 1000), at);
        history.record(&summary(LessonType::Fractions, 100.0, 3000), at);
        history.record(&summary(LessonType::Cardinal0To20, 80.0, 500), at);

        let stats = history.lesson_stats();
        assert_eq!(stats.len(), 2);
        let fractions = stats
            .iter()
            .find(|s| s.lesson == LessonType::Fractions)
            .unwrap();
        assert_eq!(fractions.count, 2);
        assert_eq!(fractions.mean_accuracy, 75.0);
        assert_eq!(fractions.best_accuracy, 100.0);
        assert_eq!(fractions.mean_answer_ms, 2000);
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/history.json");

        let mut history = LessonHistory::new();
        let at = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
        history.record(&summary(LessonType::Cardinal0To20, 90.0, 1200), at);
        history.save_json(&path).unwrap();

        let loaded = LessonHistory::load_json(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.records()[0].completed_at, at);
        assert_eq!(loaded.records()[0].average_answer_ms, 1200);

        let missing = LessonHistory::load_or_default(&dir.path().join("none.json")).unwrap();
        assert!(missing.is_empty());
    }
}
