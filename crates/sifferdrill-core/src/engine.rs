//! Drill runner.
//!
//! Evaluates every case of a drill set with its lesson's evaluator, checks
//! the declared expectations, and assembles a [`DrillReport`].

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::model::{DrillSet, LessonType};
use crate::registry;
use crate::report::{DrillReport, DrillSetSummary};
use crate::results::{CaseOutcome, ExpectationCheck, SkippedCase};
use crate::statistics::compute_drill_stats;
use crate::strategy::{EvaluationStrategy, Evaluator};

/// Progress reporting trait.
pub trait ProgressReporter {
    fn on_case_complete(&self, outcome: &CaseOutcome);
    fn on_case_skipped(&self, case_id: &str, reason: &str);
    fn on_set_complete(&self, total: usize, evaluated: usize, skipped: usize, elapsed: Duration);
}

/// No-op progress reporter.
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn on_case_complete(&self, _: &CaseOutcome) {}
    fn on_case_skipped(&self, _: &str, _: &str) {}
    fn on_set_complete(&self, _: usize, _: usize, _: usize, _: Duration) {}
}

/// Runs drill sets. Evaluators are resolved once per lesson and reused.
#[derive(Debug, Default)]
pub struct DrillRunner {
    evaluators: BTreeMap<LessonType, Evaluator>,
}

impl DrillRunner {
    pub fn new() -> Self {
        Self::default()
    }

    fn evaluator(&mut self, lesson: LessonType) -> &Evaluator {
        self.evaluators
            .entry(lesson)
            .or_insert_with(|| registry::evaluator(lesson))
    }

    /// Evaluate every case of `drill_set`.
    pub fn run(&mut self, drill_set: &DrillSet, progress: &dyn ProgressReporter) -> DrillReport {
        let start = Instant::now();
        let mut outcomes = Vec::with_capacity(drill_set.cases.len());
        let mut skipped = Vec::new();

        for case in &drill_set.cases {
            let Some(lesson) = drill_set.lesson_for(case) else {
                let reason = "no lesson given and the drill set has no default lesson";
                tracing::warn!(case_id = %case.id, "{reason}");
                progress.on_case_skipped(&case.id, reason);
                skipped.push(SkippedCase {
                    case_id: case.id.clone(),
                    reason: reason.to_string(),
                });
                continue;
            };

            let evaluator = self.evaluator(lesson);
            let result = evaluator.evaluate(&case.input, &case.question);
            let expectation = ExpectationCheck::check(case.expect.as_ref(), &result);

            let outcome = CaseOutcome {
                case_id: case.id.clone(),
                lesson,
                strategy: evaluator.name().to_string(),
                target_value: case.question.target_value.clone(),
                input: case.input.clone(),
                result,
                expectation,
            };
            progress.on_case_complete(&outcome);
            outcomes.push(outcome);
        }

        let elapsed = start.elapsed();
        progress.on_set_complete(
            drill_set.cases.len(),
            outcomes.len(),
            skipped.len(),
            elapsed,
        );

        let statistics = compute_drill_stats(&outcomes, skipped.len());
        tracing::info!(
            drill_set = %drill_set.id,
            cases = statistics.total_cases,
            correct = statistics.correct,
            mismatched = statistics.expectations.mismatched,
            "drill set complete"
        );

        DrillReport {
            id: Uuid::new_v4(),
            created_at: chrono::Utc::now(),
            drill_set: DrillSetSummary {
                id: drill_set.id.clone(),
                name: drill_set.name.clone(),
                case_count: drill_set.cases.len(),
            },
            outcomes,
            skipped,
            statistics,
            duration_ms: elapsed.as_millis() as u64,
        }
    }
}
