//! The `sifferdrill run` command.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use comfy_table::{Cell, Table};

use sifferdrill_core::config::load_config_from;
use sifferdrill_core::engine::{DrillRunner, ProgressReporter};
use sifferdrill_core::parser;
use sifferdrill_core::report::DrillReport;
use sifferdrill_core::results::{CaseOutcome, ExpectationCheck};

/// Console progress reporter.
struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn on_case_complete(&self, outcome: &CaseOutcome) {
        let verdict = if outcome.result.is_correct {
            "correct"
        } else {
            "incorrect"
        };
        let expectation = match &outcome.expectation {
            ExpectationCheck::Unchecked => "",
            ExpectationCheck::Met => " expectation OK",
            ExpectationCheck::Mismatch { .. } => " expectation MISMATCH",
        };
        eprintln!(
            "  Done: {} [{}] {:?} -> {verdict}{expectation}",
            outcome.case_id, outcome.lesson, outcome.input
        );
        if let ExpectationCheck::Mismatch { reasons } = &outcome.expectation {
            for reason in reasons {
                eprintln!("    {reason}");
            }
        }
    }

    fn on_case_skipped(&self, case_id: &str, reason: &str) {
        eprintln!("  SKIPPED: {case_id}: {reason}");
    }

    fn on_set_complete(&self, total: usize, evaluated: usize, skipped: usize, elapsed: Duration) {
        eprintln!(
            "\nComplete: {evaluated}/{total} evaluated, {skipped} skipped ({:.1}ms)",
            elapsed.as_secs_f64() * 1000.0
        );
    }
}

pub fn execute(
    drill_set_path: PathBuf,
    output: Option<PathBuf>,
    fail_on_mismatch: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let output = output.unwrap_or(config.output_dir);

    let sets = parser::load_drill_sets(&drill_set_path)?;
    anyhow::ensure!(
        !sets.is_empty(),
        "no drill sets found in {}",
        drill_set_path.display()
    );

    let mut runner = DrillRunner::new();
    let mut mismatched = 0;

    for drill_set in &sets {
        eprintln!(
            "sifferdrill v{}: running {} ({} cases)",
            env!("CARGO_PKG_VERSION"),
            drill_set.name,
            drill_set.cases.len()
        );

        let report = runner.run(drill_set, &ConsoleReporter);
        print_summary(&report);

        let path = output.join(report.file_name());
        report.save_json(&path)?;
        eprintln!("Results saved to: {}", path.display());

        mismatched += report.mismatches().count();
    }

    if fail_on_mismatch && mismatched > 0 {
        anyhow::bail!("{mismatched} case(s) contradicted their expectations");
    }

    Ok(())
}

fn print_summary(report: &DrillReport) {
    let stats = &report.statistics;

    let mut table = Table::new();
    table.set_header(vec!["Lesson", "Cases", "Correct", "Accuracy"]);
    for (lesson, lesson_stats) in &stats.per_lesson {
        table.add_row(vec![
            Cell::new(lesson.id()),
            Cell::new(lesson_stats.cases),
            Cell::new(lesson_stats.correct),
            Cell::new(format!("{:.1}%", lesson_stats.accuracy * 100.0)),
        ]);
    }
    println!("\n{table}");

    let expectations = &stats.expectations;
    println!(
        "Expectations: {} checked, {} met, {} mismatched",
        expectations.checked, expectations.met, expectations.mismatched
    );
}
