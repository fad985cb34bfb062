//! The `sifferdrill practice` command.
//!
//! Reads one answer per line from stdin. A wrong answer can be retried; `?`
//! reveals the answer and moves on once three wrong answers were given on
//! the question. End of input ends the lesson early. Completed lessons are
//! appended to the lesson history.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;

use sifferdrill_core::config::load_config_from;
use sifferdrill_core::generator::lesson_rng;
use sifferdrill_core::history::LessonHistory;
use sifferdrill_core::knowledge::KnowledgeBook;
use sifferdrill_core::session::{LessonSession, REVEAL_AFTER_MISTAKES};
use sifferdrill_core::{registry, EvaluationResult};

use super::lesson_or_default;

const REVEAL: &str = "?";
const WEAKEST_SHOWN: usize = 5;

pub fn execute(
    lesson: Option<String>,
    count: Option<usize>,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let lesson = lesson_or_default(lesson, &config)?;
    let count = count.unwrap_or(config.questions_per_lesson);
    anyhow::ensure!(count >= 1, "count must be at least 1");

    let mut knowledge = match &config.knowledge_file {
        Some(path) => KnowledgeBook::load_or_default(path)?,
        None => KnowledgeBook::new(),
    };

    let mut rng = lesson_rng(seed.or(config.seed));
    let mut session = LessonSession::generate(lesson, count, &mut rng)?;

    println!(
        "{} ({} questions). Type {REVEAL} to reveal an answer after {REVEAL_AFTER_MISTAKES} wrong tries.",
        registry::definition(lesson).title,
        session.total_questions()
    );

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = std::io::stdout();

    while let Some(question) = session.current().cloned() {
        print!(
            "[{}/{}] {}> ",
            session.question_number(),
            session.total_questions(),
            question.spoken_text
        );
        stdout.flush()?;

        let Some(line) = lines.next().transpose()? else {
            println!();
            break;
        };
        let answer = line.trim();

        if answer == REVEAL {
            match session.reveal() {
                Some(stimulus) => println!("  Answer: {stimulus}"),
                None => println!(
                    "  Reveal unlocks after {REVEAL_AFTER_MISTAKES} wrong answers ({} so far).",
                    session.incorrect_attempts()
                ),
            }
            continue;
        }

        let Some(result) = session.submit(answer) else {
            continue;
        };
        knowledge.apply(&result.atom_updates);

        if result.is_correct {
            println!("  Correct!");
            session.advance();
        } else {
            println!("  Wrong.{}", missed_atoms(&result));
            if let Some(hint) = &question.visual_hint {
                println!("  Hint: {hint}");
            }
        }
    }

    let summary = session.summary();
    println!(
        "\nLesson {}: {} questions, {} attempts, {} mistakes, {} revealed, accuracy {:.0}%",
        if summary.complete { "complete" } else { "stopped" },
        summary.total_questions,
        summary.attempts,
        summary.mistakes,
        summary.revealed,
        summary.accuracy
    );
    if summary.correct > 0 {
        println!(
            "Average answer time: {:.1}s",
            summary.average_answer_ms as f64 / 1000.0
        );
    }

    let weakest = knowledge.weakest(WEAKEST_SHOWN);
    if !weakest.is_empty() {
        let list: Vec<String> = weakest
            .iter()
            .map(|(atom, mastery)| format!("{atom} {:.0}%", mastery * 100.0))
            .collect();
        println!("Weakest atoms: {}", list.join(", "));
    }

    if let Some(path) = &config.knowledge_file {
        knowledge.save_json(path)?;
        tracing::info!(path = %path.display(), atoms = knowledge.len(), "knowledge saved");
    }

    if let Some(path) = config.history_path() {
        let mut history = LessonHistory::load_or_default(&path)?;
        if history.record(&summary, Utc::now()) {
            history.save_json(&path)?;
            tracing::info!(path = %path.display(), lessons = history.len(), "lesson recorded");
        }
    }

    Ok(())
}

fn missed_atoms(result: &EvaluationResult) -> String {
    let missed: Vec<&str> = result
        .atom_updates
        .iter()
        .filter(|(_, grades)| grades.iter().any(|&ok| !ok))
        .map(|(atom, _)| atom)
        .collect();
    if missed.is_empty() {
        String::new()
    } else {
        format!(" Missed: {}", missed.join(" "))
    }
}
