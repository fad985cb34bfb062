//! The `sifferdrill stats` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use sifferdrill_core::config::load_config_from;
use sifferdrill_core::history::LessonHistory;
use sifferdrill_core::registry;

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let Some(path) = config.history_path() else {
        anyhow::bail!("no lesson history configured; set knowledge_file or history_file");
    };
    let history = LessonHistory::load_or_default(&path)?;

    println!("Lessons completed: {}", history.len());
    println!("Current streak: {} days", history.current_streak());
    if history.is_empty() {
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Lesson", "Title", "Done", "Accuracy", "Best", "Avg time"]);
    for stats in history.lesson_stats() {
        table.add_row(vec![
            Cell::new(stats.lesson.id()),
            Cell::new(registry::definition(stats.lesson).title),
            Cell::new(stats.count),
            Cell::new(format!("{:.0}%", stats.mean_accuracy)),
            Cell::new(format!("{:.0}%", stats.best_accuracy)),
            Cell::new(format!("{:.1}s", stats.mean_answer_ms as f64 / 1000.0)),
        ]);
    }
    println!("{table}");
    Ok(())
}
