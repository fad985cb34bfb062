//! The `sifferdrill generate` command.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;

use sifferdrill_core::config::load_config_from;
use sifferdrill_core::generator::{lesson_rng, QuestionGenerator};
use sifferdrill_core::registry;

use super::lesson_or_default;

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

    let generator = registry::generator(lesson)?;
    let mut rng = lesson_rng(seed.or(config.seed));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for question in generator.generate_lesson(&mut rng, count) {
        writeln!(out, "{}", serde_json::to_string(&question)?)?;
    }

    Ok(())
}
