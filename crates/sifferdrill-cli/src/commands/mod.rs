pub mod evaluate;
pub mod generate;
pub mod init;
pub mod lessons;
pub mod practice;
pub mod run;
pub mod stats;
pub mod validate;

use anyhow::Result;
use sifferdrill_core::config::DrillConfig;
use sifferdrill_core::LessonType;

/// Resolve the lesson from the command line, falling back to the config.
pub fn lesson_or_default(lesson: Option<String>, config: &DrillConfig) -> Result<LessonType> {
    match lesson {
        Some(id) => Ok(id.parse()?),
        None => Ok(config.default_lesson),
    }
}
