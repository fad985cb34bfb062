//! Drill configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::DrillError;
use crate::model::LessonType;

/// Environment variable overriding [`DrillConfig::seed`].
pub const SEED_ENV: &str = "SIFFERDRILL_SEED";
/// Environment variable overriding [`DrillConfig::default_lesson`].
pub const LESSON_ENV: &str = "SIFFERDRILL_LESSON";

/// Top-level sifferdrill configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillConfig {
    /// Lesson used when none is given on the command line.
    #[serde(default = "default_lesson")]
    pub default_lesson: LessonType,
    /// Questions generated per lesson.
    #[serde(default = "default_questions")]
    pub questions_per_lesson: usize,
    /// Seed for reproducible lessons. Random when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Output directory for drill reports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Where per-atom mastery is persisted between practice sessions.
    #[serde(default)]
    pub knowledge_file: Option<PathBuf>,
    /// Where completed lessons are recorded. Defaults to `history.json`
    /// next to the knowledge file.
    #[serde(default)]
    pub history_file: Option<PathBuf>,
}

fn default_lesson() -> LessonType {
    LessonType::Cardinal0To20
}
fn default_questions() -> usize {
    10
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./sifferdrill-results")
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            default_lesson: default_lesson(),
            questions_per_lesson: default_questions(),
            seed: None,
            output_dir: default_output_dir(),
            knowledge_file: None,
            history_file: None,
        }
    }
}

impl DrillConfig {
    /// Reject values no lesson can run with.
    pub fn validate(&self) -> Result<(), DrillError> {
        if self.questions_per_lesson == 0 {
            return Err(DrillError::InvalidConfig(
                "questions_per_lesson must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Apply `SIFFERDRILL_*` overrides looked up through `lookup`.
    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), DrillError> {
        if let Some(seed) = lookup(SEED_ENV) {
            self.seed = Some(seed.trim().parse().map_err(|_| {
                DrillError::InvalidConfig(format!("{SEED_ENV} is not a number: {seed}"))
            })?);
        }
        if let Some(lesson) = lookup(LESSON_ENV) {
            self.default_lesson = lesson.parse()?;
        }
        Ok(())
    }

    fn resolve_paths(&mut self) {
        self.output_dir = resolve_path(&self.output_dir);
        self.knowledge_file = self.knowledge_file.as_deref().map(resolve_path);
        self.history_file = self.history_file.as_deref().map(resolve_path);
    }

    /// The lesson history file, if history is kept at all.
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file.clone().or_else(|| {
            self.knowledge_file
                .as_ref()
                .map(|k| k.with_file_name("history.json"))
        })
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    // Substituted values are copied verbatim and never rescanned.
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + end];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `sifferdrill.toml` in the current directory
/// 2. `~/.config/sifferdrill/config.toml`
///
/// Environment variable overrides: `SIFFERDRILL_SEED`, `SIFFERDRILL_LESSON`.
pub fn load_config() -> Result<DrillConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<DrillConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from("sifferdrill.toml");
            if local.exists() {
                Some(local)
            } else {
                dirs_path()
                    .map(|dir| dir.join("config.toml"))
                    .filter(|global| global.exists())
            }
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => DrillConfig::default(),
    };

    config.apply_overrides(|name| std::env::var(name).ok())?;
    config.resolve_paths();
    config.validate()?;
    Ok(config)
}

/// Parse a TOML config document without touching the environment.
pub fn parse_config(content: &str) -> Result<DrillConfig> {
    let config: DrillConfig = toml::from_str(content)?;
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("sifferdrill"))
}
