//! TOML drill-set parser.
//!
//! Loads drill sets from TOML files and directories, and validates them.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{AtomUpdates, DrillCase, DrillSet, Expectation, LessonType, Question};
use crate::registry;

/// Intermediate TOML structure for parsing drill-set files.
#[derive(Debug, Deserialize)]
struct TomlDrillFile {
    drill_set: TomlDrillSetHeader,
    #[serde(default)]
    cases: Vec<TomlDrillCase>,
}

#[derive(Debug, Deserialize)]
struct TomlDrillSetHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    lesson: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TomlDrillCase {
    id: String,
    #[serde(default)]
    lesson: Option<String>,
    target: String,
    #[serde(default)]
    atoms: Vec<String>,
    #[serde(default)]
    spoken: String,
    input: String,
    #[serde(default)]
    expect: Option<TomlExpectation>,
}

#[derive(Debug, Deserialize)]
struct TomlExpectation {
    #[serde(default)]
    correct: Option<bool>,
    #[serde(default)]
    atoms: Option<BTreeMap<String, Vec<bool>>>,
}

fn parse_lesson(id: Option<String>) -> Result<Option<LessonType>> {
    id.map(|id| id.parse::<LessonType>())
        .transpose()
        .map_err(Into::into)
}

/// Parse a single TOML file into a `DrillSet`.
pub fn parse_drill_set(path: &Path) -> Result<DrillSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read drill set file: {}", path.display()))?;

    parse_drill_set_str(&content, path)
}

/// Parse a TOML string into a `DrillSet` (useful for testing).
pub fn parse_drill_set_str(content: &str, source_path: &Path) -> Result<DrillSet> {
    let parsed: TomlDrillFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let default_lesson = parse_lesson(parsed.drill_set.lesson)
        .with_context(|| format!("drill set '{}'", parsed.drill_set.id))?;

    let cases = parsed
        .cases
        .into_iter()
        .map(|c| {
            let lesson =
                parse_lesson(c.lesson).with_context(|| format!("case '{}'", c.id))?;

            let expect = c.expect.map(|e| Expectation {
                correct: e.correct,
                atoms: e.atoms.map(|atoms| atoms.into_iter().collect::<AtomUpdates>()),
            });

            Ok(DrillCase {
                id: c.id,
                lesson,
                question: Question::new(c.target, c.atoms).with_spoken_text(c.spoken),
                input: c.input,
                expect,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(DrillSet {
        id: parsed.drill_set.id,
        name: parsed.drill_set.name,
        description: parsed.drill_set.description,
        lesson: default_lesson,
        cases,
    })
}

/// Recursively load all `.toml` drill-set files from a directory.
pub fn load_drill_directory(dir: &Path) -> Result<Vec<DrillSet>> {
    let mut sets = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.path());

    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            sets.extend(load_drill_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_drill_set(&path) {
                Ok(set) => sets.push(set),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(sets)
}

/// Load a single file, or every drill set under a directory.
pub fn load_drill_sets(path: &Path) -> Result<Vec<DrillSet>> {
    if path.is_dir() {
        load_drill_directory(path)
    } else {
        Ok(vec![parse_drill_set(path)?])
    }
}

/// A warning from drill-set validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The case ID (if applicable).
    pub case_id: Option<String>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn case(case: &DrillCase, message: impl Into<String>) -> Self {
        Self {
            case_id: Some(case.id.clone()),
            message: message.into(),
        }
    }
}

/// Validate a drill set for common issues.
pub fn validate_drill_set(set: &DrillSet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if set.cases.is_empty() {
        warnings.push(ValidationWarning {
            case_id: None,
            message: "drill set has no cases".into(),
        });
    }

    let mut seen_ids = HashSet::new();
    for case in &set.cases {
        if !seen_ids.insert(&case.id) {
            warnings.push(ValidationWarning::case(
                case,
                format!("duplicate case ID: {}", case.id),
            ));
        }
    }

    for case in &set.cases {
        if case.question.target_value.trim().is_empty() {
            warnings.push(ValidationWarning::case(case, "target is empty"));
            continue;
        }

        let Some(lesson) = set.lesson_for(case) else {
            warnings.push(ValidationWarning::case(
                case,
                "no lesson given and the drill set has no default lesson",
            ));
            continue;
        };

        let definition = registry::definition(lesson);
        if !definition.grades_atoms {
            continue;
        }
        if case.question.atoms.is_empty() {
            warnings.push(ValidationWarning::case(
                case,
                format!("atoms are empty but {lesson} grades atoms"),
            ));
            continue;
        }

        match registry::canonical_atoms(lesson, &case.question.target_value) {
            Some(canonical) if canonical != case.question.atoms => {
                warnings.push(ValidationWarning::case(
                    case,
                    format!(
                        "atoms [{}] differ from the {lesson} decomposition [{}]",
                        case.question.atoms.join(", "),
                        canonical.join(", ")
                    ),
                ));
            }
            Some(_) => {}
            None => warnings.push(ValidationWarning::case(
                case,
                format!(
                    "target '{}' is not a valid {lesson} value",
                    case.question.target_value
                ),
            )),
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r##"
[drill_set]
id = "scenarios"
name = "Scenarios"
description = "Worked examples"
lesson = "cardinal_100_1000"

[[cases]]
id = "standard-partial"
target = "123"
atoms = ["1", "20", "3"]
input = "120"

[cases.expect]
correct = false
atoms = { "1" = [true], "20" = [true], "3" = [false] }

[[cases]]
id = "quarter-past"
lesson = "time_informal"
target = "0415|1615"
atoms = ["#kvart", "#over", "4"]
spoken = "kvart över fyra"
input = "0430"

[cases.expect.atoms]
"#kvart" = [false]
"4" = [true]
"##;

    #[test]
    fn parse_valid_toml() {
        let set = parse_drill_set_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(set.id, "scenarios");
        assert_eq!(set.lesson, Some(LessonType::Cardinal100To1000));
        assert_eq!(set.cases.len(), 2);

        let first = &set.cases[0];
        assert_eq!(first.lesson, None);
        assert_eq!(set.lesson_for(first), Some(LessonType::Cardinal100To1000));
        let expect = first.expect.as_ref().unwrap();
        assert_eq!(expect.correct, Some(false));
        assert_eq!(expect.atoms.as_ref().unwrap().get("3"), Some(&[false][..]));

        let second = &set.cases[1];
        assert_eq!(second.lesson, Some(LessonType::InformalTime));
        assert_eq!(second.question.spoken_text, "kvart över fyra");
        let expect = second.expect.as_ref().unwrap();
        assert_eq!(expect.correct, None);
        assert!(!expect.atoms.as_ref().unwrap().contains("#over"));
    }

    #[test]
    fn parse_missing_optional_fields() {
        let toml = r#"
[drill_set]
id = "minimal"
name = "Minimal"

[[cases]]
id = "case1"
lesson = "tricky_pairs"
target = "70"
input = "70"
"#;
        let set = parse_drill_set_str(toml, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(set.lesson, None);
        assert!(set.cases[0].question.atoms.is_empty());
        assert!(set.cases[0].expect.is_none());
        assert!(validate_drill_set(&set).is_empty());
    }

    #[test]
    fn unknown_lesson_is_an_error() {
        let toml = r#"
[drill_set]
id = "bad"
name = "Bad"

[[cases]]
id = "case1"
lesson = "cardinal_0_5"
target = "3"
input = "3"
"#;
        let err = parse_drill_set_str(toml, &PathBuf::from("test.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("unknown lesson: cardinal_0_5"));
    }

    #[test]
    fn validate_duplicate_ids() {
        let toml = r#"
[drill_set]
id = "dupes"
name = "Dupes"
lesson = "tricky_pairs"

[[cases]]
id = "same"
target = "7"
input = "7"

[[cases]]
id = "same"
target = "70"
input = "17"
"#;
        let set = parse_drill_set_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_drill_set(&set);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate")));
    }

    #[test]
    fn validate_atom_problems() {
        let toml = r#"
[drill_set]
id = "atoms"
name = "Atoms"

[[cases]]
id = "no-lesson"
target = "12"
input = "12"

[[cases]]
id = "no-atoms"
lesson = "cardinal_0_20"
target = "12"
input = "12"

[[cases]]
id = "drifted"
lesson = "time_digital"
target = "0003"
atoms = ["0", "3"]
input = "0003"

[[cases]]
id = "empty-target"
lesson = "fractions"
target = " "
input = "1/2"
"#;
        let set = parse_drill_set_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_drill_set(&set);
        let message_for = |id: &str| {
            warnings
                .iter()
                .find(|w| w.case_id.as_deref() == Some(id))
                .map(|w| w.message.clone())
                .unwrap_or_default()
        };
        assert!(message_for("no-lesson").contains("no lesson"));
        assert!(message_for("no-atoms").contains("atoms are empty"));
        assert!(message_for("drifted").contains("[0, 0, 0, 3]"));
        assert!(message_for("empty-target").contains("target is empty"));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        let result = parse_drill_set_str(bad, &PathBuf::from("bad.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn load_directory_skips_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("good.toml"), VALID_TOML).unwrap();
        std::fs::write(dir.path().join("broken.toml"), "not = [toml").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested").join("again.toml"), VALID_TOML).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let sets = load_drill_directory(dir.path()).unwrap();
        assert_eq!(sets.len(), 2);
        assert!(sets.iter().all(|s| s.id == "scenarios"));
    }

    #[test]
    fn load_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("set.toml");
        std::fs::write(&path, VALID_TOML).unwrap();
        assert_eq!(load_drill_sets(&path).unwrap().len(), 1);
        assert!(load_drill_sets(&dir.path().join("missing.toml")).is_err());
    }
}
