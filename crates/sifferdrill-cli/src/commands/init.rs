//! The `sifferdrill init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("sifferdrill.toml"), SAMPLE_CONFIG)?;

    std::fs::create_dir_all("drill-sets")?;
    write_if_missing(Path::new("drill-sets/example.toml"), EXAMPLE_DRILL_SET)?;

    println!("\nNext steps:");
    println!("  1. Run: sifferdrill lessons");
    println!("  2. Run: sifferdrill practice --lesson time_informal");
    println!("  3. Run: sifferdrill run --drill-set drill-sets/example.toml");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# sifferdrill configuration

default_lesson = "cardinal_0_20"
questions_per_lesson = 10
output_dir = "./sifferdrill-results"
knowledge_file = "${HOME}/.config/sifferdrill/knowledge.json"
# Completed lessons; defaults to history.json beside knowledge_file.
# history_file = "${HOME}/.config/sifferdrill/history.json"

# Uncomment for the same questions every run.
# seed = 42
"#;

const EXAMPLE_DRILL_SET: &str = r##"[drill_set]
id = "example"
name = "Example Drill Set"
description = "A few graded answers to get started"
lesson = "cardinal_100_1000"

[[cases]]
id = "missing-ones"
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
input = "1615"

[cases.expect]
correct = true

[[cases]]
id = "three-quarters"
lesson = "fractions"
target = "3/4"
atoms = ["3", "ord:4"]
input = "3/4"

[cases.expect]
correct = true
atoms = { "3" = [true], "ord:4" = [true] }
"##;
