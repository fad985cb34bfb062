//! The `sifferdrill validate` command.

use std::path::PathBuf;

use anyhow::Result;

use sifferdrill_core::parser::{self, ValidationWarning};

pub fn execute(drill_set_path: PathBuf) -> Result<()> {
    let sets = parser::load_drill_sets(&drill_set_path)?;
    anyhow::ensure!(
        !sets.is_empty(),
        "no drill sets found in {}",
        drill_set_path.display()
    );

    let mut total_warnings = 0;
    for set in &sets {
        let lesson = set
            .lesson
            .map(|l| format!(", default lesson {l}"))
            .unwrap_or_default();
        println!("Drill set: {} ({} cases{lesson})", set.name, set.cases.len());

        let warnings = parser::validate_drill_set(set);
        warnings.iter().for_each(print_warning);
        total_warnings += warnings.len();
    }

    match total_warnings {
        0 => println!("All drill sets valid."),
        n => println!("\n{n} warning(s) found."),
    }

    Ok(())
}

fn print_warning(warning: &ValidationWarning) {
    match &warning.case_id {
        Some(id) => println!("  [{id}] WARNING: {}", warning.message),
        None => println!("  WARNING: {}", warning.message),
    }
}
