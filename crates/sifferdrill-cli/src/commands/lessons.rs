//! The `sifferdrill lessons` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use sifferdrill_core::generator::QuestionGenerator;
use sifferdrill_core::registry;
use sifferdrill_core::EvaluationStrategy;

pub fn execute() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Lesson", "Title", "Strategy", "Generator", "Atoms"]);

    for definition in registry::lessons() {
        let generator = definition.generator()?;
        table.add_row(vec![
            Cell::new(definition.lesson.id()),
            Cell::new(definition.title),
            Cell::new(definition.evaluator().name()),
            Cell::new(generator.name()),
            Cell::new(if definition.grades_atoms { "graded" } else { "-" }),
        ]);
    }

    println!("{table}");
    Ok(())
}
