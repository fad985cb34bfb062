//! The `sifferdrill evaluate` command.

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use sifferdrill_core::{registry, EvaluationResult, EvaluationStrategy, LessonType, Question};

pub fn execute(
    lesson: String,
    target: String,
    atoms: Option<String>,
    input: String,
    json: bool,
) -> Result<()> {
    let lesson: LessonType = lesson.parse()?;

    let atoms: Vec<String> = match atoms {
        Some(list) => list
            .split(',')
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .collect(),
        None => registry::canonical_atoms(lesson, &target).with_context(|| {
            format!("cannot derive {lesson} atoms from target '{target}', pass --atoms")
        })?,
    };

    let question = Question::new(target, atoms);
    let evaluator = registry::evaluator(lesson);
    let result = evaluator.evaluate(&input, &question);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&question, &result);
    }

    Ok(())
}

fn print_result(question: &Question, result: &EvaluationResult) {
    println!(
        "{} (target {})",
        if result.is_correct { "CORRECT" } else { "INCORRECT" },
        question.target_value
    );

    if result.atom_updates.is_empty() {
        println!("No atoms graded.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Atom", "Grades"]);
    for (atom, grades) in result.atom_updates.iter() {
        let grades: Vec<&str> = grades
            .iter()
            .map(|&ok| if ok { "pass" } else { "fail" })
            .collect();
        table.add_row(vec![Cell::new(atom), Cell::new(grades.join(" "))]);
    }
    println!("{table}");
}
