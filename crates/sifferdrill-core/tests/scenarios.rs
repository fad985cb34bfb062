//! End-to-end evaluation scenarios through the lesson registry.

use sifferdrill_core::atoms::decompose_cardinal;
use sifferdrill_core::registry;
use sifferdrill_core::{EvaluationResult, EvaluationStrategy, LessonType, Question};

fn evaluate(lesson: LessonType, input: &str, question: &Question) -> EvaluationResult {
    registry::evaluator(lesson).evaluate(input, question)
}

#[test]
fn standard_number_partial_credit() {
    let question = Question::new("123", ["1", "20", "3"]);
    let result = evaluate(LessonType::Cardinal100To1000, "120", &question);

    assert!(!result.is_correct);
    assert_eq!(result.atom_updates.get("1"), Some(&[true][..]));
    assert_eq!(result.atom_updates.get("20"), Some(&[true][..]));
    assert_eq!(result.atom_updates.get("3"), Some(&[false][..]));
    assert_eq!(result.atom_updates.len(), 3);
}

#[test]
fn digital_time_counts_each_zero() {
    let question = Question::new("0003", ["0", "0", "0", "3"]);
    let result = evaluate(LessonType::DigitalTime, "0103", &question);

    assert!(!result.is_correct);
    let zeros = result.atom_updates.get("0").unwrap();
    assert_eq!(zeros.len(), 3);
    assert_eq!(zeros.iter().filter(|&&ok| ok).count(), 2);
    assert_eq!(result.atom_updates.get("3"), Some(&[true][..]));
    assert_eq!(result.atom_updates.len(), 2);
}

#[test]
fn fraction_numerator_wrong() {
    let question = Question::new("3/4", ["3", "ord:4"]);
    let result = evaluate(LessonType::Fractions, "5/4", &question);

    assert!(!result.is_correct);
    assert_eq!(result.atom_updates.get("3"), Some(&[false][..]));
    assert_eq!(result.atom_updates.get("ord:4"), Some(&[true][..]));
    assert!(!result.atom_updates.contains("5"));
}

#[test]
fn phone_number_exact_answer() {
    let question = Question::new(
        "0701230567",
        ["0", "7", "0", "1", "2", "3", "0", "5", "60", "7"],
    );
    let result = evaluate(LessonType::PhoneNumbers, "0701230567", &question);

    assert!(result.is_correct);
    assert!(result.atom_updates.all_passed());
    assert_eq!(result.atom_updates.get("0"), Some(&[true, true, true][..]));
    assert_eq!(result.atom_updates.graded_count(), question.atoms.len());
}

#[test]
fn informal_time_skips_direction_after_failed_quarter() {
    let question = Question::new("0415|1615", ["#kvart", "#over", "4"]);
    let result = evaluate(LessonType::InformalTime, "0430", &question);

    assert!(!result.is_correct);
    assert_eq!(result.atom_updates.get("#kvart"), Some(&[false][..]));
    assert!(!result.atom_updates.contains("#over"));
    assert_eq!(result.atom_updates.get("4"), Some(&[true][..]));
}

#[test]
fn informal_time_accepts_afternoon_hour() {
    let question = Question::new("0415|1615", ["#kvart", "#over", "4"]);
    let result = evaluate(LessonType::InformalTime, "1615", &question);

    assert!(result.is_correct);
    assert!(result.atom_updates.all_passed());
}

#[test]
fn decimals_missing_fraction_atom() {
    let question = Question::new("2,25", ["2", "20", "5"]);
    let result = evaluate(LessonType::Decimals, "2,5", &question);

    assert!(!result.is_correct);
    assert_eq!(result.atom_updates.get("2"), Some(&[true][..]));
    assert_eq!(result.atom_updates.get("20"), Some(&[false][..]));
    assert_eq!(result.atom_updates.get("5"), Some(&[true][..]));
}

#[test]
fn grades_cover_every_target_occurrence() {
    // 707 decomposes to ["7", "7"]: both sevens must be graded.
    let question = Question::new("707", decompose_cardinal(707));
    for input in ["707", "700", "7", "abc", "1000"] {
        let result = evaluate(LessonType::Cardinal100To1000, input, &question);
        assert_eq!(
            result.atom_updates.get("7").map(<[bool]>::len),
            Some(2),
            "input {input}"
        );
    }
}

#[test]
fn extra_input_atoms_never_graded() {
    let question = Question::new("20", ["20"]);
    let result = evaluate(LessonType::Cardinal20To100, "25", &question);

    assert!(!result.is_correct);
    assert_eq!(result.atom_updates.get("20"), Some(&[true][..]));
    assert!(!result.atom_updates.contains("5"));
}

#[test]
fn correct_implies_string_equality() {
    let cases = [
        (LessonType::Decimals, Question::new("2,50", ["2", "50"]), "2,5"),
        (LessonType::Fractions, Question::new("2/4", ["2", "ord:4"]), "1/2"),
        (LessonType::TrickyPairs, Question::new("17", ["17"]), "70"),
    ];
    for (lesson, question, input) in cases {
        assert!(!evaluate(lesson, input, &question).is_correct, "{lesson} {input}");
    }
}

#[test]
fn unparsable_structure_is_empty_not_failed() {
    let phone = Question::new(
        "0701230567",
        ["0", "7", "0", "1", "2", "3", "0", "5", "60", "7"],
    );
    let result = evaluate(LessonType::PhoneNumbers, "070123", &phone);
    assert!(!result.is_correct);
    assert!(result.atom_updates.is_empty());

    let fraction = Question::new("3/4", ["3", "ord:4"]);
    let result = evaluate(LessonType::Fractions, "3/4/5", &fraction);
    assert!(!result.is_correct);
    assert_eq!(result.atom_updates.get("3"), Some(&[false][..]));
    assert_eq!(result.atom_updates.get("ord:4"), Some(&[false][..]));
}

#[test]
fn evaluation_is_idempotent() {
    let question = Question::new("1345|0145", ["#kvart", "#i", "2"]);
    let evaluator = registry::evaluator(LessonType::InformalTime);
    let first = evaluator.evaluate("0145", &question);
    let second = evaluator.evaluate("0145", &question);
    assert_eq!(first, second);
}
