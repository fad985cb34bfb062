//! Per-case drill results and expectation checking.

use serde::{Deserialize, Serialize};

use crate::model::{EvaluationResult, Expectation, LessonType};

/// Whether a case's evaluation matched what its author expected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExpectationCheck {
    /// The case declared no expectation.
    Unchecked,
    /// Every declared expectation held.
    Met,
    /// At least one declared expectation failed.
    Mismatch { reasons: Vec<String> },
}

impl ExpectationCheck {
    pub fn is_mismatch(&self) -> bool {
        matches!(self, ExpectationCheck::Mismatch { .. })
    }

    /// Compare `result` against `expect`.
    ///
    /// Only the atoms named in the expectation are checked. An atom expected
    /// as `[]` must be absent from the result.
    pub fn check(expect: Option<&Expectation>, result: &EvaluationResult) -> Self {
        let Some(expect) = expect else {
            return ExpectationCheck::Unchecked;
        };

        let mut reasons = Vec::new();
        if let Some(correct) = expect.correct {
            if correct != result.is_correct {
                reasons.push(format!(
                    "expected correct = {correct}, got {}",
                    result.is_correct
                ));
            }
        }

        if let Some(atoms) = &expect.atoms {
            for (atom, expected) in atoms.iter() {
                let actual = result.atom_updates.get(atom).unwrap_or_default();
                if actual != expected {
                    reasons.push(format!(
                        "atom '{atom}': expected {expected:?}, got {actual:?}"
                    ));
                }
            }
        }

        if reasons.is_empty() {
            ExpectationCheck::Met
        } else {
            ExpectationCheck::Mismatch { reasons }
        }
    }
}

/// Outcome of evaluating one drill case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseOutcome {
    pub case_id: String,
    pub lesson: LessonType,
    /// Name of the strategy that graded the case.
    pub strategy: String,
    pub target_value: String,
    pub input: String,
    pub result: EvaluationResult,
    pub expectation: ExpectationCheck,
}

/// A case the runner could not evaluate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedCase {
    pub case_id: String,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AtomUpdates;

    fn result(correct: bool, pairs: &[(&str, &[bool])]) -> EvaluationResult {
        EvaluationResult::new(
            correct,
            pairs.iter().map(|(a, g)| (*a, g.to_vec())).collect(),
        )
    }

    #[test]
    fn no_expectation_is_unchecked() {
        let check = ExpectationCheck::check(None, &result(true, &[]));
        assert_eq!(check, ExpectationCheck::Unchecked);
    }

    #[test]
    fn matching_expectation_is_met() {
        let expect = Expectation {
            correct: Some(false),
            atoms: Some([("#kvart", vec![false]), ("#over", vec![])].into_iter().collect()),
        };
        let check = ExpectationCheck::check(
            Some(&expect),
            &result(false, &[("#kvart", &[false]), ("4", &[true])]),
        );
        assert_eq!(check, ExpectationCheck::Met);
    }

    #[test]
    fn mismatches_list_every_reason() {
        let expect = Expectation {
            correct: Some(true),
            atoms: Some(AtomUpdates::from_iter([("3", vec![true])])),
        };
        let check = ExpectationCheck::check(Some(&expect), &result(false, &[("3", &[false])]));
        let ExpectationCheck::Mismatch { reasons } = check else {
            panic!("expected mismatch");
        };
        assert_eq!(reasons.len(), 2);
        assert!(reasons[1].contains("atom '3'"));
    }

    #[test]
    fn serializes_with_status_tag() {
        let json = serde_json::to_string(&ExpectationCheck::Met).unwrap();
        assert_eq!(json, r#"{"status":"met"}"#);
    }
}
