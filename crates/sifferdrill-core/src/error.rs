//! Drill error types.
//!
//! Evaluation itself never fails: malformed answers are graded outcomes.
//! These errors cover everything around it: lesson lookup, drill-set
//! content, configuration values, and generator parameters.

use thiserror::Error;

/// Errors raised outside of answer evaluation.
#[derive(Debug, Error)]
pub enum DrillError {
    /// A lesson identifier that is not part of the registry.
    #[error("unknown lesson: {0}")]
    UnknownLesson(String),

    /// A drill-set case is missing something it needs to be evaluated.
    #[error("invalid drill case '{case_id}': {message}")]
    InvalidCase { case_id: String, message: String },

    /// A configuration value is outside its allowed range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A generator was constructed with an empty or inverted range.
    #[error("invalid generator range {min}..={max}")]
    InvalidRange { min: i64, max: i64 },
}

impl DrillError {
    /// Returns `true` if the error comes from user-authored files rather
    /// than from a programming mistake.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            DrillError::UnknownLesson(_)
                | DrillError::InvalidCase { .. }
                | DrillError::InvalidConfig(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = DrillError::UnknownLesson("cardinal_0_5".into());
        assert_eq!(err.to_string(), "unknown lesson: cardinal_0_5");

        let err = DrillError::InvalidCase {
            case_id: "c1".into(),
            message: "target is empty".into(),
        };
        assert_eq!(err.to_string(), "invalid drill case 'c1': target is empty");
    }

    #[test]
    fn range_errors_are_not_user_input() {
        assert!(!DrillError::InvalidRange { min: 5, max: 1 }.is_user_input());
        assert!(DrillError::InvalidConfig("x".into()).is_user_input());
    }
}
