//! A single practice lesson: questions, the current position, and tallies.

use std::time::{Duration, Instant};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::DrillError;
use crate::generator::QuestionGenerator;
use crate::model::{EvaluationResult, LessonType, Question};
use crate::registry;
use crate::strategy::{EvaluationStrategy, Evaluator};

/// Wrong answers on one question before its answer may be revealed.
pub const REVEAL_AFTER_MISTAKES: u32 = 3;

/// Totals for a finished (or abandoned) lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub lesson: LessonType,
    pub total_questions: usize,
    /// Submitted answers, correct or not.
    pub attempts: u32,
    /// Submitted answers that were correct.
    pub correct: u32,
    /// Submitted answers that were wrong.
    pub mistakes: u32,
    /// Questions skipped by revealing the answer.
    pub revealed: u32,
    /// Correct answers per attempt, as a percentage.
    pub accuracy: f64,
    /// Mean time from a question being shown to its correct answer.
    pub average_answer_ms: u64,
    pub complete: bool,
}

/// Drives one lesson. The evaluator is resolved once when the lesson starts.
#[derive(Debug, Clone)]
pub struct LessonSession {
    lesson: LessonType,
    evaluator: Evaluator,
    questions: Vec<Question>,
    index: usize,
    attempts: u32,
    correct: u32,
    mistakes: u32,
    revealed: u32,
    /// Wrong answers on the current question.
    incorrect_attempts: u32,
    question_started: Instant,
    answer_time: Duration,
    complete: bool,
}

impl LessonSession {
    /// Start a lesson over prepared questions.
    pub fn new(lesson: LessonType, questions: Vec<Question>) -> Self {
        let complete = questions.is_empty();
        Self {
            lesson,
            evaluator: registry::evaluator(lesson),
            questions,
            index: 0,
            attempts: 0,
            correct: 0,
            mistakes: 0,
            revealed: 0,
            incorrect_attempts: 0,
            question_started: Instant::now(),
            answer_time: Duration::ZERO,
            complete,
        }
    }

    /// Start a lesson of `count` freshly generated questions.
    pub fn generate<R: Rng + ?Sized>(
        lesson: LessonType,
        count: usize,
        rng: &mut R,
    ) -> Result<Self, DrillError> {
        let generator = registry::generator(lesson)?;
        let questions = generator.generate_lesson(rng, count);
        tracing::debug!(%lesson, count, "generated lesson");
        Ok(Self::new(lesson, questions))
    }

    pub fn lesson(&self) -> LessonType {
        self.lesson
    }

    pub fn current(&self) -> Option<&Question> {
        if self.complete {
            None
        } else {
            self.questions.get(self.index)
        }
    }

    /// One-based position of the current question.
    pub fn question_number(&self) -> usize {
        (self.index + 1).min(self.questions.len())
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Wrong answers given on the current question so far.
    pub fn incorrect_attempts(&self) -> u32 {
        self.incorrect_attempts
    }

    /// Evaluate `input` against the current question.
    ///
    /// Blank input and submissions after the last question are ignored and
    /// return `None`.
    pub fn submit(&mut self, input: &str) -> Option<EvaluationResult> {
        let elapsed = self.question_started.elapsed();
        self.submit_after(input, elapsed)
    }

    /// [`submit`](Self::submit) with an explicit time since the question
    /// was shown. Only correct answers count towards the average speed.
    pub fn submit_after(&mut self, input: &str, elapsed: Duration) -> Option<EvaluationResult> {
        if input.trim().is_empty() {
            return None;
        }
        let question = self.current()?;
        let result = self.evaluator.evaluate(input, question);

        self.attempts += 1;
        if result.is_correct {
            self.correct += 1;
            self.answer_time += elapsed;
        } else {
            self.mistakes += 1;
            self.incorrect_attempts += 1;
        }
        Some(result)
    }

    pub fn can_reveal(&self) -> bool {
        !self.complete && self.incorrect_attempts >= REVEAL_AFTER_MISTAKES
    }

    /// Give up on the current question, returning its answer and moving on.
    ///
    /// Returns `None` until [`REVEAL_AFTER_MISTAKES`] wrong answers were
    /// given on the question.
    pub fn reveal(&mut self) -> Option<String> {
        if !self.can_reveal() {
            return None;
        }
        let answer = self.current()?.stimulus().to_string();
        self.revealed += 1;
        self.advance();
        Some(answer)
    }

    /// Move to the next question, completing the lesson after the last one.
    pub fn advance(&mut self) {
        if self.complete {
            return;
        }
        self.index += 1;
        self.incorrect_attempts = 0;
        self.question_started = Instant::now();
        if self.index >= self.questions.len() {
            self.complete = true;
        }
    }

    pub fn summary(&self) -> SessionSummary {
        let accuracy = if self.attempts == 0 {
            0.0
        } else {
            f64::from(self.correct) / f64::from(self.attempts) * 100.0
        };
        let average_answer_ms = if self.correct == 0 {
            0
        } else {
            let ms = self.answer_time.as_millis() / u128::from(self.correct);
            u64::try_from(ms).unwrap_or(u64::MAX)
        };
        SessionSummary {
            lesson: self.lesson,
            total_questions: self.questions.len(),
            attempts: self.attempts,
            correct: self.correct,
            mistakes: self.mistakes,
            revealed: self.revealed,
            accuracy,
            average_answer_ms,
            complete: self.complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::lesson_rng;

    fn session() -> LessonSession {
        LessonSession::new(
            LessonType::Cardinal0To20,
            vec![Question::new("7", ["7"]), Question::new("17", ["17"])],
        )
    }

    #[test]
    fn walks_through_questions() {
        let mut session = session();
        assert_eq!(session.question_number(), 1);
        assert!(session.submit("7").unwrap().is_correct);
        session.advance();

        assert_eq!(session.current().unwrap().target_value, "17");
        assert!(!session.submit("70").unwrap().is_correct);
        assert!(session.submit("17").unwrap().is_correct);
        session.advance();

        assert!(session.is_complete());
        assert!(session.current().is_none());
        assert!(session.submit("17").is_none());

        let summary = session.summary();
        assert_eq!(summary.attempts, 3);
        assert_eq!(summary.correct, 2);
        assert_eq!(summary.mistakes, 1);
        assert!(summary.complete);
        assert!((summary.accuracy - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn accuracy_counts_correct_answers_not_questions() {
        let mut session = LessonSession::new(
            LessonType::Cardinal0To20,
            vec![
                Question::new("1", ["1"]),
                Question::new("2", ["2"]),
                Question::new("3", ["3"]),
            ],
        );
        assert!(session.submit("1").unwrap().is_correct);
        session.advance();
        session.advance();
        session.advance();

        let summary = session.summary();
        assert_eq!(summary.total_questions, 3);
        assert_eq!(summary.attempts, 1);
        assert_eq!(summary.accuracy, 100.0);
    }

    #[test]
    fn reveal_unlocks_after_three_mistakes() {
        let mut session = session();
        assert!(!session.can_reveal());
        assert!(session.reveal().is_none());

        for attempt in 1..=REVEAL_AFTER_MISTAKES {
            assert!(session.reveal().is_none());
            assert!(!session.submit("8").unwrap().is_correct);
            assert_eq!(session.incorrect_attempts(), attempt);
        }
        assert!(session.can_reveal());
        assert_eq!(session.reveal().as_deref(), Some("7"));

        // The counter is per question.
        assert_eq!(session.current().unwrap().target_value, "17");
        assert_eq!(session.incorrect_attempts(), 0);
        assert!(session.reveal().is_none());

        let summary = session.summary();
        assert_eq!(summary.revealed, 1);
        assert_eq!(summary.mistakes, 3);
        assert_eq!(summary.accuracy, 0.0);
    }

    #[test]
    fn average_speed_covers_correct_answers_only() {
        let mut session = session();
        session.submit_after("9", Duration::from_millis(5000));
        session.submit_after("7", Duration::from_millis(1000));
        session.advance();
        session.submit_after("17", Duration::from_millis(3000));
        session.advance();

        assert_eq!(session.summary().average_answer_ms, 2000);
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut session = session();
        assert!(session.submit("   ").is_none());
        assert_eq!(session.summary().attempts, 0);
        assert_eq!(session.summary().accuracy, 0.0);
        assert_eq!(session.summary().average_answer_ms, 0);
    }

    #[test]
    fn empty_lesson_starts_complete() {
        let session = LessonSession::new(LessonType::Fractions, Vec::new());
        assert!(session.is_complete());
        assert_eq!(session.question_number(), 0);
    }

    #[test]
    fn generated_lesson_uses_lesson_evaluator() {
        let mut rng = lesson_rng(Some(10));
        let mut session = LessonSession::generate(LessonType::InformalTime, 3, &mut rng).unwrap();
        assert_eq!(session.total_questions(), 3);

        let target = session.current().unwrap().stimulus().to_string();
        let result = session.submit(&target).unwrap();
        assert!(result.is_correct);
        assert!(result.atom_updates.all_passed());
    }
}
