//! sifferdrill-core: answer evaluation, lesson registry, and drill runner.
//!
//! This crate decides whether a learner's typed answer matches a spoken
//! number, time, fraction, or phone number, and grades every atom of the
//! target so that remediation can focus on the exact sub-concept missed.

pub mod atoms;
pub mod compare;
pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod history;
pub mod knowledge;
pub mod model;
pub mod parser;
pub mod registry;
pub mod report;
pub mod results;
pub mod session;
pub mod speech;
pub mod statistics;
pub mod strategy;

pub use model::{AtomUpdates, EvaluationResult, LessonType, Question};
pub use strategy::{EvaluationStrategy, Evaluator};
