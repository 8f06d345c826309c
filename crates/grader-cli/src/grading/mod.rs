//! Concurrent grading of a whole roster.

pub mod collector;
pub mod orchestrator;

pub use orchestrator::{GradingSummary, grade_all};
