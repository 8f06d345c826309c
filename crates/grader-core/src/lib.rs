//! # grader-core
//!
//! Core types and error types for the homework server grader.
//!
//! This crate provides the foundational types shared across all grader crates:
//! - Roster entities (submissions, users) and the derived grade row
//! - Question outcomes and the per-target run report
//! - Cross-cutting error types

pub mod entities;
pub mod errors;
pub mod report;

pub use entities::{GradeRow, Submission, User};
pub use errors::CoreError;
pub use report::{QuestionOutcome, RunReport};
