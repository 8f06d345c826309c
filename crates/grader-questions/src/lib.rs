//! # grader-questions
//!
//! HTTP probes and checklists for grading student homework servers.
//!
//! - [`probe`]: one bounded-timeout GET compared against a status code or a
//!   trimmed body
//! - [`checklist`]: versioned, ordered lists of named questions selected by
//!   assignment slug
//! - [`runner`]: asks every question of a checklist against one target and
//!   collects a [`grader_core::RunReport`]
//!
//! Individual question failures (connection refused, timeouts, unreadable
//! bodies) never escape a run; only a malformed target URL aborts it.

pub mod checklist;
pub mod probe;
pub mod random;
pub mod runner;

mod error;

pub use checklist::{Check, Checklist, Question};
pub use error::QuestionError;
pub use probe::{Expectation, ProbeClient, ProbeResult, Target};
pub use runner::{QuestionRunner, RunState};
