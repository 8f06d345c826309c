//! Versioned checklists of questions, keyed by assignment slug.

use grader_core::QuestionOutcome;
use reqwest::StatusCode;

use crate::error::QuestionError;
use crate::probe::{Expectation, ProbeClient, Target};
use crate::random;

/// Length of the random strings sent to the strings API.
pub const RANDOM_STRING_LEN: usize = 50;

/// Largest `times` value sent to `/strings/concatenate`.
pub const MAX_CONCATENATE_TIMES: u8 = 5;

/// Query and expected body for one invocation of a body check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyInput {
    pub query: Vec<(&'static str, String)>,
    pub expected: String,
}

/// Produces a fresh [`BodyInput`] on every invocation.
pub type BodyInputFn = fn() -> BodyInput;

/// How a question decides pass or fail.
#[derive(Debug, Clone, Copy)]
pub enum Check {
    /// GET `path` and compare the status code.
    Status {
        path: &'static str,
        expected: StatusCode,
    },
    /// GET `path` with generated query pairs and compare the trimmed body.
    Body {
        path: &'static str,
        input: BodyInputFn,
    },
}

/// A named behavioural assertion against a student server.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub id: &'static str,
    pub description: &'static str,
    pub check: Check,
}

impl Question {
    /// Run this question once against `target`.
    pub async fn ask(&self, client: &ProbeClient, target: &Target) -> QuestionOutcome {
        let result = match self.check {
            Check::Status { path, expected } => {
                client
                    .probe(target.endpoint(path, &[]), &Expectation::Status(expected))
                    .await
            }
            Check::Body { path, input } => {
                let input = input();
                client
                    .probe(
                        target.endpoint(path, &input.query),
                        &Expectation::Body(input.expected),
                    )
                    .await
            }
        };

        QuestionOutcome {
            question: self.id.to_string(),
            description: self.description.to_string(),
            passed: result.passed,
            error: result.error.map(|e| e.to_string()),
        }
    }
}

/// An ordered, versioned list of questions for one assignment.
#[derive(Debug, Clone)]
pub struct Checklist {
    name: &'static str,
    version: u32,
    questions: Vec<Question>,
}

impl Checklist {
    #[must_use]
    pub const fn new(name: &'static str, version: u32, questions: Vec<Question>) -> Self {
        Self {
            name,
            version,
            questions,
        }
    }

    /// Look up the checklist for an assignment slug.
    ///
    /// # Errors
    ///
    /// Returns [`QuestionError::UnknownAssignment`] for unregistered slugs.
    pub fn for_assignment(slug: &str) -> Result<Self, QuestionError> {
        match slug {
            "javascript-servers" => Ok(Self::javascript_servers()),
            other => Err(QuestionError::UnknownAssignment(other.to_string())),
        }
    }

    /// Checklist for the `javascript-servers` assignment.
    #[must_use]
    pub fn javascript_servers() -> Self {
        Self::new(
            "javascript-servers",
            1,
            vec![
                Question {
                    id: "indexIsUp",
                    description: "Your website is up (requesting /)",
                    check: Check::Status {
                        path: "/",
                        expected: StatusCode::OK,
                    },
                },
                Question {
                    id: "protected",
                    description: "Some parts are protected",
                    check: Check::Status {
                        path: "/protected",
                        expected: StatusCode::UNAUTHORIZED,
                    },
                },
                Question {
                    id: "stringUpperCase",
                    description: "Strings API can convert to uppercase",
                    check: Check::Body {
                        path: "/strings/upper",
                        input: upper_input,
                    },
                },
                Question {
                    id: "stringReverse",
                    description: "Strings API can reverse strings",
                    check: Check::Body {
                        path: "/strings/reverse",
                        input: reverse_input,
                    },
                },
                Question {
                    id: "stringConcatenate",
                    description: "Strings API can concatenate",
                    check: Check::Body {
                        path: "/strings/concatenate",
                        input: concatenate_input,
                    },
                },
            ],
        )
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// `name@version`, as recorded in run reports.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

/// Expected body of `/strings/upper`.
#[must_use]
pub fn upper(value: &str) -> String {
    value.to_uppercase()
}

/// Expected body of `/strings/reverse`.
#[must_use]
pub fn reverse(value: &str) -> String {
    value.chars().rev().collect()
}

/// Expected body of `/strings/concatenate`.
#[must_use]
pub fn concatenate(value: &str, times: usize) -> String {
    value.repeat(times)
}

fn upper_input() -> BodyInput {
    let value = random::lowercase_string(RANDOM_STRING_LEN);
    BodyInput {
        expected: upper(&value),
        query: vec![("value", value)],
    }
}

fn reverse_input() -> BodyInput {
    let value = random::lowercase_string(RANDOM_STRING_LEN);
    BodyInput {
        expected: reverse(&value),
        query: vec![("value", value)],
    }
}

fn concatenate_input() -> BodyInput {
    let value = random::lowercase_string(RANDOM_STRING_LEN);
    let times = random::count_in_range(MAX_CONCATENATE_TIMES);
    BodyInput {
        expected: concatenate(&value, usize::from(times)),
        query: vec![("value", value), ("times", times.to_string())],
    }
}
