//! Runs a checklist against one target.

use std::io::Write;

use grader_core::RunReport;

use crate::checklist::Checklist;
use crate::error::QuestionError;
use crate::probe::{ProbeClient, Target};

/// Lifecycle of a [`QuestionRunner`]. A runner is used exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    NotStarted,
    Running,
    Done,
}

/// Asks every question of a checklist, in order, against one target.
pub struct QuestionRunner<'a> {
    client: &'a ProbeClient,
    checklist: &'a Checklist,
    state: RunState,
    report: Option<RunReport>,
}

impl<'a> QuestionRunner<'a> {
    #[must_use]
    pub const fn new(client: &'a ProbeClient, checklist: &'a Checklist) -> Self {
        Self {
            client,
            checklist,
            state: RunState::NotStarted,
            report: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> RunState {
        self.state
    }

    /// Report of a completed run; `None` before completion or after an
    /// aborted run.
    #[must_use]
    pub const fn report(&self) -> Option<&RunReport> {
        self.report.as_ref()
    }

    /// Run silently.
    ///
    /// # Errors
    ///
    /// Returns [`QuestionError::MalformedUrl`] if `raw_url` is not a usable
    /// target (no question is asked), or [`QuestionError::AlreadyStarted`] if
    /// the runner was used before.
    pub async fn run(&mut self, raw_url: &str) -> Result<&RunReport, QuestionError> {
        self.execute(raw_url, None::<&mut std::io::Sink>).await
    }

    /// Run and write `<glyph> - <description>` for every question to `out`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::run`], plus [`QuestionError::Output`] if `out` fails.
    pub async fn run_with_output<W: Write + Send>(
        &mut self,
        raw_url: &str,
        out: &mut W,
    ) -> Result<&RunReport, QuestionError> {
        self.execute(raw_url, Some(out)).await
    }

    async fn execute<W: Write + Send>(
        &mut self,
        raw_url: &str,
        mut out: Option<&mut W>,
    ) -> Result<&RunReport, QuestionError> {
        if self.state != RunState::NotStarted {
            return Err(QuestionError::AlreadyStarted);
        }
        self.state = RunState::Running;

        let target = match Target::parse(raw_url) {
            Ok(target) => target,
            Err(e) => {
                self.state = RunState::Done;
                return Err(e);
            }
        };

        let mut report = RunReport {
            target: target.origin(),
            checklist: self.checklist.label(),
            outcomes: Vec::with_capacity(self.checklist.questions().len()),
        };

        for question in self.checklist.questions() {
            let outcome = question.ask(self.client, &target).await;
            tracing::debug!(
                target_url = %report.target,
                question = question.id,
                passed = outcome.passed,
                error = outcome.error.as_deref().unwrap_or(""),
                "question answered"
            );
            if let Some(out) = out.as_deref_mut() {
                if let Err(e) = writeln!(out, "{}", outcome.display_line()) {
                    self.state = RunState::Done;
                    return Err(e.into());
                }
            }
            report.outcomes.push(outcome);
        }

        self.state = RunState::Done;
        Ok(self.report.insert(report))
    }
}
