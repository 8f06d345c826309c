//! Grades every submission through a bounded pool of probe tasks.

use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use grader_core::{GradeRow, Submission, User};
use grader_questions::{Checklist, ProbeClient, QuestionRunner};
use serde::Serialize;
use tokio::sync::{Semaphore, mpsc};

use crate::grading::collector;
use crate::progress::Progress;

/// Totals for one grading run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GradingSummary {
    pub submissions: usize,
    pub rows_written: usize,
    /// Submissions that passed every question.
    pub fully_passing: usize,
    /// Submissions whose URL was missing or malformed, so nothing ran.
    pub skipped: usize,
}

/// Pass/fail counts for one submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct SubmissionGrade {
    passed: u32,
    failed: u32,
    ran: bool,
}

/// Grade `submissions` and stream one CSV row per submission to `writer`.
///
/// At most `max_concurrency` submissions are probed at once. Rows arrive in
/// completion order. Every submission yields exactly one row; submissions
/// that could not be probed are reported as `0,0`.
pub async fn grade_all<W: Write + Send + 'static>(
    client: ProbeClient,
    checklist: Arc<Checklist>,
    submissions: Vec<Submission>,
    users: &HashMap<String, User>,
    max_concurrency: usize,
    writer: W,
    progress: &Progress,
) -> anyhow::Result<GradingSummary> {
    let total = submissions.len();
    let (tx, rx) = mpsc::channel::<GradeRow>(max_concurrency.max(1));
    let collector = tokio::task::spawn_blocking(move || collector::write_rows(rx, writer));

    let semaphore = Arc::new(Semaphore::new(max_concurrency.max(1)));
    let mut identities: Vec<Option<User>> = Vec::with_capacity(total);
    let mut set = tokio::task::JoinSet::new();

    for (idx, submission) in submissions.into_iter().enumerate() {
        identities.push(Some(submitter_or_placeholder(users, &submission)));

        let client = client.clone();
        let checklist = Arc::clone(&checklist);
        let sem = Arc::clone(&semaphore);
        set.spawn(async move {
            let Ok(_permit) = sem.acquire().await else {
                return (idx, SubmissionGrade::default());
            };
            (idx, grade_submission(&client, &checklist, &submission).await)
        });
    }

    let mut summary = GradingSummary {
        submissions: total,
        ..GradingSummary::default()
    };

    // A failed send means the collector already gave up; its error is the
    // one worth reporting.
    let mut writer_stopped = false;
    while let Some(joined) = set.join_next().await {
        let (idx, grade) = match joined {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(%e, "grading task failed");
                continue;
            }
        };
        let Some(user) = identities.get_mut(idx).and_then(Option::take) else {
            continue;
        };
        tally(&mut summary, grade, &checklist);
        if !send_row(&tx, GradeRow::for_user(&user, grade.passed, grade.failed)).await {
            writer_stopped = true;
            break;
        }
        progress.inc(1);
    }

    // Tasks that died without reporting still owe a row.
    if !writer_stopped {
        for user in identities.into_iter().flatten() {
            tracing::warn!(user = %user.id, "no result for submission; reporting 0,0");
            tally(&mut summary, SubmissionGrade::default(), &checklist);
            if !send_row(&tx, GradeRow::for_user(&user, 0, 0)).await {
                writer_stopped = true;
                break;
            }
            progress.inc(1);
        }
    }

    drop(tx);
    set.abort_all();
    let written = collector
        .await
        .context("report writer task failed")?
        .context("failed to write grade report")?;
    if writer_stopped {
        anyhow::bail!("report writer stopped before all rows were written");
    }
    summary.rows_written = written;
    Ok(summary)
}

/// `false` once the collector has hung up.
async fn send_row(tx: &mpsc::Sender<GradeRow>, row: GradeRow) -> bool {
    tx.send(row).await.is_ok()
}

fn tally(summary: &mut GradingSummary, grade: SubmissionGrade, checklist: &Checklist) {
    if !grade.ran {
        summary.skipped += 1;
    } else if usize::try_from(grade.passed).is_ok_and(|p| p == checklist.questions().len()) {
        summary.fully_passing += 1;
    }
}

/// The submitter, or a placeholder carrying only the parent id.
fn submitter_or_placeholder(users: &HashMap<String, User>, submission: &Submission) -> User {
    match grader_roster::resolve_submitter(users, submission) {
        Ok(user) => user.clone(),
        Err(e) => {
            tracing::warn!(submission = %submission.id, %e, "submitter not found");
            User {
                id: submission.parent_id.clone(),
                ..User::default()
            }
        }
    }
}

async fn grade_submission(
    client: &ProbeClient,
    checklist: &Checklist,
    submission: &Submission,
) -> SubmissionGrade {
    let url = match submission.target_url() {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!(submission = %submission.id, %e, "skipping submission");
            return SubmissionGrade::default();
        }
    };

    let mut runner = QuestionRunner::new(client, checklist);
    match runner.run(url).await {
        Ok(report) => SubmissionGrade {
            passed: report.num_passed(),
            failed: report.num_failed(),
            ran: true,
        },
        Err(e) => {
            tracing::warn!(submission = %submission.id, %e, "skipping submission");
            SubmissionGrade::default()
        }
    }
}
