use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use grader_config::GraderConfig;
use grader_questions::{Checklist, ProbeClient};
use grader_roster::Roster;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GradeArgs;
use crate::grading::{GradingSummary, grade_all};
use crate::progress::Progress;

/// Handle `grader grade`.
///
/// The roster is loaded in full before any server is probed; a missing or
/// malformed export aborts the run.
pub async fn handle(
    args: &GradeArgs,
    config: &GraderConfig,
    _flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let assignment = args
        .assignment
        .as_deref()
        .unwrap_or(&config.grading.assignment);
    let checklist = Arc::new(Checklist::for_assignment(assignment)?);

    let submissions_path = export_path(
        args.submissions.as_ref(),
        &config.roster.submissions_path,
        "--submissions",
        "roster.submissions_path",
    )?;
    let users_path = export_path(
        args.users.as_ref(),
        &config.roster.users_path,
        "--users",
        "roster.users_path",
    )?;

    let roster = Roster::load(&submissions_path, &users_path, assignment)
        .context("failed to load roster")?;
    let max_concurrency = args
        .concurrency
        .map_or(config.grading.max_concurrency, usize::from);
    let client = ProbeClient::new(config.http.timeout(), &config.http.user_agent)?;

    let (submissions, users) = roster.into_parts();
    let progress = Progress::bar(submissions.len() as u64, "grading submissions");

    let summary = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            grade_all(
                client,
                checklist,
                submissions,
                &users,
                max_concurrency,
                BufWriter::new(file),
                &progress,
            )
            .await
        }
        None => {
            grade_all(
                client,
                checklist,
                submissions,
                &users,
                max_concurrency,
                std::io::stdout(),
                &progress,
            )
            .await
        }
    };

    let summary = match summary {
        Ok(summary) => summary,
        Err(error) => {
            progress.finish_clear();
            return Err(error);
        }
    };
    progress.finish_ok(&finish_message(&summary));
    tracing::info!(
        assignment,
        submissions = summary.submissions,
        rows_written = summary.rows_written,
        fully_passing = summary.fully_passing,
        skipped = summary.skipped,
        "grading complete"
    );
    Ok(())
}

/// CLI flag first, then config; error when neither is set.
fn export_path(
    flag: Option<&PathBuf>,
    configured: &str,
    flag_name: &str,
    config_key: &str,
) -> anyhow::Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path.clone());
    }
    if !configured.is_empty() {
        return Ok(PathBuf::from(configured));
    }
    anyhow::bail!("no export given: pass {flag_name} or set {config_key}")
}

fn finish_message(summary: &GradingSummary) -> String {
    format!(
        "graded {} submissions ({} fully passing, {} skipped)",
        summary.submissions, summary.fully_passing, summary.skipped
    )
}
