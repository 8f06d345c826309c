//! # grader-roster
//!
//! Loads the submissions to grade and the users who made them from
//! JSON-lines exports of the course database, and resolves each submission
//! to its submitter.
//!
//! Loading is all-or-nothing: an unreadable file or a malformed line aborts
//! before anything is graded.

pub mod records;

mod error;

pub use error::RosterError;

use std::collections::HashMap;
use std::path::Path;

use grader_core::{CoreError, Submission, User};
use serde::de::DeserializeOwned;

use crate::records::{SubmissionRecord, UserRecord};

/// Submissions for one assignment plus an id → user index.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    submissions: Vec<Submission>,
    users: HashMap<String, User>,
}

impl Roster {
    /// Load both exports, keeping only submissions for `assignment`.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError`] if either file cannot be read or parsed.
    pub fn load(
        submissions_path: &Path,
        users_path: &Path,
        assignment: &str,
    ) -> Result<Self, RosterError> {
        let submissions = load_submissions(submissions_path, assignment)?;
        let users = load_users(users_path)?;
        tracing::info!(
            assignment,
            submissions = submissions.len(),
            users = users.len(),
            "roster loaded"
        );
        Ok(Self::from_parts(submissions, users))
    }

    /// Build a roster from already-loaded records.
    #[must_use]
    pub fn from_parts(submissions: Vec<Submission>, users: Vec<User>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.id.clone(), user))
            .collect();
        Self { submissions, users }
    }

    #[must_use]
    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    /// Split into the submissions and the user index.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Submission>, HashMap<String, User>) {
        (self.submissions, self.users)
    }

    /// The user who made `submission`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if the parent id has no user record.
    pub fn submitter(&self, submission: &Submission) -> Result<&User, CoreError> {
        resolve_submitter(&self.users, submission)
    }
}

/// Look up the submitter of `submission` in an id → user index.
///
/// # Errors
///
/// Returns [`CoreError::NotFound`] if the parent id has no user record.
pub fn resolve_submitter<'a>(
    users: &'a HashMap<String, User>,
    submission: &Submission,
) -> Result<&'a User, CoreError> {
    users
        .get(&submission.parent_id)
        .ok_or_else(|| CoreError::NotFound {
            entity_type: String::from("user"),
            id: submission.parent_id.clone(),
        })
}

/// Read submissions for `assignment` from a JSON-lines export.
///
/// # Errors
///
/// Returns [`RosterError`] if the file cannot be read or a line is invalid.
pub fn load_submissions(path: &Path, assignment: &str) -> Result<Vec<Submission>, RosterError> {
    let records: Vec<SubmissionRecord> = read_json_lines(path)?;
    let total = records.len();
    let submissions: Vec<Submission> = records
        .into_iter()
        .filter(|record| record.belongs_to(assignment))
        .map(Submission::from)
        .collect();
    if submissions.len() < total {
        tracing::debug!(
            skipped = total - submissions.len(),
            assignment,
            "skipped submissions for other assignments"
        );
    }
    Ok(submissions)
}

/// Read every user from a JSON-lines export.
///
/// # Errors
///
/// Returns [`RosterError`] if the file cannot be read or a line is invalid.
pub fn load_users(path: &Path) -> Result<Vec<User>, RosterError> {
    let records: Vec<UserRecord> = read_json_lines(path)?;
    Ok(records.into_iter().map(User::from).collect())
}

fn read_json_lines<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, RosterError> {
    let to_error = |source: std::io::Error| {
        if source.kind() == std::io::ErrorKind::InvalidData {
            RosterError::Parse {
                path: path.to_path_buf(),
                message: source.to_string(),
            }
        } else {
            RosterError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    };

    serde_jsonlines::json_lines(path)
        .map_err(to_error)?
        .collect::<Result<Vec<T>, _>>()
        .map_err(to_error)
}
