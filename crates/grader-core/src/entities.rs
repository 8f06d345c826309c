//! Roster entities and the grade row derived from them.

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A student's recorded homework-server URL plus the id of the submitter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Submission {
    pub id: String,
    /// Id of the user who owns this submission.
    pub parent_id: String,
    pub url: Option<String>,
}

impl Submission {
    /// The submitted server URL.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the submission has no URL or the
    /// URL is blank.
    pub fn target_url(&self) -> Result<&str, CoreError> {
        match self.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(CoreError::Validation(format!(
                "submission {} has no server url",
                self.id
            ))),
        }
    }
}

/// A course member's identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    /// University netid.
    pub username: String,
    pub github_username: String,
}

/// One line of the grade report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GradeRow {
    pub user_id: String,
    pub username: String,
    pub github_username: String,
    pub num_passed: u32,
    pub num_failed: u32,
}

impl GradeRow {
    /// Header line of the CSV report.
    pub const CSV_HEADER: &'static str = "id,netid,github_username,num_passed,num_failed";

    /// Row for `user` with the given counts.
    #[must_use]
    pub fn for_user(user: &User, num_passed: u32, num_failed: u32) -> Self {
        Self {
            user_id: user.id.clone(),
            username: user.username.clone(),
            github_username: user.github_username.clone(),
            num_passed,
            num_failed,
        }
    }

    /// Render the row as one CSV record (no trailing newline).
    #[must_use]
    pub fn to_csv_record(&self) -> String {
        format!(
            "{},{},{},{},{}",
            csv_field(&self.user_id),
            csv_field(&self.username),
            csv_field(&self.github_username),
            self.num_passed,
            self.num_failed
        )
    }
}

/// Quote a field when it contains a delimiter, quote or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
