//! Record shapes of the `assignmentsubmissions` and `users` exports.
//!
//! Exports come from `mongoexport`, so ids may appear either as plain strings
//! or in extended-JSON form (`{"$oid": "..."}`).

use grader_core::{Submission, User};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ExportId {
    ObjectId {
        #[serde(rename = "$oid")]
        oid: String,
    },
    Plain(String),
}

impl ExportId {
    #[must_use]
    pub fn into_hex(self) -> String {
        match self {
            Self::ObjectId { oid } => oid,
            Self::Plain(id) => id,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionDetails {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionRecord {
    #[serde(rename = "_id")]
    pub id: ExportId,
    #[serde(rename = "parentId")]
    pub parent_id: ExportId,
    #[serde(rename = "assignmentSlug", default)]
    pub assignment_slug: Option<String>,
    #[serde(default)]
    pub submission: SubmissionDetails,
}

impl SubmissionRecord {
    /// Records without a slug are assumed to come from an already filtered
    /// export and are kept.
    #[must_use]
    pub fn belongs_to(&self, assignment: &str) -> bool {
        self.assignment_slug
            .as_deref()
            .is_none_or(|slug| slug == assignment)
    }
}

impl From<SubmissionRecord> for Submission {
    fn from(record: SubmissionRecord) -> Self {
        Self {
            id: record.id.into_hex(),
            parent_id: record.parent_id.into_hex(),
            url: record.submission.url,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    #[serde(rename = "githubUsername", default)]
    pub github_username: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: ExportId,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub profile: Profile,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id.into_hex(),
            username: record.username.unwrap_or_default(),
            github_username: record.profile.github_username.unwrap_or_default(),
        }
    }
}
