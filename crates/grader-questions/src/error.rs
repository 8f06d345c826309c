//! Question error types.

use thiserror::Error;

/// Errors raised while probing a target or running a checklist.
///
/// `Transport` and `BodyRead` only ever fail the question they occurred in. `MalformedUrl` aborts the whole run.
#[derive(Debug, Error)]
pub enum QuestionError {
    /// Connection failure or timeout.
    #[error("HTTP error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response arrived but its body could not be read.
    #[error("failed to read response body: {0}")]
    BodyRead(#[source] reqwest::Error),

    /// The target could not be parsed into an `http(s)://host` base URL.
    #[error("malformed target url '{url}': {reason}")]
    MalformedUrl {
        /// The raw URL as submitted.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// No checklist is registered for the assignment slug.
    #[error("unknown assignment: {0}")]
    UnknownAssignment(String),

    /// The runner has already been used.
    #[error("question runner already started")]
    AlreadyStarted,

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Writing human-readable output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
