//! Roster error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort loading a roster. Nothing is graded when these occur.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The export file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of the export is not a valid record.
    #[error("invalid record in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}
