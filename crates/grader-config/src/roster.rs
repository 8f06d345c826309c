//! Roster export locations.

use serde::{Deserialize, Serialize};

/// Paths to JSON-lines exports of the submission and user collections.
///
/// Empty paths mean "not configured"; the CLI then requires them as flags.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub submissions_path: String,

    #[serde(default)]
    pub users_path: String,
}

impl RosterConfig {
    /// Returns `true` if both export paths are set.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        !self.submissions_path.is_empty() && !self.users_path.is_empty()
    }
}
