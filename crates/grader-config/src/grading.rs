//! Grading run configuration.

use serde::{Deserialize, Serialize};

fn default_assignment() -> String {
    String::from("javascript-servers")
}

/// Default cap on submissions graded at the same time.
const fn default_max_concurrency() -> usize {
    16
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GradingConfig {
    /// Assignment slug; selects both the submissions and the checklist.
    #[serde(default = "default_assignment")]
    pub assignment: String,

    /// Maximum number of submissions probed concurrently.
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            assignment: default_assignment(),
            max_concurrency: default_max_concurrency(),
        }
    }
}
