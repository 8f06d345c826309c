//! Outcomes of running a checklist against one target.

use serde::{Deserialize, Serialize};

/// Result of a single question against a single target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionOutcome {
    /// Stable question identifier (e.g., `indexIsUp`).
    pub question: String,
    /// Human-readable description shown next to the pass/fail glyph.
    pub description: String,
    pub passed: bool,
    /// Transport or body-read error, kept as an annotation only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QuestionOutcome {
    /// Status glyph used in human-readable output.
    #[must_use]
    pub const fn status_text(&self) -> &'static str {
        if self.passed { "✅ PASS" } else { "❌ FAIL" }
    }

    /// `<glyph> - <description>`.
    #[must_use]
    pub fn display_line(&self) -> String {
        format!("{} - {}", self.status_text(), self.description)
    }
}

/// Ordered outcomes of one runner pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunReport {
    /// Target the checklist ran against (`scheme://host[:port]`).
    pub target: String,
    /// Checklist name and version (e.g., `javascript-servers@1`).
    pub checklist: String,
    pub outcomes: Vec<QuestionOutcome>,
}

impl RunReport {
    #[must_use]
    pub fn num_passed(&self) -> u32 {
        count(self.outcomes.iter().filter(|o| o.passed))
    }

    #[must_use]
    pub fn num_failed(&self) -> u32 {
        count(self.outcomes.iter().filter(|o| !o.passed))
    }

    /// True when at least one question ran and every question passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        !self.outcomes.is_empty() && self.outcomes.iter().all(|o| o.passed)
    }
}

fn count<'a>(outcomes: impl Iterator<Item = &'a QuestionOutcome>) -> u32 {
    u32::try_from(outcomes.count()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn outcome(passed: bool) -> QuestionOutcome {
        QuestionOutcome {
            question: "indexIsUp".to_string(),
            description: "Your website is up (requesting /)".to_string(),
            passed,
            error: None,
        }
    }

    #[test]
    fn display_line_uses_glyph_and_description() {
        assert_eq!(
            outcome(true).display_line(),
            "✅ PASS - Your website is up (requesting /)"
        );
        assert_eq!(
            outcome(false).display_line(),
            "❌ FAIL - Your website is up (requesting /)"
        );
    }

    #[test]
    fn report_counts() {
        let report = RunReport {
            target: "http://localhost:3000".to_string(),
            checklist: "javascript-servers@1".to_string(),
            outcomes: vec![outcome(true), outcome(false), outcome(true)],
        };
        assert_eq!(report.num_passed(), 2);
        assert_eq!(report.num_failed(), 1);
        assert!(!report.all_passed());
    }

    #[test]
    fn empty_report_is_not_all_passed() {
        let report = RunReport::default();
        assert_eq!(report.num_passed(), 0);
        assert_eq!(report.num_failed(), 0);
        assert!(!report.all_passed());
    }

    #[test]
    fn error_annotation_is_omitted_when_absent() {
        let json = serde_json::to_value(outcome(true)).unwrap();
        assert!(json.get("error").is_none());
    }
}
