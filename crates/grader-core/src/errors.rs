//! Cross-cutting error types for the grader.
//!
//! Domain-specific errors (`QuestionError`, `RosterError`, `ConfigError`) live
//! in their respective crates. They converge into `anyhow::Error` in
//! `grader-cli`.

use thiserror::Error;

/// Errors that can be raised by any grader crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn messages_name_the_entity() {
        let err = CoreError::NotFound {
            entity_type: "user".to_string(),
            id: "u9".to_string(),
        };
        assert_eq!(err.to_string(), "Entity not found: user u9");
        assert_eq!(
            CoreError::Validation("no url".to_string()).to_string(),
            "Validation error: no url"
        );
    }
}
