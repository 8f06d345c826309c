//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed working directories and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use grader_config::{ConfigError, GraderConfig};
use pretty_assertions::assert_eq;

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[http]
timeout_secs = 3
user_agent = "cpsc213-grader"

[grading]
assignment = "javascript-servers"
max_concurrency = 4

[roster]
submissions_path = "exports/assignmentsubmissions.jsonl"
users_path = "exports/users.jsonl"
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(GraderConfig::default()))
            .merge(Toml::file("config.toml"));
        let config = GraderConfig::from_figment(&figment).expect("config loads");

        assert_eq!(config.http.timeout_secs, 3);
        assert_eq!(config.http.user_agent, "cpsc213-grader");
        assert_eq!(config.grading.max_concurrency, 4);
        assert_eq!(
            config.roster.submissions_path,
            "exports/assignmentsubmissions.jsonl"
        );
        assert!(config.roster.is_configured());
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[grading]
max_concurrency = 2
",
        )?;

        let figment = Figment::from(Serialized::defaults(GraderConfig::default()))
            .merge(Toml::file("config.toml"));
        let config = GraderConfig::from_figment(&figment).expect("config loads");

        assert_eq!(config.grading.max_concurrency, 2);
        assert_eq!(config.grading.assignment, "javascript-servers");
        assert_eq!(config.http.timeout_secs, 10);
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(".grader").map_err(|e| e.to_string())?;
        jail.create_file(
            ".grader/config.toml",
            r"
[http]
timeout_secs = 7
",
        )?;

        let config = GraderConfig::load().expect("config loads");
        assert_eq!(config.http.timeout_secs, 7);
        Ok(())
    });
}

#[test]
fn invalid_values_are_rejected_after_extraction() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[grading]
max_concurrency = 0
",
        )?;

        let figment = Figment::from(Serialized::defaults(GraderConfig::default()))
            .merge(Toml::file("config.toml"));
        let err = GraderConfig::from_figment(&figment).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}
