//! # grader-config
//!
//! Layered configuration loading for the grader using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GRADER_*` prefix, `__` as separator)
//! 2. Project-level `.grader/config.toml`
//! 3. User-level `~/.config/grader/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GRADER_HTTP__TIMEOUT_SECS` -> `http.timeout_secs`,
//! `GRADER_GRADING__MAX_CONCURRENCY` -> `grading.max_concurrency`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use grader_config::GraderConfig;
//!
//! let config = GraderConfig::load_with_dotenv().expect("config");
//! println!("timeout: {}s", config.http.timeout_secs);
//! ```

mod error;
mod grading;
mod http;
mod roster;

pub use error::ConfigError;
pub use grading::GradingConfig;
pub use http::HttpConfig;
pub use roster::RosterConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GraderConfig {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub grading: GradingConfig,
    #[serde(default)]
    pub roster: RosterConfig,
}

impl GraderConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value fails
    /// validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on extraction or validation failure.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".grader/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("GRADER_").split("__"))
    }

    /// Reject values that would make a grading run meaningless.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "http.timeout_secs".to_string(),
                reason: "must be at least 1 second".to_string(),
            });
        }
        if self.grading.max_concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                field: "grading.max_concurrency".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.grading.assignment.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "grading.assignment".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("grader").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GraderConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.roster.is_configured());
        assert_eq!(config.grading.assignment, "javascript-servers");
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = GraderConfig::default();
        config.http.timeout_secs = 0;
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "http.timeout_secs")
        );
    }

    #[test]
    fn zero_concurrency_is_rejected() {
        let mut config = GraderConfig::default();
        config.grading.max_concurrency = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
