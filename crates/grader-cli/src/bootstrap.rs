use anyhow::Context;
use grader_config::GraderConfig;

/// Load `.env`, config files and `GRADER_*` env vars.
pub fn load_config() -> anyhow::Result<GraderConfig> {
    let config = GraderConfig::load_with_dotenv().context("failed to load grader configuration")?;
    tracing::debug!(
        timeout_secs = config.http.timeout_secs,
        assignment = %config.grading.assignment,
        max_concurrency = config.grading.max_concurrency,
        "configuration loaded"
    );
    Ok(config)
}
