use grader_config::GraderConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &GraderConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Test(args) => commands::test::handle(&args, config, flags).await,
        Commands::Grade(args) => commands::grade::handle(&args, config, flags).await,
    }
}
