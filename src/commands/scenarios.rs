//! Scenarios command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ScenariosConfig;
use crate::error::ScheduleError;

impl FromCommand for ScenariosConfig {
    fn from_command(command: Commands) -> Result<Self, ScheduleError> {
        match command {
            Commands::Scenarios {
                strategy,
                format,
                filter,
            } => ScenariosConfig::builder()
                .with_strategies(strategy.strategy.strategies())
                .with_format(format.format)
                .with_filter(filter)
                .build(),
            _ => Err(ScheduleError::ConfigurationError {
                message: "Invalid command type for ScenariosConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ScenariosConfig);

/// Execute the scenarios command over the built-in battery
pub fn execute_scenarios_command(command: Commands) -> Result<()> {
    let config = ScenariosConfig::from_command(command)
        .wrap_err("Failed to parse scenarios command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::scenarios::ScenariosExecutor;
    ScenariosExecutor::execute(config)
}
