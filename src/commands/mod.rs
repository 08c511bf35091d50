//! Command implementations for the course-schedule CLI
//!
//! This module contains the implementations for each CLI command:
//! - check: Evaluate schedule files for prerequisite cycles
//! - scenarios: Run the built-in scenario battery

pub mod check;
pub mod scenarios;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Check { .. } => check::execute_check_command(command),
        Commands::Scenarios { .. } => scenarios::execute_scenarios_command(command),
    }
}
