//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::cli::{OutputFormat, StrategyChoice};
use crate::constants::discovery::DEFAULT_PATTERNS;
use crate::error::ScheduleError;

/// Where to look for schedule files
#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Schedule files or directories to search (defaults to current
    /// directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// File name glob for schedule files found in directories (repeatable)
    #[arg(long = "pattern", value_name = "GLOB", env = "COURSE_SCHEDULE_PATTERN")]
    pub patterns: Vec<String>,
}

/// Strategy selection shared by every command
#[derive(Args, Debug, Clone)]
pub struct StrategyArgs {
    /// Which strategy to run
    #[arg(
        short,
        long,
        value_enum,
        default_value = crate::constants::output::DEFAULT_STRATEGY,
        env = "COURSE_SCHEDULE_STRATEGY"
    )]
    pub strategy: StrategyChoice,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "COURSE_SCHEDULE_FORMAT")]
    pub format: OutputFormat,
}

impl PathArgs {
    /// Get paths, using current directory if none provided
    pub fn get_paths(&self) -> Vec<PathBuf> {
        if self.paths.is_empty() {
            vec![std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))]
        } else {
            self.paths.clone()
        }
    }

    /// Get patterns, using the default schedule extensions if none provided
    pub fn get_patterns(&self) -> Vec<String> {
        if self.patterns.is_empty() {
            DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect()
        } else {
            self.patterns.clone()
        }
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, ScheduleError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    fn from_command(command: crate::cli::Commands) -> Result<Self, ScheduleError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::ScheduleError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Shorthand for the "missing required field" configuration error
pub(crate) fn missing(field: &str) -> ScheduleError {
    ScheduleError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}
