//! Check command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::common::missing;
use crate::error::ScheduleError;
use crate::solver::Strategy;

/// Configuration for the check command
///
/// This struct contains all options for evaluating schedule files.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Files or directories to search for schedules
    pub paths: Vec<PathBuf>,
    /// File name globs used inside directories
    pub patterns: Vec<String>,
    /// Strategies to run on every schedule
    pub strategies: Vec<Strategy>,
    /// Output format for the report
    pub format: OutputFormat,
    /// Maximum number of cycles to report per schedule (None = all)
    pub max_cycles: Option<usize>,
    /// Whether to exit with error code if a schedule cannot be finished
    pub error_on_cycles: bool,
}

impl CheckConfig {
    pub fn builder() -> CheckConfigBuilder {
        CheckConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct CheckConfigBuilder {
    paths: Option<Vec<PathBuf>>,
    patterns: Option<Vec<String>>,
    strategies: Option<Vec<Strategy>>,
    format: Option<OutputFormat>,
    max_cycles: Option<Option<usize>>,
    error_on_cycles: Option<bool>,
}

impl CheckConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = Some(paths);
        self
    }

    pub fn with_patterns(mut self, patterns: Vec<String>) -> Self {
        self.patterns = Some(patterns);
        self
    }

    pub fn with_strategies(mut self, strategies: Vec<Strategy>) -> Self {
        self.strategies = Some(strategies);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }

    pub fn with_error_on_cycles(mut self, error_on_cycles: bool) -> Self {
        self.error_on_cycles = Some(error_on_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for CheckConfigBuilder {
    type Config = CheckConfig;

    fn build(self) -> Result<Self::Config, ScheduleError> {
        let strategies = self.strategies.ok_or_else(|| missing("strategies"))?;
        if strategies.is_empty() {
            return Err(ScheduleError::ConfigurationError {
                message: "At least one strategy is required".to_string(),
            });
        }

        Ok(CheckConfig {
            paths: self.paths.ok_or_else(|| missing("paths"))?,
            patterns: self.patterns.ok_or_else(|| missing("patterns"))?,
            strategies,
            format: self.format.ok_or_else(|| missing("format"))?,
            max_cycles: self.max_cycles.ok_or_else(|| missing("max_cycles"))?,
            error_on_cycles: self
                .error_on_cycles
                .ok_or_else(|| missing("error_on_cycles"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    fn complete() -> CheckConfigBuilder {
        CheckConfig::builder()
            .with_paths(vec![PathBuf::from(".")])
            .with_patterns(vec!["*.toml".to_string()])
            .with_strategies(vec![Strategy::DepthFirst])
            .with_format(OutputFormat::Human)
            .with_max_cycles(Some(3))
            .with_error_on_cycles(false)
    }

    #[test]
    fn test_build_complete_config() {
        let config = complete().build().unwrap();
        assert_eq!(config.strategies, vec![Strategy::DepthFirst]);
        assert_eq!(config.max_cycles, Some(3));
        assert!(!config.error_on_cycles);
    }

    #[test]
    fn test_missing_field() {
        let err = CheckConfig::builder()
            .with_paths(vec![PathBuf::from(".")])
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("Missing required field"));
    }

    #[test]
    fn test_empty_strategies_rejected() {
        let err = complete().with_strategies(Vec::new()).build().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: At least one strategy is required"
        );
    }
}
