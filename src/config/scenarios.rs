//! Scenarios command configuration

use crate::cli::OutputFormat;
use crate::common::missing;
use crate::error::ScheduleError;
use crate::solver::Strategy;

/// Configuration for the scenarios command
#[derive(Debug, Clone)]
pub struct ScenariosConfig {
    /// Strategies to run on every scenario
    pub strategies: Vec<Strategy>,
    /// Output format for the report
    pub format: OutputFormat,
    /// Only scenarios whose name contains this text
    pub filter: Option<String>,
}

impl ScenariosConfig {
    pub fn builder() -> ScenariosConfigBuilder {
        ScenariosConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct ScenariosConfigBuilder {
    strategies: Option<Vec<Strategy>>,
    format: Option<OutputFormat>,
    filter: Option<String>,
}

impl ScenariosConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategies(mut self, strategies: Vec<Strategy>) -> Self {
        self.strategies = Some(strategies);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_filter(mut self, filter: Option<String>) -> Self {
        self.filter = filter;
        self
    }
}

impl crate::common::ConfigBuilder for ScenariosConfigBuilder {
    type Config = ScenariosConfig;

    fn build(self) -> Result<Self::Config, ScheduleError> {
        let strategies = self.strategies.ok_or_else(|| missing("strategies"))?;
        if strategies.is_empty() {
            return Err(ScheduleError::ConfigurationError {
                message: "At least one strategy is required".to_string(),
            });
        }

        Ok(ScenariosConfig {
            strategies,
            format: self.format.ok_or_else(|| missing("format"))?,
            filter: self.filter,
        })
    }
}
