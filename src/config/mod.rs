//! # Configuration Module
//!
//! Configuration structures for every course-schedule command. Each command
//! has its own config module with a builder for easy construction.
//!
//! ## Command Configurations
//!
//! - **CheckConfig**: Configuration for the `check` command over schedule
//!   files
//! - **ScenariosConfig**: Configuration for the `scenarios` command over the
//!   built-in battery
//!
//! ## Example
//!
//! ```
//! use course_schedule::cli::OutputFormat;
//! use course_schedule::common::ConfigBuilder;
//! use course_schedule::config::{CheckConfig, ScenariosConfig};
//! use course_schedule::solver::Strategy;
//!
//! let check = CheckConfig::builder()
//!     .with_paths(vec!["schedules".into()])
//!     .with_patterns(vec!["*.toml".to_string()])
//!     .with_strategies(Strategy::ALL.to_vec())
//!     .with_format(OutputFormat::Json)
//!     .with_max_cycles(None)
//!     .with_error_on_cycles(true)
//!     .build()
//!     .unwrap();
//! assert!(check.error_on_cycles);
//!
//! // Leaving out a required field is a configuration error
//! let incomplete = ScenariosConfig::builder()
//!     .with_format(OutputFormat::Human)
//!     .build();
//! assert!(incomplete.is_err());
//! ```

pub mod check;
pub mod scenarios;

pub use check::CheckConfig;
pub use scenarios::ScenariosConfig;
