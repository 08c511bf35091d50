//! # Course Schedule - Decide Whether Every Course Can Be Finished
//!
//! Course Schedule takes a number of courses and a list of prerequisite pairs
//! `[course, dependency]` and decides whether a student can finish all of
//! them. That holds exactly when the prerequisite graph has no directed
//! cycle.
//!
//! ## Main Components
//!
//! - **Core**: The validated [`core::Schedule`] and its prerequisite pairs
//! - **Solver**: Two independent strategies, depth-first search with
//!   backtracking and Kahn's topological sort
//! - **Analysis**: Locates the cycles that make a schedule unfinishable
//! - **Reports**: Generates human-readable and machine-readable reports
//!
//! ## Usage
//!
//! ### Checking a Schedule Directly
//!
//! ```
//! use course_schedule::core::{Schedule, prerequisites};
//! use course_schedule::solver::Strategy;
//!
//! # fn main() -> Result<(), course_schedule::error::ScheduleError> {
//! let schedule = Schedule::new(3, prerequisites([[1, 0], [2, 1]]))?;
//! assert!(schedule.can_finish_with(Strategy::DepthFirst));
//! assert!(schedule.can_finish_with(Strategy::TopologicalSort));
//!
//! let looping = Schedule::new(2, prerequisites([[1, 0], [0, 1]]))?;
//! assert!(!looping.can_finish_with(Strategy::DepthFirst));
//! # Ok(())
//! # }
//! ```
//!
//! ### Evaluating and Reporting
//!
//! ```no_run
//! use course_schedule::core::{Schedule, prerequisites};
//! use course_schedule::evaluation::{NamedSchedule, evaluate_all};
//! use course_schedule::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};
//! use course_schedule::solver::Strategy;
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! let schedules = vec![
//!     NamedSchedule::new("intro", Schedule::new(2, prerequisites([[1, 0]]))?)
//!         .with_expected(Some(true)),
//!     NamedSchedule::new("loop", Schedule::new(3, prerequisites([[1, 0], [2, 1], [0, 2]]))?),
//! ];
//!
//! let outcomes = evaluate_all(&schedules, &Strategy::ALL, |_| {});
//!
//! // Human-readable report for console output, at most 5 cycles per schedule
//! let human_report = HumanReportGenerator::new(Some(5));
//! println!("{}", human_report.generate_report(&outcomes)?);
//!
//! // JSON report for programmatic processing
//! let json_output = JsonReportGenerator::new().generate_report(&outcomes)?;
//! std::fs::write("schedules.json", json_output).into_diagnostic()?;
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod discovery;
pub mod error;
pub mod evaluation;
pub mod executors;
pub mod reports;
pub mod scenarios;
pub mod schedule_file;
pub mod solver;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
