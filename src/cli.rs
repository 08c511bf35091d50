use clap::{Parser, Subcommand};

use crate::common::{FormatArgs, PathArgs, StrategyArgs};
use crate::solver::Strategy;

#[derive(Parser)]
#[command(
    name = "course-schedule",
    about = "📚 Decide whether every course can be finished given its prerequisites",
    long_about = "course-schedule reads course schedules (a course count plus [course, \
                  dependency] prerequisite pairs) and decides whether every course can be \
                  finished, which holds exactly when the prerequisites contain no cycle. Two \
                  independent strategies are available: depth-first search with backtracking \
                  and Kahn's topological sort.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check schedule files for prerequisite cycles
    ///
    /// Reads TOML or JSON schedule files, given directly or found by walking
    /// directories, and reports whether each one can be finished.
    #[command(
        long_about = "Evaluate schedule files. Each file holds `num_courses`, a `prerequisites` \
                      list of [course, dependency] pairs, and optionally a `name` and the \
                      `expected` answer. Directories are searched recursively for files matching \
                      the --pattern globs. A schedule whose result disagrees with its `expected` \
                      value makes the command fail."
    )]
    Check {
        #[command(flatten)]
        paths: PathArgs,

        #[command(flatten)]
        strategy: StrategyArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Maximum number of cycles to display per schedule (shows all by
        /// default)
        #[arg(long, env = "COURSE_SCHEDULE_MAX_CYCLES")]
        max_cycles: Option<usize>,

        /// Exit with error code if any schedule cannot be finished
        #[arg(long, env = "COURSE_SCHEDULE_ERROR_ON_CYCLES")]
        error_on_cycles: bool,
    },

    /// Run the built-in scenario battery
    ///
    /// Evaluates every literal scenario with the selected strategies and
    /// reports pass/fail and elapsed time for each.
    #[command(
        long_about = "Run the built-in scenarios: chains, shared dependencies, two- and \
                      three-course cycles, self-loops and a dense 100-course chain. Each scenario \
                      has a known answer; the command fails if any strategy disagrees with it."
    )]
    Scenarios {
        #[command(flatten)]
        strategy: StrategyArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Only run scenarios whose name contains this text
        #[arg(long, value_name = "TEXT", env = "COURSE_SCHEDULE_FILTER")]
        filter: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Junit,
    #[value(name = "github")]
    GitHub,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum StrategyChoice {
    /// Depth-first search with backtracking
    Dfs,
    /// Kahn's topological sort
    Kahn,
    /// Both strategies, side by side
    All,
}

impl StrategyChoice {
    pub fn strategies(self) -> Vec<Strategy> {
        match self {
            Self::Dfs => vec![Strategy::DepthFirst],
            Self::Kahn => vec![Strategy::TopologicalSort],
            Self::All => Strategy::ALL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check_defaults() {
        let cli = Cli::try_parse_from(["course-schedule", "check"]).unwrap();
        match cli.command {
            Commands::Check {
                paths,
                strategy,
                format,
                max_cycles,
                error_on_cycles,
            } => {
                assert!(paths.paths.is_empty());
                assert_eq!(strategy.strategy, StrategyChoice::All);
                assert_eq!(format.format, OutputFormat::Human);
                assert_eq!(max_cycles, None);
                assert!(!error_on_cycles);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_parse_scenarios_with_options() {
        let cli = Cli::try_parse_from([
            "course-schedule",
            "scenarios",
            "--strategy",
            "kahn",
            "--format",
            "junit",
            "--filter",
            "cycle",
        ])
        .unwrap();

        match cli.command {
            Commands::Scenarios {
                strategy,
                format,
                filter,
            } => {
                assert_eq!(strategy.strategy.strategies(), vec![Strategy::TopologicalSort]);
                assert_eq!(format.format, OutputFormat::Junit);
                assert_eq!(filter.as_deref(), Some("cycle"));
            }
            _ => panic!("Expected Scenarios command"),
        }
    }

    #[test]
    fn test_strategy_choice_expansion() {
        assert_eq!(StrategyChoice::Dfs.strategies(), vec![Strategy::DepthFirst]);
        assert_eq!(StrategyChoice::All.strategies(), Strategy::ALL.to_vec());
    }
}
