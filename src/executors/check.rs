//! Check command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::config::CheckConfig;
use crate::discovery::ScheduleDiscovery;
use crate::evaluation::Tally;
use crate::executors::{CommandExecutor, evaluate_with_progress, render_report};
use crate::progress::ProgressReporter;
use crate::utils::pluralize;

pub struct CheckExecutor;

impl CommandExecutor for CheckExecutor {
    type Config = CheckConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Checking course schedules with {}...\n",
            style("📚").cyan(),
            config
                .strategies
                .iter()
                .map(|s| s.name())
                .collect::<Vec<_>>()
                .join(" and ")
        );

        let mut progress = ProgressReporter::for_terminal();

        let mut discovery = ScheduleDiscovery::new(config.patterns.as_slice())
            .wrap_err("Failed to prepare schedule discovery")?;
        let discovered = discovery.discover(&config.paths, progress.as_mut());

        for (path, error) in &discovered.failures {
            eprintln!(
                "{} Skipping '{}': {}",
                style("⚠").yellow(),
                path.display(),
                error
            );
        }

        if discovered.schedules.is_empty() && discovered.failures.is_empty() {
            eprintln!("{} No schedule files found to check", style("ℹ").blue());
            return Ok(());
        }

        let outcomes =
            evaluate_with_progress(&discovered.schedules, &config.strategies, progress.as_mut());

        let report = render_report(config.format, config.max_cycles, &outcomes)
            .into_diagnostic()
            .wrap_err("Failed to generate report")?;
        print!("{report}");

        let tally = Tally::of(&outcomes);
        let load_failures = discovered.failures.len();
        if load_failures > 0 {
            eprintln!(
                "\n{} {} {} could not be loaded",
                style("✗").red(),
                style(load_failures).red().bold(),
                pluralize("file", load_failures)
            );
        }

        let failed = tally.failed > 0
            || load_failures > 0
            || (config.error_on_cycles && tally.unfinishable > 0);
        if failed {
            std::process::exit(1);
        }

        Ok(())
    }
}
