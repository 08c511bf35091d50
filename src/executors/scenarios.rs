//! Scenarios command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::config::ScenariosConfig;
use crate::evaluation::Tally;
use crate::executors::{CommandExecutor, evaluate_with_progress, render_report};
use crate::progress::ProgressReporter;
use crate::scenarios;
use crate::utils::pluralize;

pub struct ScenariosExecutor;

impl CommandExecutor for ScenariosExecutor {
    type Config = ScenariosConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let schedules = scenarios::matching(config.filter.as_deref())
            .into_diagnostic()
            .wrap_err("Failed to build the built-in scenarios")?;

        if schedules.is_empty() {
            eprintln!(
                "{} No scenario matches '{}'",
                style("ℹ").blue(),
                config.filter.as_deref().unwrap_or_default()
            );
            return Ok(());
        }

        eprintln!(
            "{} Running {} {}...\n",
            style("🧪").cyan(),
            style(schedules.len()).bold(),
            pluralize("scenario", schedules.len())
        );

        let mut progress = ProgressReporter::for_terminal();
        let outcomes = evaluate_with_progress(&schedules, &config.strategies, progress.as_mut());

        let report = render_report(config.format, None, &outcomes)
            .into_diagnostic()
            .wrap_err("Failed to generate report")?;
        print!("{report}");

        if Tally::of(&outcomes).failed > 0 {
            std::process::exit(1);
        }

        Ok(())
    }
}
