//! Command executors that handle the actual logic for each command

pub mod check;
pub mod scenarios;

use miette::Result;

use crate::cli::OutputFormat;
use crate::error::ScheduleError;
use crate::evaluation::{CheckOutcome, NamedSchedule, evaluate_all};
use crate::progress::ProgressReporter;
use crate::reports::{
    GitHubReportGenerator, HumanReportGenerator, JsonReportGenerator, JunitReportGenerator,
    ReportGenerator,
};
use crate::solver::Strategy;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Evaluate every schedule with every strategy, ticking the progress bar
pub(crate) fn evaluate_with_progress(
    schedules: &[NamedSchedule],
    strategies: &[Strategy],
    progress: Option<&mut ProgressReporter>,
) -> Vec<CheckOutcome> {
    let Some(progress) = progress else {
        return evaluate_all(schedules, strategies, |_| {});
    };

    let bar = progress.start_evaluation(schedules.len() * strategies.len());
    let outcomes = evaluate_all(schedules, strategies, |_| bar.inc(1));
    progress.finish_evaluation(outcomes.iter().filter(|o| !o.can_finish).count());
    outcomes
}

/// Render outcomes in the requested format
pub(crate) fn render_report(
    format: OutputFormat,
    max_cycles: Option<usize>,
    outcomes: &[CheckOutcome],
) -> Result<String, ScheduleError> {
    match format {
        OutputFormat::Human => HumanReportGenerator::new(max_cycles).generate_report(outcomes),
        OutputFormat::Json => JsonReportGenerator::new().generate_report(outcomes),
        OutputFormat::Junit => JunitReportGenerator::new().generate_report(outcomes),
        OutputFormat::GitHub => GitHubReportGenerator::new().generate_report(outcomes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios;

    #[test]
    fn test_evaluate_without_progress() {
        let schedules = scenarios::matching(Some("single")).unwrap();
        let outcomes = evaluate_with_progress(&schedules, &Strategy::ALL, None);

        assert_eq!(outcomes.len(), 4);
        assert!(outcomes.iter().all(CheckOutcome::passed));
    }

    #[test]
    fn test_render_every_format() {
        let schedules = scenarios::matching(Some("two-node")).unwrap();
        let outcomes = evaluate_with_progress(&schedules, &Strategy::ALL, None);

        for format in [
            OutputFormat::Human,
            OutputFormat::Json,
            OutputFormat::Junit,
            OutputFormat::GitHub,
        ] {
            let report = render_report(format, None, &outcomes).unwrap();
            assert!(!report.is_empty(), "{format:?} report was empty");
        }
    }
}
