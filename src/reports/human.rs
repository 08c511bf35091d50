//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::error::ScheduleError;
use crate::evaluation::{CheckOutcome, Tally};
use crate::utils::{format_elapsed, pluralize};

pub struct HumanReportGenerator {
    max_cycles: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_cycles: Option<usize>) -> Self {
        Self { max_cycles }
    }

    fn verdict(can_finish: bool) -> &'static str {
        if can_finish {
            "can finish"
        } else {
            "cannot finish"
        }
    }

    fn write_outcome(&self, output: &mut String, outcome: &CheckOutcome) -> std::fmt::Result {
        let marker = if outcome.passed() {
            style("✓").green().bold()
        } else {
            style("✗").red().bold()
        };
        let verdict = if outcome.can_finish {
            style(Self::verdict(true)).green()
        } else {
            style(Self::verdict(false)).red()
        };

        write!(
            output,
            "  {} {} {} {} {}, {} {}: {}",
            marker,
            style(&outcome.name).bold(),
            style(format!("[{}]", outcome.strategy)).cyan(),
            outcome.num_courses,
            pluralize("course", outcome.num_courses),
            outcome.prerequisite_count,
            pluralize("prerequisite", outcome.prerequisite_count),
            verdict,
        )?;

        if let Some(expected) = outcome.expected
            && expected != outcome.can_finish
        {
            write!(
                output,
                " {}",
                style(format!("(expected: {})", Self::verdict(expected))).yellow()
            )?;
        }

        writeln!(
            output,
            " {}",
            style(format!("({})", format_elapsed(outcome.elapsed))).dim()
        )?;

        let cycles_to_show = self.max_cycles.unwrap_or(usize::MAX);
        for cycle in outcome.cycles.iter().take(cycles_to_show) {
            let courses: Vec<String> = cycle.courses().iter().map(|c| c.to_string()).collect();
            if cycle.is_self_loop() {
                writeln!(
                    output,
                    "      {} course {} requires itself",
                    style("🔄").yellow(),
                    style(&courses[0]).yellow()
                )?;
            } else {
                writeln!(
                    output,
                    "      {} cycle between courses {}",
                    style("🔄").yellow(),
                    style(courses.join(", ")).yellow()
                )?;
            }
        }

        let hidden = outcome.cycles.len().saturating_sub(cycles_to_show);
        if hidden > 0 {
            writeln!(
                output,
                "      {} {} more {} hidden. Use --max-cycles to see more.",
                style("ℹ️").blue(),
                style(hidden).yellow(),
                pluralize("cycle", hidden)
            )?;
        }

        Ok(())
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, outcomes: &[CheckOutcome]) -> Result<String, ScheduleError> {
        let mut output = String::new();

        if outcomes.is_empty() {
            writeln!(
                output,
                "\n{} No schedules were evaluated.",
                style("ℹ").blue()
            )?;
            return Ok(output);
        }

        writeln!(output, "\n{} Course schedule results:\n", style("📚").cyan())?;
        for outcome in outcomes {
            self.write_outcome(&mut output, outcome)?;
        }

        let tally = Tally::of(outcomes);
        writeln!(output)?;
        if tally.failed == 0 {
            writeln!(
                output,
                "{} {} of {} {} passed",
                style("✅").green().bold(),
                style(tally.passed).green().bold(),
                tally.total,
                pluralize("outcome", tally.total)
            )?;
        } else {
            writeln!(
                output,
                "{} {} of {} {} failed",
                style("❌").red().bold(),
                style(tally.failed).red().bold(),
                tally.total,
                pluralize("outcome", tally.total)
            )?;
        }

        if tally.unfinishable > 0 {
            writeln!(
                output,
                "\n{} A schedule with a cycle can be fixed by dropping at least one \
                 prerequisite from each reported cycle.",
                style("💡").yellow()
            )?;
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use predicates::prelude::*;

    use super::*;
    use crate::reports::fixtures;

    fn plain(report: &str) -> String {
        console::strip_ansi_codes(report).to_string()
    }

    #[test]
    fn test_empty_report() {
        let report = HumanReportGenerator::new(None).generate_report(&[]).unwrap();
        assert!(plain(&report).contains("No schedules were evaluated."));
    }

    #[test]
    fn test_outcome_lines() {
        let report = HumanReportGenerator::new(None)
            .generate_report(&fixtures::outcomes())
            .unwrap();
        let report = plain(&report);

        assert!(
            predicate::str::contains("✓ simple-chain [dfs] 2 courses, 1 prerequisite: can finish")
                .eval(&report)
        );
        assert!(
            predicate::str::contains("✓ two-node-cycle [kahn] 2 courses, 2 prerequisites: cannot finish")
                .eval(&report)
        );
        assert!(
            predicate::str::contains("✗ self-loop [dfs] 3 courses, 2 prerequisites: cannot finish (expected: can finish)")
                .eval(&report)
        );
        assert!(predicate::str::contains("cycle between courses 0, 1").eval(&report));
        assert!(predicate::str::contains("course 2 requires itself").eval(&report));
        assert!(predicate::str::contains("1 of 3 outcomes failed").eval(&report));
    }

    #[test]
    fn test_max_cycles_hides_extra_cycles() {
        let report = HumanReportGenerator::new(Some(0))
            .generate_report(&fixtures::outcomes())
            .unwrap();
        let report = plain(&report);

        assert!(!report.contains("cycle between courses"));
        assert!(report.contains("1 more cycle hidden"));
    }

    #[test]
    fn test_all_passed_summary() {
        let outcomes = fixtures::outcomes();
        let report = HumanReportGenerator::new(None).generate_report(&outcomes[..2]).unwrap();

        assert!(plain(&report).contains("2 of 2 outcomes passed"));
    }
}
