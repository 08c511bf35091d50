//! GitHub Actions format report generation

use std::fmt::Write;

use super::ReportGenerator;
use crate::error::ScheduleError;
use crate::evaluation::{CheckOutcome, Tally};
use crate::utils::pluralize;

pub struct GitHubReportGenerator;

impl Default for GitHubReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

/// Escape the message part of a workflow command
fn escape_data(text: &str) -> String {
    text.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a `key=value` property of a workflow command
fn escape_property(text: &str) -> String {
    escape_data(text).replace(':', "%3A").replace(',', "%2C")
}

impl ReportGenerator for GitHubReportGenerator {
    fn generate_report(&self, outcomes: &[CheckOutcome]) -> Result<String, ScheduleError> {
        let mut output = String::new();
        let flagged: Vec<&CheckOutcome> =
            outcomes.iter().filter(|o| o.needs_attention()).collect();

        if flagged.is_empty() {
            let tally = Tally::of(outcomes);
            writeln!(
                output,
                "::notice title=Course Schedule::All {} {} passed ✅",
                tally.total,
                pluralize("schedule check", tally.total)
            )?;
            return Ok(output);
        }

        writeln!(
            output,
            "::error title=Course Schedule::{} {} flagged",
            flagged.len(),
            pluralize("schedule check", flagged.len())
        )?;

        for outcome in flagged {
            let detail = match outcome.expected {
                Some(expected) => format!(
                    "expected can_finish = {expected}, got {}",
                    outcome.can_finish
                ),
                None => "cannot be finished".to_string(),
            };
            let title = escape_property(&format!("{} [{}]", outcome.name, outcome.strategy));
            match &outcome.source {
                Some(source) => writeln!(
                    output,
                    "::warning file={},title={}::{}",
                    escape_property(&source.display().to_string()),
                    title,
                    escape_data(&detail)
                )?,
                None => writeln!(output, "::warning title={}::{}", title, escape_data(&detail))?,
            }

            for cycle in &outcome.cycles {
                let courses: Vec<String> = cycle.courses().iter().map(|c| c.to_string()).collect();
                writeln!(output, "::notice::  cycle: {}", courses.join(" → "))?;
            }
        }

        Ok(output)
    }
}
