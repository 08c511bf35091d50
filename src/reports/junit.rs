//! JUnit XML format report generation

use std::fmt::Write;

use super::ReportGenerator;
use crate::error::ScheduleError;
use crate::evaluation::{CheckOutcome, Tally};

pub struct JunitReportGenerator;

impl Default for JunitReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JunitReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl ReportGenerator for JunitReportGenerator {
    fn generate_report(&self, outcomes: &[CheckOutcome]) -> Result<String, ScheduleError> {
        let mut output = String::new();
        let failures = outcomes.iter().filter(|o| o.needs_attention()).count();
        let total = Tally::of(outcomes).total;

        writeln!(output, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            output,
            r#"<testsuites name="course-schedule" tests="{total}" failures="{failures}">"#
        )?;
        writeln!(
            output,
            r#"  <testsuite name="course-schedules" tests="{total}" failures="{failures}">"#
        )?;

        for outcome in outcomes {
            let name = escape(&outcome.name);
            let time = outcome.elapsed.as_secs_f64();
            let classname = format!("course-schedule.{}", outcome.strategy);

            if !outcome.needs_attention() {
                writeln!(
                    output,
                    r#"    <testcase name="{name}" classname="{classname}" time="{time:.6}" />"#
                )?;
                continue;
            }

            let message = match outcome.expected {
                Some(expected) => format!(
                    "Expected can_finish = {expected}, got {}",
                    outcome.can_finish
                ),
                None => "Schedule contains a prerequisite cycle".to_string(),
            };

            writeln!(
                output,
                r#"    <testcase name="{name}" classname="{classname}" time="{time:.6}">"#
            )?;
            writeln!(output, r#"      <failure message="{}">"#, escape(&message))?;
            for cycle in &outcome.cycles {
                let courses: Vec<String> = cycle.courses().iter().map(|c| c.to_string()).collect();
                writeln!(output, "Cycle: {}", courses.join(" → "))?;
            }
            writeln!(output, r#"      </failure>"#)?;
            writeln!(output, r#"    </testcase>"#)?;
        }

        writeln!(output, r#"  </testsuite>"#)?;
        writeln!(output, r#"</testsuites>"#)?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::fixtures;

    #[test]
    fn test_junit_report_counts() {
        let report = JunitReportGenerator::new()
            .generate_report(&fixtures::outcomes())
            .unwrap();

        assert!(report.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(report.contains(r#"<testsuites name="course-schedule" tests="3" failures="1">"#));
        assert!(report.contains(r#"name="simple-chain" classname="course-schedule.dfs""#));
        assert!(report.contains(r#"<failure message="Expected can_finish = true, got false">"#));
        assert!(report.contains("Cycle: 2"));
    }

    #[test]
    fn test_junit_report_empty() {
        let report = JunitReportGenerator::new().generate_report(&[]).unwrap();
        assert!(report.contains(r#"tests="0" failures="0""#));
        assert!(report.trim_end().ends_with("</testsuites>"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"a<b & "c">"#), "a&lt;b &amp; &quot;c&quot;&gt;");
    }
}
