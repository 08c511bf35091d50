//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::error::ScheduleError;
use crate::evaluation::{CheckOutcome, Tally};

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, outcomes: &[CheckOutcome]) -> Result<String, ScheduleError> {
        let mut sorted: Vec<&CheckOutcome> = outcomes.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name).then(a.strategy.cmp(&b.strategy)));

        let schedules: Vec<_> = sorted
            .into_iter()
            .map(|outcome| {
                json!({
                    "name": outcome.name,
                    "source": outcome.source.as_ref().map(|p| p.display().to_string()),
                    "strategy": outcome.strategy,
                    "num_courses": outcome.num_courses,
                    "prerequisite_count": outcome.prerequisite_count,
                    "can_finish": outcome.can_finish,
                    "expected": outcome.expected,
                    "passed": outcome.passed(),
                    "elapsed_secs": outcome.elapsed.as_secs_f64(),
                    "cycles": outcome.cycles,
                })
            })
            .collect();

        let tally = Tally::of(outcomes);
        let report = json!({
            "all_finishable": tally.unfinishable == 0,
            "schedule_count": tally.schedules,
            "outcome_count": tally.total,
            "failures": tally.failed,
            "schedules": schedules,
        });

        serde_json::to_string_pretty(&report).map_err(ScheduleError::Json)
    }
}
