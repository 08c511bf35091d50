//! Timed evaluation of schedules
//!
//! Every report is built from [`CheckOutcome`]s: one strategy's answer for one
//! named schedule, with the wall-clock time the call took.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::analysis::{CourseCycle, find_cycles};
use crate::core::Schedule;
use crate::solver::Strategy;

/// A schedule together with where it came from and what it should yield
#[derive(Debug, Clone)]
pub struct NamedSchedule {
    pub name: String,
    pub schedule: Schedule,
    pub expected: Option<bool>,
    pub source: Option<PathBuf>,
}

impl NamedSchedule {
    pub fn new(name: impl Into<String>, schedule: Schedule) -> Self {
        Self {
            name: name.into(),
            schedule,
            expected: None,
            source: None,
        }
    }

    pub fn with_expected(mut self, expected: Option<bool>) -> Self {
        self.expected = expected;
        self
    }

    pub fn with_source(mut self, source: PathBuf) -> Self {
        self.source = Some(source);
        self
    }
}

/// The result of running one strategy on one schedule
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub name: String,
    pub source: Option<PathBuf>,
    pub strategy: Strategy,
    pub num_courses: usize,
    pub prerequisite_count: usize,
    pub can_finish: bool,
    pub expected: Option<bool>,
    pub elapsed: Duration,
    pub cycles: Vec<CourseCycle>,
}

impl CheckOutcome {
    /// No expectation, or the expectation was met
    pub fn passed(&self) -> bool {
        self.expected.is_none_or(|expected| expected == self.can_finish)
    }

    /// A failed expectation, or a cycle nobody said to expect
    pub fn needs_attention(&self) -> bool {
        match self.expected {
            Some(_) => !self.passed(),
            None => !self.can_finish,
        }
    }
}

/// Summary counts over a set of outcomes
///
/// `total` counts outcomes, one per schedule and strategy. `schedules`
/// counts distinct schedules, identified by name and source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub schedules: usize,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub unfinishable: usize,
}

impl Tally {
    pub fn of(outcomes: &[CheckOutcome]) -> Self {
        let schedules: BTreeSet<(&str, Option<&Path>)> = outcomes
            .iter()
            .map(|outcome| (outcome.name.as_str(), outcome.source.as_deref()))
            .collect();
        let tally = Self {
            schedules: schedules.len(),
            ..Self::default()
        };

        outcomes.iter().fold(tally, |mut tally, outcome| {
            tally.total += 1;
            if outcome.passed() {
                tally.passed += 1;
            } else {
                tally.failed += 1;
            }
            if !outcome.can_finish {
                tally.unfinishable += 1;
            }
            tally
        })
    }
}

/// Run `strategy` on `named`, timing only the solver call
pub fn evaluate(named: &NamedSchedule, strategy: Strategy) -> CheckOutcome {
    let started = Instant::now();
    let can_finish = named.schedule.can_finish_with(strategy);
    let elapsed = started.elapsed();

    let cycles = if can_finish {
        Vec::new()
    } else {
        find_cycles(&named.schedule)
    };

    CheckOutcome {
        name: named.name.clone(),
        source: named.source.clone(),
        strategy,
        num_courses: named.schedule.num_courses(),
        prerequisite_count: named.schedule.prerequisites().len(),
        can_finish,
        expected: named.expected,
        elapsed,
        cycles,
    }
}

/// Evaluate every schedule with every strategy in parallel
///
/// `on_done` is called once per finished outcome, from worker threads.
/// Outcomes come back sorted by name, then strategy.
pub fn evaluate_all<F>(
    schedules: &[NamedSchedule],
    strategies: &[Strategy],
    on_done: F,
) -> Vec<CheckOutcome>
where
    F: Fn(&CheckOutcome) + Sync,
{
    let mut outcomes: Vec<CheckOutcome> = schedules
        .par_iter()
        .flat_map_iter(|named| strategies.iter().map(move |&strategy| (named, strategy)))
        .map(|(named, strategy)| {
            let outcome = evaluate(named, strategy);
            on_done(&outcome);
            outcome
        })
        .collect();

    outcomes.sort_by(|a, b| a.name.cmp(&b.name).then(a.strategy.cmp(&b.strategy)));
    outcomes
}
