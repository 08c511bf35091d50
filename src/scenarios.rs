//! Built-in scenario battery
//!
//! Literal schedules with known answers. The `scenarios` command runs them
//! through each strategy and reports pass/fail with timings.

use crate::core::{Prerequisite, Schedule, prerequisites};
use crate::error::ScheduleError;
use crate::evaluation::NamedSchedule;

/// Course `i` depends on `i - 1` and `i - 2` up to course 98, and course 99
/// depends on 97 only
fn dense_triangular_chain() -> Vec<Prerequisite> {
    let mut pairs = vec![Prerequisite::new(1, 0)];
    for course in 2..=98 {
        pairs.push(Prerequisite::new(course, course - 2));
        pairs.push(Prerequisite::new(course, course - 1));
    }
    pairs.push(Prerequisite::new(99, 97));
    pairs
}

/// Every built-in scenario, in battery order
pub fn builtin() -> Result<Vec<NamedSchedule>, ScheduleError> {
    let scenarios = [
        ("simple-chain", 2, prerequisites([[1, 0]]), true),
        ("two-node-cycle", 2, prerequisites([[1, 0], [0, 1]]), false),
        (
            "shared-dependency",
            5,
            prerequisites([[1, 4], [2, 4], [3, 1], [3, 2]]),
            true,
        ),
        (
            "disjoint-chains",
            8,
            prerequisites([[1, 0], [2, 6], [1, 7], [6, 4], [7, 0], [0, 5]]),
            true,
        ),
        (
            "sparse-self-loop",
            20,
            prerequisites([
                [0, 10],
                [3, 18],
                [5, 5],
                [6, 11],
                [11, 14],
                [13, 1],
                [15, 1],
                [17, 4],
            ]),
            false,
        ),
        (
            "three-node-cycle",
            3,
            prerequisites([[1, 0], [2, 0], [0, 2]]),
            false,
        ),
        (
            "back-edge-cycle",
            3,
            prerequisites([[1, 0], [1, 2], [0, 1]]),
            false,
        ),
        ("dense-triangular-chain", 100, dense_triangular_chain(), true),
        ("single-course", 1, Vec::new(), true),
        ("single-self-loop", 1, prerequisites([[0, 0]]), false),
    ];

    scenarios
        .into_iter()
        .map(|(name, num_courses, pairs, expected)| {
            Ok(NamedSchedule::new(name, Schedule::new(num_courses, pairs)?)
                .with_expected(Some(expected)))
        })
        .collect()
}

/// Built-in scenarios whose name contains `filter`
pub fn matching(filter: Option<&str>) -> Result<Vec<NamedSchedule>, ScheduleError> {
    let mut scenarios = builtin()?;
    if let Some(filter) = filter {
        scenarios.retain(|scenario| scenario.name.contains(filter));
    }
    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Strategy;

    #[test]
    fn test_builtin_scenarios_are_valid() {
        let scenarios = builtin().unwrap();
        assert_eq!(scenarios.len(), 10);
        assert!(scenarios.iter().all(|s| s.expected.is_some()));
    }

    #[test]
    fn test_dense_chain_shape() {
        let pairs = dense_triangular_chain();
        assert_eq!(pairs.len(), 196);
        assert!(pairs.iter().all(|p| p.dependency < p.course));
    }

    #[test]
    fn test_every_strategy_meets_every_expectation() {
        for scenario in builtin().unwrap() {
            for strategy in Strategy::ALL {
                assert_eq!(
                    Some(scenario.schedule.can_finish_with(strategy)),
                    scenario.expected,
                    "{} with {strategy}",
                    scenario.name
                );
            }
        }
    }

    #[test]
    fn test_matching_filters_by_name() {
        let cycles = matching(Some("cycle")).unwrap();
        let names: Vec<_> = cycles.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["two-node-cycle", "three-node-cycle", "back-edge-cycle"]);

        assert_eq!(matching(None).unwrap().len(), 10);
        assert!(matching(Some("no-such-scenario")).unwrap().is_empty());
    }
}
