use std::collections::{HashMap, HashSet};

use super::CourseScheduler;
use crate::core::{Course, Prerequisite};

/// Direct prerequisites of every course that has at least one
type DependencyMap = HashMap<Course, Vec<Course>>;

/// Depth-first cycle detection with backtracking
///
/// Each course with prerequisites is expanded recursively while it sits on
/// the active path. Meeting a course that is already on the path means the
/// schedule contains a cycle. Once a course's whole subtree resolves without
/// a cycle its entry is dropped from the dependency map, so no other starting
/// point expands it again.
///
/// Recursion depth is bounded by the longest prerequisite chain, at most the
/// number of courses.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirst;

impl CourseScheduler for DepthFirst {
    fn name(&self) -> &'static str {
        "dfs"
    }

    fn can_finish(&self, _num_courses: usize, prerequisites: &[Prerequisite]) -> bool {
        let mut courses = DependencyMap::new();
        for pair in prerequisites {
            courses.entry(pair.course).or_default().push(pair.dependency);
        }

        // Roots already resolved from an earlier root are gone from the map,
        // and `visit` returns immediately for them
        let roots: Vec<Course> = courses.keys().copied().collect();
        let mut in_progress = HashSet::new();
        for course in roots {
            if !visit(&mut courses, course, &mut in_progress) {
                return false;
            }
        }

        debug_assert!(in_progress.is_empty());
        true
    }
}

/// Resolve `course` and everything it depends on
///
/// The map entry is taken out for as long as its subtree is explored. Any
/// re-entry into `course` during that time is caught by `in_progress` before
/// the map is consulted, and once the subtree succeeds the entry stays gone.
fn visit(courses: &mut DependencyMap, course: Course, in_progress: &mut HashSet<Course>) -> bool {
    if in_progress.contains(&course) {
        return false;
    }

    let Some(dependencies) = courses.remove(&course) else {
        return true;
    };

    in_progress.insert(course);
    for &dependency in &dependencies {
        if !visit(courses, dependency, in_progress) {
            return false;
        }
    }
    in_progress.remove(&course);

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prerequisites;

    fn can_finish<const N: usize>(num_courses: usize, pairs: [[Course; 2]; N]) -> bool {
        DepthFirst.can_finish(num_courses, &prerequisites(pairs))
    }

    #[test]
    fn test_no_prerequisites() {
        assert!(can_finish(1, []));
        assert!(can_finish(2000, []));
    }

    #[test]
    fn test_simple_chain() {
        assert!(can_finish(2, [[1, 0]]));
    }

    #[test]
    fn test_two_node_cycle() {
        assert!(!can_finish(2, [[1, 0], [0, 1]]));
    }

    #[test]
    fn test_self_loop() {
        assert!(!can_finish(1, [[0, 0]]));
    }

    #[test]
    fn test_shared_dependency_is_not_a_cycle() {
        // Course 3 reaches 4 twice, through 1 and through 2
        assert!(can_finish(5, [[1, 4], [2, 4], [3, 1], [3, 2]]));
    }

    #[test]
    fn test_cycle_behind_acyclic_branch() {
        assert!(!can_finish(3, [[1, 0], [2, 0], [0, 2]]));
        assert!(!can_finish(3, [[1, 0], [1, 2], [0, 1]]));
    }

    #[test]
    fn test_pruned_subtree_is_not_revisited_as_cycle() {
        // 0 is fully resolved via 1 before 2 reaches it again
        assert!(can_finish(4, [[1, 0], [2, 0], [3, 1], [3, 2], [2, 1]]));
    }

    #[test]
    fn test_visit_backtracks_and_prunes() {
        let mut courses = DependencyMap::new();
        courses.insert(2, vec![1]);
        courses.insert(1, vec![0]);
        let mut in_progress = HashSet::new();

        assert!(visit(&mut courses, 2, &mut in_progress));
        assert!(in_progress.is_empty());
        assert!(courses.is_empty());
    }

    #[test]
    fn test_visit_reports_course_on_active_path() {
        let mut courses = DependencyMap::new();
        let mut in_progress = HashSet::from([7]);

        assert!(!visit(&mut courses, 7, &mut in_progress));
    }

    #[test]
    fn test_roots_resolved_by_earlier_roots_are_skipped() {
        // Expanding course 5 resolves the whole chain
        let mut courses = DependencyMap::new();
        for course in 1..6 {
            courses.insert(course, vec![course - 1]);
        }
        let roots: Vec<Course> = courses.keys().copied().collect();
        let mut in_progress = HashSet::new();

        assert!(visit(&mut courses, 5, &mut in_progress));
        assert!(courses.is_empty());
        for course in roots {
            assert!(visit(&mut courses, course, &mut in_progress));
        }
        assert!(in_progress.is_empty());
    }

    #[test]
    fn test_long_chain_stays_within_stack() {
        let pairs: Vec<Prerequisite> = (1..2000).map(|c| Prerequisite::new(c, c - 1)).collect();
        assert!(DepthFirst.can_finish(2000, &pairs));

        let mut cyclic = pairs;
        cyclic.push(Prerequisite::new(0, 1999));
        assert!(!DepthFirst.can_finish(2000, &cyclic));
    }
}
