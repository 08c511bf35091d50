use std::collections::VecDeque;

use super::CourseScheduler;
use crate::core::{Course, Prerequisite};

/// Cycle detection with Kahn's topological sort
///
/// Edges run from a prerequisite to the courses that depend on it. Courses
/// with no outstanding prerequisites are removed first; removing a course
/// lowers the in-degree of its dependents, which join the queue once they
/// reach zero. Courses caught in a cycle never reach zero, so the schedule is
/// finishable iff every course is eventually queued.
///
/// # Panics
///
/// Panics if a pair names a course `>= num_courses`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopologicalSort;

impl CourseScheduler for TopologicalSort {
    fn name(&self) -> &'static str {
        "kahn"
    }

    fn can_finish(&self, num_courses: usize, prerequisites: &[Prerequisite]) -> bool {
        let mut dependents: Vec<Vec<Course>> = vec![Vec::new(); num_courses];
        let mut in_degrees = vec![0usize; num_courses];
        for pair in prerequisites {
            dependents[pair.dependency].push(pair.course);
            in_degrees[pair.course] += 1;
        }

        let mut queue: VecDeque<Course> = (0..num_courses)
            .filter(|&course| in_degrees[course] == 0)
            .collect();
        let mut queued = queue.len();

        while let Some(course) = queue.pop_front() {
            for &dependent in &dependents[course] {
                in_degrees[dependent] -= 1;
                if in_degrees[dependent] == 0 {
                    queue.push_back(dependent);
                    queued += 1;
                }
            }
        }

        queued == num_courses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prerequisites;

    fn can_finish<const N: usize>(num_courses: usize, pairs: [[Course; 2]; N]) -> bool {
        TopologicalSort.can_finish(num_courses, &prerequisites(pairs))
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
    fn test_self_loop_never_reaches_zero() {
        assert!(!can_finish(1, [[0, 0]]));
        assert!(!can_finish(3, [[1, 0], [2, 2]]));
    }

    #[test]
    fn test_shared_dependency_is_not_a_cycle() {
        assert!(can_finish(5, [[1, 4], [2, 4], [3, 1], [3, 2]]));
    }

    #[test]
    fn test_cycle_downstream_of_free_course() {
        assert!(!can_finish(3, [[1, 0], [2, 0], [0, 2]]));
        assert!(!can_finish(4, [[1, 0], [2, 1], [3, 2], [2, 3]]));
    }

    #[test]
    fn test_no_free_course_at_all() {
        assert!(!can_finish(3, [[0, 1], [1, 2], [2, 0]]));
    }

    #[test]
    fn test_long_chain() {
        let pairs: Vec<Prerequisite> = (1..2000).map(|c| Prerequisite::new(c, c - 1)).collect();
        assert!(TopologicalSort.can_finish(2000, &pairs));
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_course_panics() {
        can_finish(2, [[2, 0]]);
    }
}
