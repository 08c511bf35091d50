//! # Course Scheduling Strategies
//!
//! This module decides whether every course in a schedule can be finished,
//! which is the same as asking whether the prerequisite graph is acyclic.
//!
//! ## Algorithms
//!
//! Two independent strategies implement the [`CourseScheduler`] contract and
//! always agree on the answer:
//!
//! - **DepthFirst**: recursive depth-first search that tracks the courses on
//!   the active path and prunes every subtree it has fully resolved. Work is
//!   bounded by the number of prerequisite pairs.
//! - **TopologicalSort**: Kahn's algorithm. Courses whose in-degree drops to
//!   zero are removed one by one; the schedule is finishable iff every course
//!   is removed. O(V + E) time, preferred for large inputs.
//!
//! ## Example
//!
//! ```
//! use course_schedule::core::prerequisites;
//! use course_schedule::solver::{CourseScheduler, DepthFirst, Strategy, TopologicalSort};
//!
//! // Course 1 needs course 0, and course 0 needs course 1
//! let pairs = prerequisites([[1, 0], [0, 1]]);
//!
//! assert!(!DepthFirst.can_finish(2, &pairs));
//! assert!(!TopologicalSort.can_finish(2, &pairs));
//!
//! for strategy in Strategy::ALL {
//!     assert!(strategy.can_finish(2, &pairs[..1]));
//! }
//! ```

mod depth_first;
mod topological;

use std::fmt;

pub use depth_first::DepthFirst;
use serde::Serialize;
pub use topological::TopologicalSort;

use crate::core::Prerequisite;

/// Common contract for every course scheduling strategy
pub trait CourseScheduler {
    /// Short name used in reports
    fn name(&self) -> &'static str;

    /// Return `true` iff all `num_courses` courses can be finished
    ///
    /// Every course id in `prerequisites` must be below `num_courses`; use
    /// [`crate::core::Schedule`] to validate untrusted input first.
    fn can_finish(&self, num_courses: usize, prerequisites: &[Prerequisite]) -> bool;
}

/// Statically dispatched strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Strategy {
    #[serde(rename = "dfs")]
    DepthFirst,
    #[serde(rename = "kahn")]
    TopologicalSort,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::DepthFirst, Strategy::TopologicalSort];

    pub fn name(self) -> &'static str {
        match self {
            Self::DepthFirst => DepthFirst.name(),
            Self::TopologicalSort => TopologicalSort.name(),
        }
    }

    pub fn can_finish(self, num_courses: usize, prerequisites: &[Prerequisite]) -> bool {
        match self {
            Self::DepthFirst => DepthFirst.can_finish(num_courses, prerequisites),
            Self::TopologicalSort => TopologicalSort.can_finish(num_courses, prerequisites),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
