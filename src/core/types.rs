//! Core type definitions
//!
//! This module contains the basic data structures used throughout the
//! application, with minimal logic - focusing on data representation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::limits::{MAX_COURSES, MAX_PREREQUISITES};
use crate::error::ScheduleError;
use crate::solver::Strategy;

/// Identifier of a course, in `0..num_courses`
pub type Course = usize;

/// A directed dependency: `course` can only be taken after `dependency`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[Course; 2]", into = "[Course; 2]")]
pub struct Prerequisite {
    pub course: Course,
    pub dependency: Course,
}

impl Prerequisite {
    pub const fn new(course: Course, dependency: Course) -> Self {
        Self { course, dependency }
    }
}

impl From<[Course; 2]> for Prerequisite {
    fn from([course, dependency]: [Course; 2]) -> Self {
        Self { course, dependency }
    }
}

impl From<(Course, Course)> for Prerequisite {
    fn from((course, dependency): (Course, Course)) -> Self {
        Self { course, dependency }
    }
}

impl From<Prerequisite> for [Course; 2] {
    fn from(pair: Prerequisite) -> Self {
        [pair.course, pair.dependency]
    }
}

impl fmt::Display for Prerequisite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.course, self.dependency)
    }
}

/// Collect literal `[course, dependency]` pairs into prerequisites
pub fn prerequisites<I, P>(pairs: I) -> Vec<Prerequisite>
where
    I: IntoIterator<Item = P>,
    P: Into<Prerequisite>,
{
    pairs.into_iter().map(Into::into).collect()
}

/// A validated course schedule
///
/// Holds the course count and every prerequisite pair, with all course ids
/// known to be in range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    num_courses: usize,
    prerequisites: Vec<Prerequisite>,
}

impl Schedule {
    /// Validate and build a schedule
    ///
    /// Fails when the course count is zero or above the supported maximum,
    /// when there are too many pairs, or when a pair names a course outside
    /// `0..num_courses`. Duplicate pairs are accepted.
    pub fn new(
        num_courses: usize,
        prerequisites: Vec<Prerequisite>,
    ) -> Result<Self, ScheduleError> {
        if num_courses == 0 || num_courses > MAX_COURSES {
            return Err(ScheduleError::InvalidCourseCount { num_courses });
        }

        if prerequisites.len() > MAX_PREREQUISITES {
            return Err(ScheduleError::TooManyPrerequisites {
                count: prerequisites.len(),
            });
        }

        for (index, pair) in prerequisites.iter().enumerate() {
            if let Some(course) = [pair.course, pair.dependency]
                .into_iter()
                .find(|&course| course >= num_courses)
            {
                return Err(ScheduleError::CourseOutOfRange {
                    index,
                    course,
                    num_courses,
                });
            }
        }

        Ok(Self {
            num_courses,
            prerequisites,
        })
    }

    pub fn num_courses(&self) -> usize {
        self.num_courses
    }

    pub fn prerequisites(&self) -> &[Prerequisite] {
        &self.prerequisites
    }

    /// Decide whether every course can be finished using `strategy`
    pub fn can_finish_with(&self, strategy: Strategy) -> bool {
        strategy.can_finish(self.num_courses, &self.prerequisites)
    }
}
