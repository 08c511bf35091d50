//! Cycle witnesses for unfinishable schedules
//!
//! The solvers only answer yes or no. When the answer is no, reports name the
//! courses responsible: every strongly connected group of courses, plus any
//! course that lists itself as a prerequisite.

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;

use crate::core::{Course, Schedule};

/// A set of courses that depend on each other and can never be started
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseCycle {
    courses: Vec<Course>,
}

impl CourseCycle {
    /// Courses in the cycle, ascending
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn is_self_loop(&self) -> bool {
        self.courses.len() == 1
    }
}

/// Find every cycle in the prerequisite graph of `schedule`
///
/// Cycles are returned sorted by their smallest course id. An acyclic
/// schedule yields an empty list.
pub fn find_cycles(schedule: &Schedule) -> Vec<CourseCycle> {
    let graph = prerequisite_graph(schedule);

    let mut cycles: Vec<CourseCycle> = tarjan_scc(&graph)
        .into_iter()
        .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
        .map(|scc| {
            let mut courses: Vec<Course> = scc.iter().map(|&idx| graph[idx]).collect();
            courses.sort_unstable();
            CourseCycle { courses }
        })
        .collect();

    cycles.sort_by_key(|cycle| cycle.courses[0]);
    cycles
}

fn prerequisite_graph(schedule: &Schedule) -> DiGraph<Course, ()> {
    let mut graph = DiGraph::with_capacity(schedule.num_courses(), schedule.prerequisites().len());
    let nodes: Vec<NodeIndex> = (0..schedule.num_courses())
        .map(|course| graph.add_node(course))
        .collect();

    for pair in schedule.prerequisites() {
        graph.update_edge(nodes[pair.course], nodes[pair.dependency], ());
    }

    graph
}
