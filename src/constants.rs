//! Configuration constants for course-schedule
//!
//! Input limits mirror the constraints of the course schedule problem; the
//! rest tune the command-line surface.

use std::time::Duration;

/// Input limits enforced by [`crate::core::Schedule::new`]
pub mod limits {
    /// Largest accepted number of courses
    pub const MAX_COURSES: usize = 2000;

    /// Largest accepted number of prerequisite pairs
    pub const MAX_PREREQUISITES: usize = 5000;
}

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames shown while schedules are discovered
    pub const SPINNER_FRAMES: &[&str] = &["📚 ", "📚·", "📚∙", "📚•", "📚●", "📚•", "📚∙", "📚·"];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default strategy selection when not specified
    pub const DEFAULT_STRATEGY: &str = "all";
}

/// Schedule file discovery
pub mod discovery {
    /// File name patterns treated as schedule files
    pub const DEFAULT_PATTERNS: &[&str] = &["*.toml", "*.json"];

    /// Directories never descended into
    pub const SKIPPED_DIRECTORIES: &[&str] = &["target", ".git", "node_modules"];
}
