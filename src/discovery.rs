//! Locating and loading schedule files
//!
//! Paths given on the command line may be files or directories. Directories
//! are walked recursively and every file whose name matches one of the
//! configured glob patterns is loaded. Files are parsed in parallel.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use console::style;
use glob::Pattern;
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::constants::discovery::SKIPPED_DIRECTORIES;
use crate::error::ScheduleError;
use crate::evaluation::NamedSchedule;
use crate::progress::ProgressReporter;
use crate::schedule_file;

/// Everything discovery produced: loaded schedules and per-file failures
#[derive(Debug, Default)]
pub struct Discovered {
    pub schedules: Vec<NamedSchedule>,
    pub failures: Vec<(PathBuf, ScheduleError)>,
}

pub struct ScheduleDiscovery {
    patterns: Vec<Pattern>,
    found: BTreeSet<PathBuf>,
}

impl ScheduleDiscovery {
    /// Build a discovery pass matching file names against `patterns`
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, ScheduleError> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                Pattern::new(pattern.as_ref()).map_err(|e| ScheduleError::ConfigurationError {
                    message: format!("Invalid file pattern '{}': {e}", pattern.as_ref()),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            patterns,
            found: BTreeSet::new(),
        })
    }

    /// Collect schedule file paths under `paths`, sorted and deduplicated
    ///
    /// Missing paths are reported as warnings and skipped. A file named
    /// explicitly is taken even if it does not match the patterns.
    pub fn collect_paths(&mut self, paths: &[PathBuf]) -> Vec<PathBuf> {
        for path in paths {
            if !path.exists() {
                eprintln!(
                    "{} Path '{}' does not exist",
                    style("⚠").yellow(),
                    path.display()
                );
                continue;
            }

            if path.is_file() {
                self.found.insert(path.clone());
                continue;
            }

            self.walk(path);
        }

        self.found.iter().cloned().collect()
    }

    fn walk(&mut self, root: &Path) {
        let entries = WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0
                    || !e.file_type().is_dir()
                    || !SKIPPED_DIRECTORIES
                        .iter()
                        .any(|skipped| e.file_name() == *skipped)
            })
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file());

        for entry in entries {
            if self.matches(entry.path()) {
                self.found.insert(entry.into_path());
            }
        }
    }

    fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.patterns.iter().any(|pattern| pattern.matches(name))
    }

    /// Walk `paths` and load every schedule found
    pub fn discover(
        &mut self,
        paths: &[PathBuf],
        mut progress: Option<&mut ProgressReporter>,
    ) -> Discovered {
        if let Some(p) = progress.as_deref_mut() {
            p.start_discovery();
        }

        let files = self.collect_paths(paths);
        let reporter = progress.as_deref();

        let (schedules, failures): (Vec<_>, Vec<_>) = files
            .into_par_iter()
            .map(|path| {
                if let Some(p) = reporter {
                    p.reading_file(&path);
                }
                if !schedule_file::is_supported(&path) {
                    return Err((
                        path.clone(),
                        ScheduleError::UnsupportedFormat { path },
                    ));
                }
                schedule_file::load(&path).map_err(|e| (path, e))
            })
            .partition_map(|result| match result {
                Ok(v) => rayon::iter::Either::Left(v),
                Err(e) => rayon::iter::Either::Right(e),
            });

        if let Some(p) = progress {
            p.finish_discovery(schedules.len(), failures.len());
        }

        Discovered {
            schedules,
            failures,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::constants::discovery::DEFAULT_PATTERNS;

    fn write(root: &Path, relative: &str, content: &str) -> PathBuf {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_collects_matching_files_recursively() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let a = write(root, "a.toml", "num_courses = 1\n");
        let b = write(root, "nested/deeper/b.json", r#"{"num_courses": 1}"#);
        write(root, "notes.txt", "not a schedule");
        write(root, "target/skipped.toml", "num_courses = 1\n");
        write(root, ".git/skipped.json", "{}");

        let mut discovery = ScheduleDiscovery::new(DEFAULT_PATTERNS).unwrap();
        let paths = discovery.collect_paths(&[root.to_path_buf()]);

        assert_eq!(paths, vec![a, b]);
    }

    #[test]
    fn test_custom_pattern() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "plan.toml", "num_courses = 1\n");
        let wanted = write(root, "plan.schedule.toml", "num_courses = 1\n");

        let mut discovery = ScheduleDiscovery::new(["*.schedule.toml"].as_slice()).unwrap();
        assert_eq!(discovery.collect_paths(&[root.to_path_buf()]), vec![wanted]);
    }

    #[test]
    fn test_invalid_pattern_is_configuration_error() {
        let result = ScheduleDiscovery::new(["[unclosed"].as_slice());
        assert!(matches!(
            result,
            Err(ScheduleError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn test_missing_path_is_skipped() {
        let mut discovery = ScheduleDiscovery::new(DEFAULT_PATTERNS).unwrap();
        let paths = discovery.collect_paths(&[PathBuf::from("/no/such/schedules")]);
        assert!(paths.is_empty());
    }

    #[test]
    fn test_discover_separates_failures() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(
            root,
            "good.toml",
            "num_courses = 2\nprerequisites = [[1, 0]]\n",
        );
        let bad = write(root, "bad.json", r#"{"num_courses": 0}"#);

        let mut discovery = ScheduleDiscovery::new(DEFAULT_PATTERNS).unwrap();
        let discovered = discovery.discover(&[root.to_path_buf()], None);

        assert_eq!(discovered.schedules.len(), 1);
        assert_eq!(discovered.schedules[0].name, "good");
        assert_eq!(discovered.failures.len(), 1);
        assert_eq!(discovered.failures[0].0, bad);
        assert!(matches!(
            discovered.failures[0].1,
            ScheduleError::InvalidCourseCount { num_courses: 0 }
        ));
    }

    #[test]
    fn test_explicit_file_with_unsupported_extension_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(temp_dir.path(), "schedule.yaml", "num_courses: 1\n");

        let mut discovery = ScheduleDiscovery::new(DEFAULT_PATTERNS).unwrap();
        let discovered = discovery.discover(&[path], None);

        assert!(discovered.schedules.is_empty());
        assert!(matches!(
            discovered.failures[0].1,
            ScheduleError::UnsupportedFormat { .. }
        ));
    }
}
