use std::path::Path;

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;

use crate::core::{Prerequisite, Schedule};
use crate::error::ScheduleError;
use crate::evaluation::NamedSchedule;

/// On-disk representation of a schedule, in TOML or JSON
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleFile {
    pub name: Option<String>,
    pub num_courses: usize,
    #[serde(default)]
    pub prerequisites: Vec<Prerequisite>,
    pub expected: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Toml,
    Json,
}

impl FileFormat {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl ScheduleFile {
    pub fn parse_file(path: &Path) -> Result<Self, ScheduleError> {
        let format = FileFormat::from_path(path).ok_or_else(|| ScheduleError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

        let content =
            std::fs::read_to_string(path).map_err(|e| ScheduleError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Self::parse_str(&content, format, &path.display().to_string())
    }

    fn parse_str(content: &str, format: FileFormat, file: &str) -> Result<Self, ScheduleError> {
        match format {
            FileFormat::Toml => toml::from_str(content).map_err(|e| {
                let span = e
                    .span()
                    .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

                ScheduleError::TomlParseError(Box::new(crate::error::TomlParseError {
                    file: file.to_string(),
                    source_code: NamedSource::new(file, content.to_string()),
                    span,
                    source: e,
                }))
            }),
            FileFormat::Json => {
                serde_json::from_str(content).map_err(|e| ScheduleError::JsonParseError {
                    file: file.to_string(),
                    line: e.line(),
                    column: e.column(),
                    source: e,
                })
            }
        }
    }

    /// Validate into a schedule named after the file when no name is given
    pub fn into_named(self, path: &Path) -> Result<NamedSchedule, ScheduleError> {
        let name = self.name.unwrap_or_else(|| {
            path.file_stem()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string()
        });
        let schedule = Schedule::new(self.num_courses, self.prerequisites)?;

        Ok(NamedSchedule::new(name, schedule)
            .with_expected(self.expected)
            .with_source(path.to_path_buf()))
    }
}

/// Parse and validate a schedule file in one step
pub fn load(path: &Path) -> Result<NamedSchedule, ScheduleError> {
    ScheduleFile::parse_file(path)?.into_named(path)
}

/// True when `path` has an extension this module can read
pub fn is_supported(path: &Path) -> bool {
    FileFormat::from_path(path).is_some()
}
