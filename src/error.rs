use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in schedule '{file}'")]
#[diagnostic(
    code(course_schedule::toml_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct TomlParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum ScheduleError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(course_schedule::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    TomlParseError(Box<TomlParseError>),

    #[error("Invalid JSON in schedule '{file}' at line {line}, column {column}")]
    #[diagnostic(
        code(course_schedule::json_parse_error),
        help("A schedule needs `num_courses` and a `prerequisites` list of [course, dependency] pairs")
    )]
    JsonParseError {
        file: String,
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported schedule format for '{path}'")]
    #[diagnostic(
        code(course_schedule::unsupported_format),
        help("Schedule files must end in .toml or .json")
    )]
    UnsupportedFormat { path: PathBuf },

    #[error("Invalid course count: {num_courses}")]
    #[diagnostic(
        code(course_schedule::invalid_course_count),
        help("The number of courses must be between 1 and 2000")
    )]
    InvalidCourseCount { num_courses: usize },

    #[error("Too many prerequisites: {count}")]
    #[diagnostic(
        code(course_schedule::too_many_prerequisites),
        help("At most 5000 prerequisite pairs are supported")
    )]
    TooManyPrerequisites { count: usize },

    #[error("Prerequisite #{index} references course {course}, but only {num_courses} courses exist")]
    #[diagnostic(
        code(course_schedule::course_out_of_range),
        help("Course ids are numbered from 0 to num_courses - 1")
    )]
    CourseOutOfRange {
        index: usize,
        course: usize,
        num_courses: usize,
    },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(course_schedule::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(course_schedule::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(course_schedule::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::NamedSource;

    use super::*;

    #[test]
    fn test_toml_parse_error_display() {
        let source_code = "num_courses = = 2";
        let toml_err = toml::from_str::<toml::Value>(source_code).unwrap_err();

        let error = TomlParseError {
            file: "cycle.toml".to_string(),
            source_code: NamedSource::new("cycle.toml", source_code.to_string()),
            span: Some((14, 1).into()),
            source: toml_err,
        };

        assert_eq!(
            error.to_string(),
            "Invalid TOML syntax in schedule 'cycle.toml'"
        );
    }

    #[test]
    fn test_course_out_of_range_message() {
        let error = ScheduleError::CourseOutOfRange {
            index: 3,
            course: 7,
            num_courses: 5,
        };

        assert_eq!(
            error.to_string(),
            "Prerequisite #3 references course 7, but only 5 courses exist"
        );
    }

    #[test]
    fn test_invalid_course_count_message() {
        let error = ScheduleError::InvalidCourseCount { num_courses: 0 };
        assert_eq!(error.to_string(), "Invalid course count: 0");
    }

    #[test]
    fn test_configuration_error() {
        let error = ScheduleError::ConfigurationError {
            message: "Missing required field: strategies".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Configuration error: Missing required field: strategies"
        );
    }

    #[test]
    fn test_error_codes() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let file_err = ScheduleError::FileReadError {
            path: PathBuf::from("schedule.toml"),
            source: io_err,
        };

        use miette::Diagnostic;
        assert!(file_err.code().is_some());
        assert!(file_err.help().is_some());
    }

    #[test]
    fn test_error_conversion_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let err: ScheduleError = json_err.into();

        match err {
            ScheduleError::Json(_) => {}
            _ => panic!("Expected Json variant"),
        }
    }
}
