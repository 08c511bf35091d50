//! Small formatting helpers shared by reports and progress output

use std::time::Duration;

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Seconds with microsecond precision, as printed next to each outcome
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.6} sec", elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("schedule", 0), "schedules");
        assert_eq!(pluralize("schedule", 1), "schedule");
        assert_eq!(pluralize("cycle", 3), "cycles");
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_micros(1500)), "0.001500 sec");
        assert_eq!(format_elapsed(Duration::ZERO), "0.000000 sec");
    }
}
