//! Text formatting for timestamps and task listings.

use super::task::Task;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};

/// Default `strftime` pattern for task timestamps, e.g. `1/2/2024, 3:04:05 PM`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Shown in place of a timestamp that was never set.
pub const EMPTY_PLACEHOLDER: &str = "—";

pub fn format_timestamp(at: &DateTime<Local>, format: &str) -> String {
    at.format(format).to_string()
}

/// Whether `format` is a `strftime` pattern chrono can render.
pub fn is_valid_timestamp_format(format: &str) -> bool {
    !format.is_empty() && StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

/// Two-line listing entry for a task.
///
/// ```text
/// 1. buy milk (todo)
/// (created: 1/2/2024, 3:04:05 PM, last updated: —)
/// ```
pub fn format_task(task: &Task) -> String {
    format!(
        "{}. {} ({})\n(created: {}, last updated: {})",
        task.id,
        task.description,
        task.status,
        task.created_at,
        task.updated_at.as_deref().unwrap_or(EMPTY_PLACEHOLDER)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::task::Status;
    use chrono::TimeZone;

    #[test]
    fn default_format_matches_us_locale_string() {
        let at = Local.with_ymd_and_hms(2024, 1, 2, 15, 4, 5).unwrap();
        assert_eq!(format_timestamp(&at, DEFAULT_TIMESTAMP_FORMAT), "1/2/2024, 3:04:05 PM");
    }

    #[test]
    fn rejects_broken_patterns() {
        assert!(is_valid_timestamp_format(DEFAULT_TIMESTAMP_FORMAT));
        assert!(is_valid_timestamp_format("%Y-%m-%dT%H:%M:%S"));
        assert!(!is_valid_timestamp_format("%Q"));
        assert!(!is_valid_timestamp_format(""));
    }

    #[test]
    fn task_entry_uses_placeholder_until_updated() {
        let mut task = Task::new(3, "write report", "1/2/2024, 3:04:05 PM");
        task.status = Status::InProgress;
        assert_eq!(
            format_task(&task),
            "3. write report (in-progress)\n(created: 1/2/2024, 3:04:05 PM, last updated: —)"
        );

        task.updated_at = Some("1/3/2024, 8:00:00 AM".to_string());
        assert!(format_task(&task).ends_with("last updated: 1/3/2024, 8:00:00 AM)"));
    }
}
