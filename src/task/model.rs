//! Task data model

use chrono::NaiveDate;

use super::error::{Result, TaskError};

/// Due dates are entered and rendered as ISO calendar dates.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// A task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Task title, the lookup key for mark/remove operations.
    /// Titles are not required to be unique.
    pub title: String,

    /// Free-form description
    pub description: String,

    /// Due date
    pub due_date: NaiveDate,

    /// Whether the task is done
    pub completed: bool,
}

impl Task {
    /// Create a new pending task, parsing the due date from `YYYY-MM-DD`.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date_str: &str,
    ) -> Result<Self> {
        let due_date = parse_due_date(due_date_str)?;
        Ok(Self {
            title: title.into(),
            description: description.into(),
            due_date,
            completed: false,
        })
    }

    /// Due date formatted the same way it was entered
    pub fn due_date_display(&self) -> String {
        self.due_date.format(DUE_DATE_FORMAT).to_string()
    }
}

/// Parse an ISO `YYYY-MM-DD` string into a calendar date
pub fn parse_due_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DUE_DATE_FORMAT).map_err(|source| TaskError::InvalidDueDate {
        input: s.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_pending() -> Result<()> {
        let task = Task::new("Workout", "Morning run for 30 minutes", "2024-08-06")?;
        assert_eq!(task.title, "Workout");
        assert_eq!(task.description, "Morning run for 30 minutes");
        assert_eq!(task.due_date_display(), "2024-08-06");
        assert!(!task.completed);
        Ok(())
    }

    #[test]
    fn test_parse_due_date_valid() {
        let date = parse_due_date("2024-08-06").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 8, 6).unwrap());
    }

    #[test]
    fn test_parse_due_date_out_of_range() {
        let err = parse_due_date("2024-13-40").unwrap_err();
        assert!(matches!(err, TaskError::InvalidDueDate { .. }));
        assert!(err.to_string().contains("2024-13-40"));
    }

    #[test]
    fn test_parse_due_date_not_a_date() {
        assert!(parse_due_date("not-a-date").is_err());
        assert!(parse_due_date("").is_err());
        assert!(parse_due_date("2024-08-06T00:00:00").is_err());
    }
}
