use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used on disk and on the command line
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single actionable item inside a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// What needs doing
    pub text: String,
    /// Optional due date (stored as `""` when absent)
    #[serde(default, with = "blank_date")]
    pub date: Option<NaiveDate>,
    /// Subject typed when the task was added; names the list for folder-level adds
    #[serde(default)]
    pub subject: String,
    /// Optional URL (stored as `""` when absent)
    #[serde(default, with = "blank_string")]
    pub link: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a new, not yet completed task
    pub fn new(text: String, date: Option<NaiveDate>, subject: String, link: Option<String>) -> Self {
        Task {
            text,
            date,
            subject,
            link,
            completed: false,
        }
    }
}

/// Parse a `YYYY-MM-DD` date, treating blank input as "no date".
pub fn parse_date(s: &str) -> Result<Option<NaiveDate>, chrono::ParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map(Some)
}

/// `Option<NaiveDate>` <-> `"YYYY-MM-DD"` / `""`. `null` also reads as `None`.
/// An unreadable date reads as `None` so one bad task cannot sink the document.
mod blank_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => s.serialize_str(&d.format(super::DATE_FORMAT).to_string()),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        match raw {
            None => Ok(None),
            Some(s) => match super::parse_date(&s) {
                Ok(date) => Ok(date),
                Err(e) => {
                    tracing::warn!(date = %s, error = %e, "ignoring unreadable task date");
                    Ok(None)
                }
            },
        }
    }
}

/// `Option<String>` <-> `"..."` / `""`. `null` also reads as `None`.
/// Any non-empty value, whitespace included, is kept as stored.
mod blank_string {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        Ok(raw.filter(|s| !s.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_is_not_completed() {
        let task = Task::new("Buy milk".into(), None, "Groceries".into(), None);
        assert!(!task.completed);
        assert_eq!(task.subject, "Groceries");
    }

    #[test]
    fn absent_date_and_link_serialize_as_empty_strings() {
        let task = Task::new("Buy milk".into(), None, "Groceries".into(), None);
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(
            json,
            r#"{"text":"Buy milk","date":"","subject":"Groceries","link":"","completed":false}"#
        );
    }

    #[test]
    fn reads_browser_layout() {
        let task: Task = serde_json::from_str(
            r#"{"text":"Essay","date":"2025-03-14","subject":"English","link":"https://example.com","completed":true}"#,
        )
        .unwrap();
        assert_eq!(task.date, NaiveDate::from_ymd_opt(2025, 3, 14));
        assert_eq!(task.link.as_deref(), Some("https://example.com"));
        assert!(task.completed);
    }

    #[test]
    fn blank_and_null_fields_read_as_none() {
        let task: Task =
            serde_json::from_str(r#"{"text":"x","date":"","link":null}"#).unwrap();
        assert_eq!(task.date, None);
        assert_eq!(task.link, None);
        assert_eq!(task.subject, "");
        assert!(!task.completed);
    }

    #[test]
    fn malformed_date_reads_as_none() {
        let task: Task =
            serde_json::from_str(r#"{"text":"x","date":"2025-13-40","completed":true}"#).unwrap();
        assert_eq!(task.date, None);
        assert_eq!(task.text, "x");
        assert!(task.completed);
    }

    #[test]
    fn whitespace_link_is_kept() {
        let task: Task = serde_json::from_str(r#"{"text":"x","link":"  "}"#).unwrap();
        assert_eq!(task.link.as_deref(), Some("  "));
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains(r#""link":"  ""#));
    }

    #[test]
    fn parse_date_blank_and_valid() {
        assert_eq!(parse_date("  ").unwrap(), None);
        assert_eq!(
            parse_date("2025-01-02").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 2)
        );
        assert!(parse_date("02/01/2025").is_err());
    }
}
