use chrono::{Days, NaiveDate};
use serde::Serialize;

/// Derived due-date status of a task relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DueStatus {
    Overdue,
    DueToday,
    DueTomorrow,
}

impl DueStatus {
    pub fn label(self) -> &'static str {
        match self {
            DueStatus::Overdue => "Overdue",
            DueStatus::DueToday => "Due Today",
            DueStatus::DueTomorrow => "Due Tomorrow",
        }
    }
}

/// Compare calendar days only. Anything after tomorrow gets no status.
pub fn due_status(date: NaiveDate, today: NaiveDate) -> Option<DueStatus> {
    if date < today {
        Some(DueStatus::Overdue)
    } else if date == today {
        Some(DueStatus::DueToday)
    } else if today.checked_add_days(Days::new(1)) == Some(date) {
        Some(DueStatus::DueTomorrow)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn status_by_day() {
        let today = d(2025, 3, 10);
        assert_eq!(due_status(d(2025, 3, 9), today), Some(DueStatus::Overdue));
        assert_eq!(due_status(d(2024, 12, 1), today), Some(DueStatus::Overdue));
        assert_eq!(due_status(d(2025, 3, 10), today), Some(DueStatus::DueToday));
        assert_eq!(
            due_status(d(2025, 3, 11), today),
            Some(DueStatus::DueTomorrow)
        );
        assert_eq!(due_status(d(2025, 3, 12), today), None);
    }

    #[test]
    fn due_today_becomes_overdue_next_day() {
        let date = d(2025, 12, 31);
        assert_eq!(due_status(date, d(2025, 12, 31)), Some(DueStatus::DueToday));
        assert_eq!(due_status(date, d(2026, 1, 1)), Some(DueStatus::Overdue));
    }

    #[test]
    fn tomorrow_across_month_end() {
        assert_eq!(
            due_status(d(2024, 3, 1), d(2024, 2, 29)),
            Some(DueStatus::DueTomorrow)
        );
    }

    #[test]
    fn labels() {
        assert_eq!(DueStatus::Overdue.label(), "Overdue");
        assert_eq!(DueStatus::DueToday.label(), "Due Today");
        assert_eq!(DueStatus::DueTomorrow.label(), "Due Tomorrow");
    }
}
