use crate::utils::date::format_day;
use chrono::{Local, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trip {
    pub id: i64,                       // ⇔ trips.id (assigned by SQLite, never changes)
    pub name: String,                  // ⇔ trips.name
    pub category: String,              // ⇔ trips.category
    pub start_date: Option<NaiveDate>, // ⇔ trips.start_date (TEXT "YYYY-MM-DD" or NULL)
    pub end_date: Option<NaiveDate>,   // ⇔ trips.end_date (TEXT "YYYY-MM-DD" or NULL)
    pub created_at: String,            // ⇔ trips.created_at (TEXT, ISO8601)
}

impl Trip {
    /// Build a trip that has not been stored yet.
    /// `id = 0` until `insert_trip` hands back the real one.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            category: category.into(),
            start_date,
            end_date,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn start_str(&self) -> Option<String> {
        self.start_date.map(|d| d.format("%Y-%m-%d").to_string())
    }

    pub fn end_str(&self) -> Option<String> {
        self.end_date.map(|d| d.format("%Y-%m-%d").to_string())
    }

    /// Dates in the given strftime pattern, "Not set" when missing.
    pub fn start_display(&self, fmt: &str) -> String {
        display_date(self.start_date, fmt)
    }

    pub fn end_display(&self, fmt: &str) -> String {
        display_date(self.end_date, fmt)
    }

    /// Inclusive length in days, only when both dates are present and ordered.
    pub fn duration_days(&self) -> Option<i64> {
        match (self.start_date, self.end_date) {
            (Some(s), Some(e)) if s <= e => Some((e - s).num_days() + 1),
            _ => None,
        }
    }
}

fn display_date(date: Option<NaiveDate>, fmt: &str) -> String {
    match date {
        Some(d) => format_day(d, fmt),
        None => "Not set".to_string(),
    }
}
