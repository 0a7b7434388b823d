//! Pre-write check for a candidate trip.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// True when a trip may be written: non-empty name, a real category
/// (anything but `unselected`), and `start <= end`.
///
/// The name is compared as-is; whitespace-only names pass.
pub fn is_valid_submission(
    name: &str,
    category: &str,
    start: NaiveDate,
    end: NaiveDate,
    unselected: &str,
) -> bool {
    !name.is_empty() && category != unselected && start <= end
}

/// Fields collected by `add` / `edit` before they reach the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripDraft {
    pub name: String,
    pub category: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TripDraft {
    pub fn is_valid(&self, unselected: &str) -> bool {
        is_valid_submission(&self.name, &self.category, self.start, self.end, unselected)
    }

    /// Gate used before every store write.
    pub fn ensure_valid(&self, unselected: &str) -> AppResult<()> {
        if self.is_valid(unselected) {
            return Ok(());
        }
        Err(AppError::InvalidSubmission(
            self.rejection_reason(unselected)
                .unwrap_or_else(|| "invalid trip".into()),
        ))
    }

    /// Human-readable reason for a rejected draft. Only used for messages.
    pub fn rejection_reason(&self, unselected: &str) -> Option<String> {
        if self.name.is_empty() {
            Some("name must not be empty".into())
        } else if self.category == unselected {
            Some("choose a category".into())
        } else if self.start > self.end {
            Some(format!(
                "start date {} is after end date {}",
                self.start, self.end
            ))
        } else {
            None
        }
    }
}
