use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use std::fmt::Write;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Render `d` with a user-supplied strftime pattern. A pattern chrono
/// cannot render falls back to ISO `YYYY-MM-DD`.
pub fn format_day(d: NaiveDate, fmt: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", d.format(fmt)) {
        Ok(()) => out,
        Err(_) => d.format("%Y-%m-%d").to_string(),
    }
}

/// Parse an optional CLI date, falling back to today.
pub fn parse_or_today(s: Option<&String>) -> AppResult<NaiveDate> {
    match s {
        Some(raw) => parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.clone())),
        None => Ok(today()),
    }
}

/// Parse an optional CLI date, keeping `None` as `None`.
pub fn parse_optional(s: Option<&String>) -> AppResult<Option<NaiveDate>> {
    s.map(|raw| parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.clone())))
        .transpose()
}
