use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse an optional `YYYY-MM-DD` bound. `-` or an empty string means unset.
pub fn parse_optional_date(input: &str) -> AppResult<Option<NaiveDate>> {
    let s = input.trim();
    if s.is_empty() || s == "-" {
        return Ok(None);
    }
    parse_date(s)
        .map(Some)
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// clap value parser for `--from` / `--to`.
pub fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).ok_or_else(|| format!("invalid date '{s}', expected YYYY-MM-DD"))
}

pub fn format_iso(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}
