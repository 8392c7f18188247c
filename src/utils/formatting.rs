//! Formatting utilities used by the terminal screens.

use chrono::{DateTime, Local, Utc};

/// Placeholder for empty cells and zero durations.
pub const EMPTY: &str = "-";

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

/// Milliseconds → `"{h}h {m}m"`, truncated to whole minutes.
/// Zero (or negative) renders as `-`.
pub fn format_duration(ms: i64) -> String {
    if ms <= 0 {
        return EMPTY.to_string();
    }
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    format!("{}h {}m", hours, minutes)
}

/// Hour and minute in the viewer's timezone.
pub fn format_time_of_day(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%H:%M").to_string()
}

pub fn format_optional_time(ts: Option<DateTime<Utc>>) -> String {
    ts.map(format_time_of_day)
        .unwrap_or_else(|| EMPTY.to_string())
}

/// Live clock text, with seconds.
pub fn format_clock(now: DateTime<Local>) -> String {
    now.format("%H:%M:%S").to_string()
}
