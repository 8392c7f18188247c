/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Grey for placeholder cells ("-", "..."), unchanged otherwise.
pub fn colorize_optional(value: &str) -> String {
    match value.trim() {
        "" | "-" | "..." => paint(value, GREY),
        _ => value.to_string(),
    }
}

/// Start times green, end times red, placeholders grey.
pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    match value.trim() {
        "" | "-" => paint(value, GREY),
        _ if is_in => paint(value, GREEN),
        _ => paint(value, RED),
    }
}
