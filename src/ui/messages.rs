use crate::errors::AppResult;
use crate::ui::input;
use crate::utils::table::visible_width;
use std::fmt;
use std::io::{self, IsTerminal, Write};

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

const ALERT_WIDTH: usize = 48;

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// Framed alert box around `msg`, wrapped to a fixed width.
pub fn alert_box(msg: &str) -> String {
    let lines = textwrap::wrap(msg, ALERT_WIDTH - 4);
    let inner = lines
        .iter()
        .map(|l| visible_width(l))
        .max()
        .unwrap_or(0)
        .max(ALERT_WIDTH - 4);

    let mut out = format!("┌{}┐\n", "─".repeat(inner + 2));
    for line in &lines {
        let pad = inner - visible_width(line);
        out.push_str(&format!("│ {}{} │\n", line, " ".repeat(pad)));
    }
    out.push_str(&format!("└{}┘", "─".repeat(inner + 2)));
    out
}

/// Blocking alert: the message stays until the user acknowledges it with
/// Enter. Without a terminal on stdin the box is only printed.
pub fn alert(msg: &str) -> AppResult<()> {
    println!("{}{}{}", BOLD, alert_box(msg), RESET);
    if io::stdin().is_terminal() {
        print!("Press Enter to continue…");
        io::stdout().flush()?;
        input::read_line();
    }
    Ok(())
}

/// Read one line after printing `label`. `None` when stdin is closed.
pub fn prompt(label: &str) -> AppResult<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;

    let line = input::read_line();
    if line.is_none() {
        println!();
    }
    Ok(line)
}
