//! Text rendering of the dashboard screen.
//!
//! Rendering is a pure function of the dashboard state and the wall clock,
//! so the one-shot commands and the interactive shell share it.

use crate::core::dashboard::{Dashboard, LoadState};
use crate::core::notifications::NotificationKind;
use crate::core::status::ButtonState;
use crate::models::action::ActionKind;
use crate::models::workday::{Break, Workday};
use crate::utils::colors::{BLUE, CYAN, GREEN, GREY, RED, YELLOW, colorize_in_out, colorize_optional, paint};
use crate::utils::date::format_iso;
use crate::utils::formatting::{bold, format_clock, format_duration, format_optional_time, format_time_of_day, italic};
use crate::utils::table::{Column, Table};
use chrono::{DateTime, Local};

pub const TITLE: &str = "Time Tracker";

/// First line of the screen. Carries the live clock so the shell can
/// repaint it alone every second.
pub fn header_line(dashboard: &Dashboard, now: DateTime<Local>) -> String {
    let mut line = format!(
        "⏱  {}  {}  {}",
        bold(TITLE),
        now.format("%Y-%m-%d"),
        paint(&format_clock(now), CYAN)
    );
    if let Some(user) = dashboard.user() {
        line.push_str(&format!("   Welcome, {}", user.display_name()));
    }
    line
}

pub fn render(dashboard: &Dashboard, now: DateTime<Local>) -> String {
    let mut out = String::new();

    out.push_str(&header_line(dashboard, now));
    out.push('\n');
    out.push_str(&"═".repeat(72));
    out.push_str("\n\n");

    // Current status
    out.push_str(&format!("{}  {}\n", bold("Current Status"), format_clock(now)));
    let buttons = dashboard
        .buttons()
        .iter()
        .map(render_button)
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(&format!("  {buttons}\n"));
    if dashboard.today_possibly_hidden() {
        out.push_str(&format!(
            "  {}\n",
            italic(&paint(
                "Today's record is not on this page or filter; status may read as not started.",
                YELLOW
            ))
        ));
    }
    out.push('\n');

    // Filters
    let query = dashboard.query();
    if dashboard.show_filters {
        out.push_str(&format!("{} ▾\n", bold("Filters & Settings")));
        out.push_str(&format!(
            "  From Date: {}   To Date: {}   Per Page: {}\n",
            query.from.map(format_iso).unwrap_or_else(|| "-".into()),
            query.to.map(format_iso).unwrap_or_else(|| "-".into()),
            query.limit
        ));
    } else {
        let note = if query.has_date_filter() { "  (date filter active)" } else { "" };
        out.push_str(&format!("{} ▸{}\n", bold("Filters & Settings"), note));
    }
    out.push('\n');

    // History
    match dashboard.load_state() {
        LoadState::Loading => out.push_str("Loading...\n"),
        LoadState::Failed(msg) => out.push_str(&format!("{}\n", paint(&format!("Error: {msg}"), RED))),
        LoadState::Loaded(page) => {
            out.push_str(&render_table(page.items()));
            let p = dashboard.pagination();
            out.push_str(&format!(
                "\n{}   {}   {}\n",
                nav_label("« Previous", p.has_previous()),
                p.summary(),
                nav_label("Next »", p.has_next())
            ));
        }
    }

    // Notifications, in creation order
    let toasts = dashboard.notifications.visible();
    if !toasts.is_empty() {
        out.push('\n');
        for n in toasts {
            let line = match n.kind {
                NotificationKind::Success => paint(&format!("✅ {}", n.message), GREEN),
                NotificationKind::Error => paint(&format!("❌ {}", n.message), RED),
            };
            out.push_str(&line);
            out.push('\n');
        }
    }

    out
}

fn render_button(b: &ButtonState) -> String {
    let icon = match b.kind {
        ActionKind::StartDay | ActionKind::EndBreak => "▶",
        ActionKind::StartBreak => "☕",
        ActionKind::EndDay => "■",
    };
    let text = if b.in_flight {
        format!("{icon} {}…", b.label)
    } else {
        format!("{icon} {}", b.label)
    };

    if !b.enabled {
        return paint(&format!("({text})"), GREY);
    }
    let color = match b.kind {
        ActionKind::StartDay => GREEN,
        ActionKind::StartBreak => YELLOW,
        ActionKind::EndBreak => BLUE,
        ActionKind::EndDay => RED,
    };
    paint(&format!("[{text}]"), color)
}

fn nav_label(label: &str, enabled: bool) -> String {
    if enabled {
        format!("[{label}]")
    } else {
        paint(&format!("({label})"), GREY)
    }
}

fn render_break(b: &Break) -> String {
    let end = b.end.map(format_time_of_day).unwrap_or_else(|| "...".into());
    format!("{} - {}", format_time_of_day(b.start), end)
}

pub fn render_table(items: &[Workday]) -> String {
    let mut table = Table::new(vec![
        Column::new("Date", 10),
        Column::new("Start", 5),
        Column::new("End", 5),
        Column::new("Work Time", 9),
        Column::new("Break Time", 10),
        Column::new("Breaks", 6),
    ]);

    for wd in items {
        let breaks = if wd.breaks.is_empty() {
            "-".to_string()
        } else {
            wd.breaks.iter().map(render_break).collect::<Vec<_>>().join(", ")
        };
        table.add_row(vec![
            format_iso(wd.date),
            colorize_in_out(&format_optional_time(wd.start_time), true),
            colorize_in_out(&format_optional_time(wd.end_time), false),
            colorize_optional(&format_duration(wd.total_work_time)),
            colorize_optional(&format_duration(wd.total_break_time)),
            colorize_optional(&breaks),
        ]);
    }

    if items.is_empty() {
        let mut out = table.render();
        out.push_str(&paint("No workdays for this selection.", GREY));
        out.push('\n');
        return out;
    }
    table.render()
}

/// Commands understood by the interactive shell.
pub fn shell_help() -> String {
    [
        "start | break | resume | end      start day / start break / end break / end day",
        "next | prev | page <n>            move through the history",
        "limit <10|20|50>                  entries per page (back to page 1)",
        "from <YYYY-MM-DD|->  to <...>     date filter (- clears)",
        "filters                           show/hide the filter panel",
        "refresh | logout | help | quit",
    ]
    .join("\n")
}
