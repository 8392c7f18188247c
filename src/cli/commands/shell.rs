//! Interactive dashboard.
//!
//! One event loop on the main thread: a typed line is a command (the
//! terminal equivalent of clicking a button), a one-second timeout is the
//! clock tick. Ticks only repaint the clock and expire notifications; they
//! never fetch data.

use crate::app::{App, Credentials, DashboardMode, Screen};
use crate::core::actions::{Dispatch, Rejection};
use crate::core::dashboard::{Dashboard, Flow};
use crate::core::pagination::PageSize;
use crate::core::query::WorkdayQuery;
use crate::errors::AppResult;
use crate::models::action::ActionKind;
use crate::ui::dashboard_view::{header_line, render, shell_help};
use crate::ui::input::{Input, next_input};
use crate::utils::date::parse_optional_date;
use chrono::NaiveDate;
use std::io::{self, Write};
use std::time::Duration;
use tracing::debug;

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Action(ActionKind),
    Next,
    Previous,
    Page(u32),
    Limit(u32),
    From(Option<NaiveDate>),
    To(Option<NaiveDate>),
    ToggleFilters,
    Refresh,
    Logout,
    Help,
    Quit,
    Nothing,
}

/// Parse one typed line.
pub fn parse_command(line: &str) -> Result<ShellCommand, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Ok(ShellCommand::Nothing);
    };
    let arg = parts.next();

    if let Some(kind) = ActionKind::from_command(head) {
        return Ok(ShellCommand::Action(kind));
    }

    let number = |what: &str| -> Result<u32, String> {
        arg.ok_or_else(|| format!("{what} requires a number"))?
            .parse::<u32>()
            .map_err(|_| format!("{what} requires a number"))
    };

    match head.to_lowercase().as_str() {
        "n" | "next" => Ok(ShellCommand::Next),
        "p" | "prev" | "previous" => Ok(ShellCommand::Previous),
        "page" => number("page").map(ShellCommand::Page),
        "limit" => number("limit").map(ShellCommand::Limit),
        "from" => parse_optional_date(arg.unwrap_or("-"))
            .map(ShellCommand::From)
            .map_err(|e| e.to_string()),
        "to" => parse_optional_date(arg.unwrap_or("-"))
            .map(ShellCommand::To)
            .map_err(|e| e.to_string()),
        "f" | "filters" => Ok(ShellCommand::ToggleFilters),
        "r" | "refresh" => Ok(ShellCommand::Refresh),
        "logout" => Ok(ShellCommand::Logout),
        "h" | "help" | "?" => Ok(ShellCommand::Help),
        "q" | "quit" | "exit" => Ok(ShellCommand::Quit),
        other => Err(format!("Unknown command '{other}' (type 'help')")),
    }
}

enum Step {
    Stay,
    Navigate(Option<Screen>),
}

pub fn run(app: &App, query: WorkdayQuery) -> AppResult<Option<Screen>> {
    let mut dash = Dashboard::new(app.transport(), app.store(), app.clock(), query.clone());
    if let Some(next) = app.follow(dash.mount(), Some(DashboardMode::Shell { query }))? {
        return Ok(Some(next));
    }

    let mut show_help = false;
    redraw(app, &dash, show_help)?;

    loop {
        match next_input(TICK) {
            Input::Line(line) => {
                debug!(%line, "shell command");
                let step = match parse_command(&line) {
                    Ok(ShellCommand::Help) => {
                        show_help = !show_help;
                        Step::Stay
                    }
                    Ok(cmd) => apply(app, &mut dash, cmd)?,
                    Err(msg) => {
                        dash.notifications.error(msg, app.clock().now());
                        Step::Stay
                    }
                };
                if let Step::Navigate(next) = step {
                    return Ok(next);
                }
                redraw(app, &dash, show_help)?;
            }
            Input::Timeout => {
                if dash.notifications.expire(app.clock().now()) {
                    redraw(app, &dash, show_help)?;
                } else {
                    repaint_clock(app, &dash)?;
                }
            }
            Input::Closed => return Ok(None),
        }
    }
}

fn apply(app: &App, dash: &mut Dashboard, cmd: ShellCommand) -> AppResult<Step> {
    let now = app.clock().now();

    let flow = match cmd {
        ShellCommand::Action(kind) => match dash.dispatch(kind) {
            Dispatch::Completed(flow) => flow,
            Dispatch::Rejected(Rejection::Unavailable) => {
                dash.notifications
                    .error(format!("{kind} is not available right now"), now);
                Flow::Continue
            }
            Dispatch::Rejected(Rejection::InFlight) => {
                dash.notifications
                    .error(format!("{kind} is already in progress"), now);
                Flow::Continue
            }
        },
        ShellCommand::Next => dash.next_page(),
        ShellCommand::Previous => dash.previous_page(),
        ShellCommand::Page(n) => match dash.set_page(n) {
            Ok(flow) => flow,
            Err(e) => {
                dash.notifications.error(e.to_string(), now);
                Flow::Continue
            }
        },
        ShellCommand::Limit(n) => match PageSize::try_from(n) {
            Ok(size) => dash.set_limit(size),
            Err(e) => {
                dash.notifications.error(e.to_string(), now);
                Flow::Continue
            }
        },
        ShellCommand::From(d) => dash.set_from(d),
        ShellCommand::To(d) => dash.set_to(d),
        ShellCommand::ToggleFilters => {
            dash.toggle_filters();
            Flow::Continue
        }
        ShellCommand::Refresh => dash.reload(),
        ShellCommand::Logout => {
            app.forget_session()?;
            return Ok(Step::Navigate(Some(Screen::Login {
                credentials: Credentials::default(),
                resume: resume(dash),
            })));
        }
        ShellCommand::Quit => return Ok(Step::Navigate(None)),
        ShellCommand::Help | ShellCommand::Nothing => Flow::Continue,
    };

    match app.follow(flow, resume(dash))? {
        Some(next) => Ok(Step::Navigate(Some(next))),
        None => Ok(Step::Stay),
    }
}

fn resume(dash: &Dashboard) -> Option<DashboardMode> {
    Some(DashboardMode::Shell {
        query: dash.query().clone(),
    })
}

fn redraw(app: &App, dash: &Dashboard, show_help: bool) -> AppResult<()> {
    let mut out = io::stdout();
    write!(out, "\x1b[2J\x1b[H")?;
    write!(out, "{}", render(dash, app.clock().local_now()))?;
    if show_help {
        writeln!(out, "\n{}", shell_help())?;
    } else {
        writeln!(out, "\nType 'help' for commands.")?;
    }
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

/// Rewrite the first line (clock) without touching what is being typed.
fn repaint_clock(app: &App, dash: &Dashboard) -> AppResult<()> {
    let mut out = io::stdout();
    write!(
        out,
        "\x1b7\x1b[1;1H\x1b[2K{}\x1b8",
        header_line(dash, app.clock().local_now())
    )?;
    out.flush()?;
    Ok(())
}
