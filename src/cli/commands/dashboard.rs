use crate::app::{App, DashboardMode, Screen};
use crate::cli::commands::shell;
use crate::cli::parser::{Commands, FilterArgs};
use crate::config::Config;
use crate::core::actions::{Dispatch, Rejection};
use crate::core::dashboard::Dashboard;
use crate::core::pagination::PageSize;
use crate::core::query::WorkdayQuery;
use crate::errors::AppResult;
use crate::models::action::ActionKind;
use crate::ui::dashboard_view;
use crate::ui::messages::warning;

/// Handle `dashboard`, the four action commands and `shell`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let app = App::from_config(cfg)?;

    let mode = match cmd {
        Commands::Dashboard {
            filter,
            page,
            filters,
        } => {
            let mut query = build_query(&app, filter)?;
            if let Some(p) = page {
                query.set_page(*p)?;
            }
            DashboardMode::Once {
                query,
                show_filters: *filters,
            }
        }
        Commands::Start => DashboardMode::Action {
            kind: ActionKind::StartDay,
        },
        Commands::End => DashboardMode::Action {
            kind: ActionKind::EndDay,
        },
        Commands::BreakStart => DashboardMode::Action {
            kind: ActionKind::StartBreak,
        },
        Commands::BreakEnd => DashboardMode::Action {
            kind: ActionKind::EndBreak,
        },
        Commands::Shell { filter } => DashboardMode::Shell {
            query: build_query(&app, filter)?,
        },
        _ => return Ok(()),
    };

    app.run(Screen::Dashboard(mode))
}

fn build_query(app: &App, filter: &FilterArgs) -> AppResult<WorkdayQuery> {
    let limit = match filter.limit {
        Some(n) => PageSize::try_from(n)?,
        None => app.page_size(),
    };
    let mut query = WorkdayQuery::new(limit);
    query.set_from(filter.from);
    query.set_to(filter.to);
    Ok(query)
}

/// The dashboard screen.
pub fn screen(app: &App, mode: DashboardMode) -> AppResult<Option<Screen>> {
    match mode {
        DashboardMode::Once {
            query,
            show_filters,
        } => {
            let mut dash = Dashboard::new(app.transport(), app.store(), app.clock(), query.clone());
            dash.show_filters = show_filters;

            let resume = DashboardMode::Once {
                query,
                show_filters,
            };
            if let Some(next) = app.follow(dash.mount(), Some(resume))? {
                return Ok(Some(next));
            }

            print!("{}", dashboard_view::render(&dash, app.clock().local_now()));
            Ok(None)
        }
        DashboardMode::Action { kind } => {
            let mut dash =
                Dashboard::new(app.transport(), app.store(), app.clock(), app.default_query());

            if let Some(next) = app.follow(dash.mount(), Some(DashboardMode::Action { kind }))? {
                return Ok(Some(next));
            }

            match dash.dispatch(kind) {
                Dispatch::Rejected(Rejection::Unavailable) => warning(format!(
                    "{} is not available right now (status: {}).",
                    kind,
                    dash.status().describe()
                )),
                Dispatch::Rejected(Rejection::InFlight) => {
                    warning(format!("{} is already in progress.", kind))
                }
                Dispatch::Completed(flow) => {
                    if let Some(next) = app.follow(flow, None)? {
                        return Ok(Some(next));
                    }
                }
            }

            print!("{}", dashboard_view::render(&dash, app.clock().local_now()));
            Ok(None)
        }
        DashboardMode::Shell { query } => shell::run(app, query),
    }
}
