use crate::app::{App, Credentials, DashboardMode, Screen};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::{ChangePasswordForm, LoginForm};
use crate::errors::{AppError, AppResult};
use crate::ui::login_view;
use crate::ui::messages::{info, prompt, success};
use std::io::{self, IsTerminal};

/// Handle the `login` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { email, password } = cmd {
        let app = App::from_config(cfg)?;
        app.run(Screen::Login {
            credentials: Credentials {
                email: email.clone(),
                password: password.clone(),
            },
            resume: None,
        })?;
    }
    Ok(())
}

/// The login screen. On success the dashboard is next; with prompted
/// credentials on a terminal, a rejected attempt asks again.
pub fn screen(
    app: &App,
    credentials: Credentials,
    resume: Option<DashboardMode>,
) -> AppResult<Option<Screen>> {
    let interactive = io::stdin().is_terminal();
    let change = ChangePasswordForm::default();
    let mut form = LoginForm::default();
    let mut given = credentials;

    print!("{}", login_view::render(&form, &change));

    loop {
        let from_flags = given.email.is_some() && given.password.is_some();

        let Some(email) = field(given.email.take(), "Email")? else {
            info("Login cancelled.");
            return Ok(None);
        };
        let Some(password) = field(given.password.take(), "Password")? else {
            info("Login cancelled.");
            return Ok(None);
        };

        form.email = email;
        form.password = password;

        if form.submit(app.transport(), app.store())? {
            success("Logged in.");
            return Ok(Some(Screen::Dashboard(landing(app, resume))));
        }

        print!("{}", login_view::render(&form, &change));
        if from_flags || !interactive {
            return Err(AppError::LoginRejected);
        }
    }
}

/// Value given on the command line, or prompted for. `None` when stdin
/// is closed before an answer.
pub(crate) fn field(given: Option<String>, label: &str) -> AppResult<Option<String>> {
    match given {
        Some(v) => Ok(Some(v)),
        None => prompt(label),
    }
}

/// Where a successful login lands: back to the view that lost the session,
/// keeping its query. An interrupted action is not replayed.
fn landing(app: &App, resume: Option<DashboardMode>) -> DashboardMode {
    match resume {
        Some(mode @ (DashboardMode::Shell { .. } | DashboardMode::Once { .. })) => mode,
        Some(DashboardMode::Action { .. }) | None => DashboardMode::Once {
            query: app.default_query(),
            show_filters: false,
        },
    }
}
