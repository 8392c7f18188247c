use crate::app::App;
use crate::cli::commands::login::field;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::{ChangePasswordForm, PasswordChange};
use crate::core::dashboard::Flow;
use crate::errors::AppResult;
use crate::ui::messages::{alert, info};

/// Handle the `passwd` command: the password-change section of the login
/// screen, opened directly. Outcomes are shown as blocking alerts.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Passwd { current, new } = cmd {
        let app = App::from_config(cfg)?;

        let mut form = ChangePasswordForm::default();
        form.toggle();

        let Some(current) = field(current.clone(), "Current password")? else {
            info("Password change cancelled.");
            return Ok(());
        };
        let Some(new) = field(new.clone(), "New password")? else {
            info("Password change cancelled.");
            return Ok(());
        };
        form.current_password = current;
        form.new_password = new;

        let outcome = form.submit(app.transport(), app.store());
        alert(outcome.alert_message())?;

        if outcome == PasswordChange::SessionExpired
            && let Some(next) = app.follow(Flow::RedirectToLogin, None)?
        {
            app.run(next)?;
        }
    }
    Ok(())
}
