//! Login and password change.

use crate::api::endpoints::{self, TimeApi};
use crate::api::{ApiOutcome, Session, Transport};
use crate::errors::AppResult;
use crate::storage::TokenStore;
use tracing::{info, warn};

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const PASSWORD_CHANGED: &str = "Password changed successfully";
pub const PASSWORD_CHANGE_FAILED: &str = "Failed to change password";

/// Login form. `error` is shown inline under the form and stays until the
/// next attempt.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub error: Option<String>,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            error: None,
        }
    }

    /// Exchange the credentials for a token and store it.
    /// Returns `true` when the user is now logged in.
    #[tracing::instrument(skip_all, fields(email = %self.email))]
    pub fn submit(&mut self, transport: &dyn Transport, store: &TokenStore) -> AppResult<bool> {
        self.error = None;

        let token = match endpoints::login(transport, &self.email, &self.password) {
            ApiOutcome::Success(resp) => resp.access_token.filter(|t| !t.trim().is_empty()),
            ApiOutcome::Unauthorized => None,
            ApiOutcome::Failed(f) => {
                warn!(reason = %f.reason, "login failed");
                None
            }
        };

        match token {
            Some(t) => {
                store.set_token(&t)?;
                info!("logged in");
                Ok(true)
            }
            None => {
                self.error = Some(INVALID_CREDENTIALS.to_string());
                Ok(false)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordChange {
    Changed,
    Failed,
    /// Rejected with 401: the stored session is no longer valid.
    SessionExpired,
}

impl PasswordChange {
    /// Text of the blocking alert shown for this outcome.
    pub fn alert_message(&self) -> &'static str {
        match self {
            PasswordChange::Changed => PASSWORD_CHANGED,
            PasswordChange::Failed | PasswordChange::SessionExpired => PASSWORD_CHANGE_FAILED,
        }
    }
}

/// Password-change section of the login screen, hidden behind a toggle.
#[derive(Debug, Clone, Default)]
pub struct ChangePasswordForm {
    pub visible: bool,
    pub current_password: String,
    pub new_password: String,
}

impl ChangePasswordForm {
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Label of the disclosure control.
    pub fn toggle_label(&self) -> &'static str {
        if self.visible { "Cancel" } else { "Change Password" }
    }

    /// Fields are cleared on success only.
    #[tracing::instrument(skip_all)]
    pub fn submit(&mut self, transport: &dyn Transport, store: &TokenStore) -> PasswordChange {
        let api = TimeApi::new(Session::new(transport, store));
        let outcome = match api.change_password(&self.current_password, &self.new_password) {
            ApiOutcome::Success(_) => PasswordChange::Changed,
            ApiOutcome::Unauthorized => PasswordChange::SessionExpired,
            ApiOutcome::Failed(f) => {
                warn!(reason = %f.reason, "password change failed");
                PasswordChange::Failed
            }
        };

        if outcome == PasswordChange::Changed {
            info!("password changed");
            self.current_password.clear();
            self.new_password.clear();
        }
        outcome
    }
}
