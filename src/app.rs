//! Top-level composition: owns the collaborators and moves between the
//! login and dashboard screens. A lost session (`Flow::RedirectToLogin`)
//! is turned into navigation here and nowhere else.

use crate::api::{HttpTransport, Transport};
use crate::cli::commands::{dashboard, login};
use crate::config::Config;
use crate::core::dashboard::Flow;
use crate::core::pagination::PageSize;
use crate::core::query::WorkdayQuery;
use crate::errors::AppResult;
use crate::models::action::ActionKind;
use crate::storage::TokenStore;
use crate::ui::messages::warning;
use crate::utils::clock::{Clock, SystemClock};
use std::time::Duration;
use tracing::info;

/// Credentials given on the command line; missing ones are prompted for.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// How the dashboard is presented.
#[derive(Debug, Clone)]
pub enum DashboardMode {
    /// Render once and exit.
    Once { query: WorkdayQuery, show_filters: bool },
    /// Dispatch one action, then render once.
    Action { kind: ActionKind },
    /// Interactive shell with live clock.
    Shell { query: WorkdayQuery },
}

#[derive(Debug, Clone)]
pub enum Screen {
    Login {
        credentials: Credentials,
        /// Where to go after a successful login.
        resume: Option<DashboardMode>,
    },
    Dashboard(DashboardMode),
}

pub struct App {
    transport: Box<dyn Transport>,
    store: TokenStore,
    clock: Box<dyn Clock>,
    page_size: PageSize,
}

impl App {
    pub fn new(
        transport: Box<dyn Transport>,
        store: TokenStore,
        clock: Box<dyn Clock>,
        page_size: PageSize,
    ) -> Self {
        Self {
            transport,
            store,
            clock,
            page_size,
        }
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let transport = HttpTransport::new(
            &cfg.api_base_url,
            Duration::from_secs(cfg.request_timeout_secs),
        )?;
        Ok(Self::new(
            Box::new(transport),
            TokenStore::new(&cfg.storage_file),
            Box::new(SystemClock),
            cfg.page_size(),
        ))
    }

    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    pub fn store(&self) -> &TokenStore {
        &self.store
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Landing query of the dashboard: page 1, configured page size.
    pub fn default_query(&self) -> WorkdayQuery {
        WorkdayQuery::new(self.page_size)
    }

    /// Drop the stored token.
    pub fn forget_session(&self) -> AppResult<()> {
        self.store.clear()
    }

    /// Map a screen flow to the next screen. `resume` is where a new login
    /// should land.
    pub fn follow(&self, flow: Flow, resume: Option<DashboardMode>) -> AppResult<Option<Screen>> {
        match flow {
            Flow::Continue => Ok(None),
            Flow::RedirectToLogin => {
                info!("session lost, redirecting to login");
                self.forget_session()?;
                warning("You are not logged in (or your session expired). Please log in.");
                Ok(Some(Screen::Login {
                    credentials: Credentials::default(),
                    resume,
                }))
            }
        }
    }

    /// Run screens until one of them finishes without navigating further.
    pub fn run(&self, start: Screen) -> AppResult<()> {
        let mut next = Some(start);
        while let Some(screen) = next.take() {
            next = match screen {
                Screen::Login {
                    credentials,
                    resume,
                } => login::screen(self, credentials, resume)?,
                Screen::Dashboard(mode) => dashboard::screen(self, mode)?,
            };
        }
        Ok(())
    }
}
