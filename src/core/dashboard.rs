//! Dashboard state: current user, the loaded history page, filters,
//! notifications and the derived status of today.

use crate::api::{ApiOutcome, Session, TimeApi, Transport};
use crate::core::notifications::Notifications;
use crate::core::pagination::{PageSize, Pagination};
use crate::core::query::WorkdayQuery;
use crate::core::status::{ButtonState, TodayStatus};
use crate::errors::AppResult;
use crate::models::action::ActionKind;
use crate::models::user::User;
use crate::models::workday::{Workday, WorkdayPage};
use crate::storage::TokenStore;
use crate::utils::clock::Clock;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// What the caller has to do after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Flow {
    Continue,
    /// The server answered 401: the session is gone.
    RedirectToLogin,
}

/// A loaded page with today's lookup index.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPage {
    page: WorkdayPage,
    by_date: HashMap<NaiveDate, usize>,
}

impl LoadedPage {
    pub fn new(page: WorkdayPage) -> Self {
        let mut by_date = HashMap::with_capacity(page.items.len());
        for (i, wd) in page.items.iter().enumerate() {
            // first record of a day wins
            by_date.entry(wd.date).or_insert(i);
        }
        Self { page, by_date }
    }

    pub fn find(&self, day: NaiveDate) -> Option<&Workday> {
        self.by_date.get(&day).map(|&i| &self.page.items[i])
    }

    pub fn items(&self) -> &[Workday] {
        &self.page.items
    }

    pub fn total(&self) -> u64 {
        self.page.total
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded(LoadedPage),
    Failed(String),
}

pub struct Dashboard<'a> {
    pub(crate) api: TimeApi<'a>,
    store: &'a TokenStore,
    pub(crate) clock: &'a dyn Clock,
    user: Option<User>,
    query: WorkdayQuery,
    load: LoadState,
    pub show_filters: bool,
    pub notifications: Notifications,
    pub(crate) in_flight: HashSet<ActionKind>,
}

impl<'a> Dashboard<'a> {
    pub fn new(
        transport: &'a dyn Transport,
        store: &'a TokenStore,
        clock: &'a dyn Clock,
        query: WorkdayQuery,
    ) -> Self {
        Self {
            api: TimeApi::new(Session::new(transport, store)),
            store,
            clock,
            user: None,
            query,
            load: LoadState::Loading,
            show_filters: false,
            notifications: Notifications::default(),
            in_flight: HashSet::new(),
        }
    }

    /// Initial load: token check, profile (best effort), first page.
    /// Without a token nothing is requested at all.
    #[tracing::instrument(skip(self))]
    pub fn mount(&mut self) -> Flow {
        let has_token = self.store.has_token().unwrap_or_else(|e| {
            warn!(error = %e, "unreadable storage, treating as logged out");
            false
        });
        if !has_token {
            info!("no session token, redirecting to login");
            return Flow::RedirectToLogin;
        }

        match self.api.me() {
            ApiOutcome::Success(user) => self.user = Some(user),
            ApiOutcome::Unauthorized => return Flow::RedirectToLogin,
            ApiOutcome::Failed(f) => debug!(reason = %f.reason, "profile unavailable, continuing"),
        }

        self.reload()
    }

    /// Full re-fetch of the current page. Stale rows are dropped first.
    #[tracing::instrument(skip(self), fields(page = self.query.page, limit = self.query.limit.get()))]
    pub fn reload(&mut self) -> Flow {
        self.load = LoadState::Loading;
        match self.api.workdays(&self.query) {
            ApiOutcome::Success(page) => {
                debug!(items = page.items.len(), total = page.total, "page loaded");
                self.load = LoadState::Loaded(LoadedPage::new(page));
                Flow::Continue
            }
            ApiOutcome::Unauthorized => Flow::RedirectToLogin,
            ApiOutcome::Failed(f) => {
                let message = f.server_message().unwrap_or(f.reason);
                warn!(%message, "page load failed");
                self.load = LoadState::Failed(message);
                Flow::Continue
            }
        }
    }

    fn reload_if(&mut self, changed: bool) -> Flow {
        if changed { self.reload() } else { Flow::Continue }
    }

    pub fn set_page(&mut self, page: u32) -> AppResult<Flow> {
        let changed = self.query.set_page(page)?;
        Ok(self.reload_if(changed))
    }

    /// Ignored while "Next" is disabled.
    pub fn next_page(&mut self) -> Flow {
        if !self.pagination().has_next() {
            return Flow::Continue;
        }
        let next = self.query.page + 1;
        self.set_page(next).unwrap_or(Flow::Continue)
    }

    /// Ignored while "Previous" is disabled.
    pub fn previous_page(&mut self) -> Flow {
        if !self.pagination().has_previous() {
            return Flow::Continue;
        }
        let prev = self.query.page - 1;
        self.set_page(prev).unwrap_or(Flow::Continue)
    }

    pub fn set_limit(&mut self, limit: PageSize) -> Flow {
        let changed = self.query.set_limit(limit);
        self.reload_if(changed)
    }

    pub fn set_from(&mut self, from: Option<NaiveDate>) -> Flow {
        let changed = self.query.set_from(from);
        self.reload_if(changed)
    }

    pub fn set_to(&mut self, to: Option<NaiveDate>) -> Flow {
        let changed = self.query.set_to(to);
        self.reload_if(changed)
    }

    pub fn toggle_filters(&mut self) {
        self.show_filters = !self.show_filters;
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn query(&self) -> &WorkdayQuery {
        &self.query
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn loaded(&self) -> Option<&LoadedPage> {
        match &self.load {
            LoadState::Loaded(p) => Some(p),
            _ => None,
        }
    }

    pub fn pagination(&self) -> Pagination {
        let total = self.loaded().map(LoadedPage::total).unwrap_or(0);
        Pagination::new(self.query.page, self.query.limit.get(), total)
    }

    /// Today's record, looked up on the loaded page only.
    pub fn today_entry(&self) -> Option<&Workday> {
        let today = self.clock.today();
        self.loaded().and_then(|p| p.find(today))
    }

    pub fn status(&self) -> TodayStatus {
        TodayStatus::from_workday(self.today_entry())
    }

    pub fn buttons(&self) -> Vec<ButtonState> {
        self.status().buttons(&self.in_flight)
    }

    /// Today's record is missing and the current page or date filter could
    /// be hiding it, so the status may wrongly read "not started".
    pub fn today_possibly_hidden(&self) -> bool {
        if self.loaded().is_none() || self.today_entry().is_some() {
            return false;
        }
        let today = self.clock.today();
        self.query.page > 1 || !self.query.covers(today)
    }
}
