//! Filter and paging parameters of the workday history.

use crate::core::pagination::PageSize;
use crate::errors::{AppError, AppResult};
use crate::utils::date::format_iso;
use chrono::NaiveDate;

/// Parameters of `GET /time/me`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkdayQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub page: u32,
    pub limit: PageSize,
}

impl Default for WorkdayQuery {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl WorkdayQuery {
    pub fn new(limit: PageSize) -> Self {
        Self {
            from: None,
            to: None,
            page: 1,
            limit,
        }
    }

    /// Query-string pairs in wire order. `from`/`to` only when set.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(4);
        if let Some(from) = self.from {
            pairs.push(("from".to_string(), format_iso(from)));
        }
        if let Some(to) = self.to {
            pairs.push(("to".to_string(), format_iso(to)));
        }
        pairs.push(("page".to_string(), self.page.to_string()));
        pairs.push(("limit".to_string(), self.limit.get().to_string()));
        pairs
    }

    // Setters return whether the query actually changed; an unchanged query
    // does not need a reload.

    pub fn set_page(&mut self, page: u32) -> AppResult<bool> {
        if page == 0 {
            return Err(AppError::InvalidPage(page));
        }
        Ok(replace(&mut self.page, page))
    }

    /// A new page size always restarts from the first page.
    pub fn set_limit(&mut self, limit: PageSize) -> bool {
        let changed = replace(&mut self.limit, limit);
        let page_changed = replace(&mut self.page, 1);
        changed || page_changed
    }

    pub fn set_from(&mut self, from: Option<NaiveDate>) -> bool {
        replace(&mut self.from, from)
    }

    pub fn set_to(&mut self, to: Option<NaiveDate>) -> bool {
        replace(&mut self.to, to)
    }

    /// Whether `day` lies inside the date filter (open bounds included).
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.from.is_none_or(|f| day >= f) && self.to.is_none_or(|t| day <= t)
    }

    pub fn has_date_filter(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}
