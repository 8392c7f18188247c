//! Client-side pagination bookkeeping.

use crate::errors::AppError;
use std::fmt;

/// Page sizes offered by the filter panel.
pub const PAGE_SIZES: [u32; 3] = [10, 20, 50];

pub const DEFAULT_PAGE_SIZE: PageSize = PageSize(10);

/// A page size restricted to [`PAGE_SIZES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(u32);

impl PageSize {
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        DEFAULT_PAGE_SIZE
    }
}

impl TryFrom<u32> for PageSize {
    type Error = AppError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if PAGE_SIZES.contains(&value) {
            Ok(PageSize(value))
        } else {
            Err(AppError::InvalidPageSize(value))
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} entries", self.0)
    }
}

/// Position inside the history: current page, page size and server total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

impl Pagination {
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        Self { page, limit, total }
    }

    /// ceil(total / limit); zero when there is nothing at all.
    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.limit))
    }

    /// Page count shown to the user, never below 1.
    pub fn display_pages(&self) -> u64 {
        self.total_pages().max(1)
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// "Page 2 of 3 (25 total)"
    pub fn summary(&self) -> String {
        format!(
            "Page {} of {} ({} total)",
            self.page,
            self.display_pages(),
            self.total
        )
    }
}
