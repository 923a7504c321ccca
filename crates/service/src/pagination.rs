//! Pagination utilities for service layer
//!
//! Provides a simple `Pagination` struct and helpers to normalize inputs.

/// Items per page when the caller does not say otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    pub page: u32,
    /// items per page
    pub per_page: u32,
}

impl Pagination {
    /// Page `page` (missing means the first) at the default size.
    pub fn page(page: Option<u32>) -> Self {
        Self { page: page.unwrap_or(1), ..Self::default() }
    }

    /// Clamp to sane defaults and convert to a 0-based page index and page size
    pub fn normalize(self) -> (u64, u64) {
        let page = if self.page == 0 { 1 } else { self.page };
        let per_page = self.per_page.clamp(1, 100);
        ((page - 1) as u64, per_page as u64)
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, per_page: DEFAULT_PAGE_SIZE } }
}
