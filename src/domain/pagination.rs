// src/domain/pagination.rs
use crate::domain::errors::{DomainError, DomainResult};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// A validated 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> DomainResult<Self> {
        if limit == 0 {
            return Err(DomainError::Validation("page size must be positive".into()));
        }
        if page == 0 {
            return Err(DomainError::Validation("page numbers start at 1".into()));
        }
        Ok(Self { page, limit })
    }

    pub const fn page(&self) -> u32 {
        self.page
    }

    pub const fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }

    /// Pagination metadata for a result set of `total` matching rows.
    pub fn window(&self, total: u64) -> PageWindow {
        let total_pages = total.div_ceil(u64::from(self.limit));
        PageWindow {
            total,
            limit: self.limit,
            page: self.page,
            total_pages,
            offset: self.offset(),
            has_more: u64::from(self.page) < total_pages,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub total: u64,
    pub limit: u32,
    pub page: u32,
    pub total_pages: u64,
    pub offset: u64,
    pub has_more: bool,
}

impl PageWindow {
    /// Zeroed totals for a request whose data could not be loaded.
    pub fn empty(request: PageRequest) -> Self {
        request.window(0)
    }
}

/// Offset based window used by the health topic listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetWindow {
    pub total: u64,
    pub limit: u32,
    pub offset: u64,
    pub has_more: bool,
}

impl OffsetWindow {
    pub fn new(total: u64, limit: u32, offset: u64) -> Self {
        Self {
            total,
            limit,
            offset,
            has_more: offset.saturating_add(u64::from(limit)) < total,
        }
    }
}
