//! Offset pagination shared by every list operation

use serde::{Deserialize, Serialize};

/// Page used when none is requested
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when none is requested
pub const DEFAULT_LIMIT: u32 = 10;

/// Largest page size a caller may request
pub const MAX_LIMIT: u32 = 100;

/// A normalized 1-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Build a request from optional caller input.
    ///
    /// Missing or zero values fall back to the defaults; `limit` is capped at
    /// [`MAX_LIMIT`].
    pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        Self::with_default_limit(page, limit, DEFAULT_LIMIT)
    }

    /// Same as [`PageRequest::new`] with a caller-chosen default page size
    pub fn with_default_limit(page: Option<u32>, limit: Option<u32>, default_limit: u32) -> Self {
        let page = page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE);
        let limit = limit
            .filter(|l| *l > 0)
            .unwrap_or(default_limit)
            .min(MAX_LIMIT);
        Self { page, limit }
    }

    /// First page with the given size
    pub fn first(limit: u32) -> Self {
        Self::new(None, Some(limit))
    }

    #[inline]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[inline]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Rows to skip: `(page - 1) * limit`
    #[inline]
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.limit)
    }

    /// Metadata for this request given a separately counted total
    pub fn meta(&self, total_count: i64) -> PaginationMeta {
        PaginationMeta::new(self.page, self.limit, total_count)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Pagination metadata returned alongside every list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub total_count: i64,
    pub total_pages: i64,
    pub current_page: u32,
    pub limit: u32,
}

impl PaginationMeta {
    /// Compute `totalPages = ceil(total / limit)`
    pub fn new(current_page: u32, limit: u32, total_count: i64) -> Self {
        let total_count = total_count.max(0);
        let per_page = i64::from(limit.max(1));
        Self {
            total_count,
            total_pages: (total_count + per_page - 1) / per_page,
            current_page,
            limit,
        }
    }

    /// Whether a page follows the current one
    pub fn has_next(&self) -> bool {
        i64::from(self.current_page) < self.total_pages
    }
}

/// One page of items plus the total across all pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_count: i64) -> Self {
        Self { items, total_count }
    }

    /// An empty page reporting zero total
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }

    /// Transform the items, keeping the total
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
        }
    }
}
