//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-indexed).
    #[serde(default = "default_page")]
    pub page: u32,
    /// Number of records per page.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    50
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl PageRequest {
    /// Creates a request for the given page and page size.
    ///
    /// Page numbers below 1 are clamped to 1, and a zero limit to 1.
    #[must_use]
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    /// Returns the request for the following page.
    #[must_use]
    pub fn next(self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            ..self
        }
    }
}

/// Pagination metadata as reported by the ledger backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Current page number.
    pub current_page: u32,
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of records across all pages.
    pub total_records: u64,
    /// Records per page.
    pub limit: u32,
    /// Whether a following page exists.
    pub has_next: bool,
    /// Whether a preceding page exists.
    #[serde(rename = "hasPrev")]
    pub has_previous: bool,
}

impl PageMeta {
    /// Builds metadata from the raw counts.
    ///
    /// An empty result set still reports one (empty) page.
    #[must_use]
    pub fn from_counts(current_page: u32, limit: u32, total_records: u64) -> Self {
        let limit = limit.max(1);
        let total_pages = if total_records == 0 {
            1
        } else {
            u32::try_from(total_records.div_ceil(u64::from(limit))).unwrap_or(u32::MAX)
        };

        Self {
            current_page,
            total_pages,
            total_records,
            limit,
            has_next: current_page < total_pages,
            has_previous: current_page > 1,
        }
    }

    /// Returns the next page number, if there is one.
    #[must_use]
    pub fn next_page(&self) -> Option<u32> {
        self.has_next.then(|| self.current_page.saturating_add(1))
    }
}

/// Response wrapper for paginated data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The records in the current page.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub pagination: PageMeta,
}
