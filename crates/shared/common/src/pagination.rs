//! Pagination policy for list endpoints.

use serde::{Deserialize, Serialize};

/// Page number used when the query omits or mangles `page`
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when the query omits or mangles `limit`
pub const DEFAULT_LIMIT: u64 = 10;

/// Upper bound on `limit`
pub const MAX_PAGE_SIZE: u64 = 100;

/// Largest offset the SQL drivers can bind (signed 64-bit)
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// Raw `?page=&limit=` query parameters.
///
/// Kept as strings so that unparseable values fall back to defaults
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Normalized page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn from_query(query: &PaginationQuery) -> Self {
        let page = positive_or(query.page.as_deref(), DEFAULT_PAGE);
        let limit = positive_or(query.limit.as_deref(), DEFAULT_LIMIT);
        Self::new(page, limit)
    }

    /// Calculate offset for database query. Pages beyond the bindable
    /// range map to the last bindable offset and come back empty.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit).min(MAX_OFFSET)
    }
}

impl From<PaginationQuery> for PageRequest {
    fn from(query: PaginationQuery) -> Self {
        Self::from_query(&query)
    }
}

fn positive_or(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|v| *v >= 1)
        .map(|v| v as u64)
        .unwrap_or(default)
}

/// One page of rows plus the full active count
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub request: PageRequest,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            request,
            total,
        }
    }
}

/// Paginated response envelope
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
}

impl<T> From<Page<T>> for Paginated<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            success: true,
            data: page.items,
            pagination: PaginationMeta {
                page: page.request.page,
                limit: page.request.limit,
                total: page.total,
            },
        }
    }
}
