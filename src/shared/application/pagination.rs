/// Pagination support for listing queries
///
/// Listings are always served in fixed-size pages; callers only choose the
/// page number. Out-of-range pages yield an empty page, never an error.
use serde::{Deserialize, Serialize};

pub const PAGE_SIZE: u32 = 20;

/// Pagination parameters for queries
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PaginationParams {
    page: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl PaginationParams {
    /// Page numbers start at 1; zero is treated as the first page.
    pub fn new(page: u32) -> Self {
        Self { page: page.max(1) }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Calculate offset for database queries
    pub fn offset(&self) -> i64 {
        ((self.page - 1) * PAGE_SIZE) as i64
    }

    /// Get limit for database queries
    pub fn limit(&self) -> i64 {
        PAGE_SIZE as i64
    }
}

/// Paginated result wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total_count: u64, params: &PaginationParams) -> Self {
        let total_pages = ((total_count as f64) / (PAGE_SIZE as f64)).ceil() as u32;

        Self {
            items,
            total_count,
            page: params.page(),
            page_size: PAGE_SIZE,
            total_pages,
        }
    }
}
