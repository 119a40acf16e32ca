//! Pagination utilities for list endpoints

/// Default page size for article listings
pub const DEFAULT_LIMIT: i64 = 10;

/// Largest page size a client may request
pub const MAX_LIMIT: i64 = 50;

/// Pagination metadata calculated from total results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Current page number (1-indexed)
    pub page: i64,
    /// Page size
    pub limit: i64,
    /// Total number of pages
    pub total_pages: i64,
    /// Number of items to skip
    pub offset: i64,
}

impl Pagination {
    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev_page(&self) -> bool {
        self.page > 1
    }
}

/// Check client-supplied paging parameters
///
/// Returns `None` unless `page >= 1` and `1 <= limit <= MAX_LIMIT`.
pub fn validate(page: i64, limit: i64) -> Option<(i64, i64)> {
    if page < 1 || !(1..=MAX_LIMIT).contains(&limit) {
        None
    } else {
        Some((page, limit))
    }
}

/// Calculate pagination metadata from total results and requested page
///
/// Pages past the end are kept as requested; they simply select no items.
///
/// # Examples
/// ```
/// use ennea_web::pagination::calculate_pagination;
///
/// // 25 results at 10 per page = 3 pages (10 + 10 + 5)
/// let p = calculate_pagination(25, 2, 10);
/// assert_eq!(p.total_pages, 3);
/// assert_eq!(p.offset, 10);
/// assert!(p.has_next_page());
/// ```
pub fn calculate_pagination(total_results: i64, page: i64, limit: i64) -> Pagination {
    let limit = limit.max(1);
    let page = page.max(1);
    let total_pages = (total_results + limit - 1) / limit;
    let offset = (page - 1) * limit;

    Pagination {
        page,
        limit,
        total_pages,
        offset,
    }
}
