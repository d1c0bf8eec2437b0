//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Pagination parameters for list endpoints
///
/// Both values are always positive: absent, zero, negative or unparsable
/// inputs fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-indexed)
    pub page: u32,

    /// Number of items per page
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Create a new pagination with custom values
    pub fn new(page: u32, page_size: u32) -> Self {
        let page = if page == 0 { DEFAULT_PAGE } else { page };
        let page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        Self { page, page_size }
    }

    /// Build pagination from raw query string values
    pub fn from_raw(page: Option<&str>, page_size: Option<&str>) -> Self {
        Self::new(parse_positive(page), parse_positive(page_size))
    }

    /// Calculate the offset for database queries
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Get the limit for database queries
    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }
}

fn parse_positive(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .unwrap_or(0)
}

/// A single page of results together with the full result count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items in this page
    pub items: Vec<T>,

    /// Total number of items across all pages
    pub total: u64,

    /// Pagination the page was produced with
    pub pagination: Pagination,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, pagination: Pagination) -> Self {
        Self {
            items,
            total,
            pagination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_absent() {
        let pagination = Pagination::from_raw(None, None);

        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.page_size, 10);
        assert_eq!(pagination.offset(), 0);
    }

    #[test]
    fn test_zero_negative_and_garbage_fall_back() {
        assert_eq!(Pagination::from_raw(Some("0"), Some("0")), Pagination::default());
        assert_eq!(Pagination::from_raw(Some("-3"), Some("-1")), Pagination::default());
        assert_eq!(Pagination::from_raw(Some("abc"), Some("")), Pagination::default());
    }

    #[test]
    fn test_offset_and_limit() {
        let pagination = Pagination::from_raw(Some("3"), Some("25"));

        assert_eq!(pagination.offset(), 50);
        assert_eq!(pagination.limit(), 25);
    }

    #[test]
    fn test_large_page_size_is_kept() {
        let pagination = Pagination::from_raw(Some("1"), Some("200"));

        assert_eq!(pagination.page_size, 200);
        assert_eq!(pagination.limit(), 200);
    }
}
