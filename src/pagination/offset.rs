//! Offset (page number) pagination

use super::clamp_page_size;
use crate::config::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, MIN_PAGE_SIZE};
use crate::error::{Error, Result};
use crate::types::{json_int, positive_u32, JsonObject, ParamSource};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Offset-based pagination parameters.
///
/// Pages are 1-indexed. Common request shapes:
/// - `?page=2&page_size=50`
/// - `?page=2&limit=50`
/// - `?page=2&per_page=50`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OffsetPaginator {
    /// Current page (1-indexed)
    pub page: u32,
    /// Items per page
    pub page_size: u32,
}

impl Default for OffsetPaginator {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl OffsetPaginator {
    /// Create a paginator on the default page with the default size
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paginator with a specific page size
    pub fn with_size(page_size: i64) -> Self {
        Self::new().with_page_size(page_size)
    }

    /// Create a paginator from page and page size, normalizing both
    pub fn from_values(page: i64, page_size: i64) -> Self {
        Self::new().with_page(page).with_page_size(page_size)
    }

    /// Copy with another page. Pages below 1 become [`DEFAULT_PAGE`].
    #[must_use]
    pub fn with_page(&self, page: i64) -> Self {
        let page = if page < 1 {
            DEFAULT_PAGE
        } else {
            u32::try_from(page).unwrap_or(u32::MAX)
        };
        Self { page, ..*self }
    }

    /// Copy with another page size, clamped into bounds
    #[must_use]
    pub fn with_page_size(&self, page_size: i64) -> Self {
        Self {
            page_size: clamp_page_size(page_size),
            ..*self
        }
    }

    /// Number of items to skip, computed in 64 bits (saturating)
    pub fn offset(&self) -> i64 {
        i64::from(self.page.saturating_sub(1)).saturating_mul(i64::from(self.page_size))
    }

    /// Number of items to take
    pub fn limit(&self) -> u32 {
        self.page_size
    }

    /// Reject a page below 1 or a page size outside the bounds
    pub fn validate(&self) -> Result<()> {
        if self.page < 1 {
            return Err(Error::invalid_page(self.page));
        }
        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(Error::invalid_page_size(self.page_size));
        }
        Ok(())
    }

    /// PostgreSQL/SQLite style `LIMIT n OFFSET m`
    pub fn sql_clause(&self) -> String {
        format!("LIMIT {} OFFSET {}", self.limit(), self.offset())
    }

    /// MySQL style `LIMIT m, n`
    pub fn sql_clause_mysql(&self) -> String {
        format!("LIMIT {}, {}", self.offset(), self.limit())
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// True when a previous page exists
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Previous page number, never below 1
    pub fn previous_page(&self) -> u32 {
        self.page.saturating_sub(1).max(1)
    }

    /// Next page number
    pub fn next_page(&self) -> u32 {
        self.page.saturating_add(1)
    }

    /// Total pages for `total` items, rounding up. Zero when there is nothing.
    pub fn total_pages(&self, total: i64) -> u32 {
        if total <= 0 || self.page_size == 0 {
            return 0;
        }
        let size = i64::from(self.page_size);
        let pages = total / size + i64::from(total % size > 0);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// True when a page after this one exists
    pub fn has_next(&self, total: i64) -> bool {
        self.page < self.total_pages(total)
    }

    /// True when this is the last non-empty page
    pub fn is_last_page(&self, total: i64) -> bool {
        let total_pages = self.total_pages(total);
        total_pages > 0 && self.page >= total_pages
    }

    /// True on page 1
    pub fn is_first_page(&self) -> bool {
        self.page == 1
    }

    /// True when this page starts at or past the end of `total` items
    pub fn is_empty(&self, total: i64) -> bool {
        self.offset() >= total
    }

    /// Copy with the page capped at the last page for `total` items
    #[must_use]
    pub fn clamp(&self, total: i64) -> Self {
        let max_page = self.total_pages(total).max(1);
        if self.page > max_page {
            self.with_page(i64::from(max_page))
        } else {
            *self
        }
    }

    /// Half-open index span `[start, end)` covered by this page
    pub fn items(&self) -> (i64, i64) {
        let start = self.offset();
        (start, start.saturating_add(i64::from(self.page_size)))
    }

    // ========================================================================
    // Query parameters
    // ========================================================================

    /// `page` and `page_size` as query parameters
    pub fn query_params(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("page".to_string(), self.page.to_string()),
            ("page_size".to_string(), self.page_size.to_string()),
        ])
    }

    /// URL-encoded query string, e.g. `page=2&page_size=20`
    pub fn query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_params())
            .finish()
    }

    /// Lenient parse from query parameters.
    ///
    /// Reads `page` and `page_size`. When `page_size` is absent, `limit`
    /// and `per_page` are read instead (`per_page` wins when both are
    /// usable). Unusable values are ignored.
    pub fn from_query<P: ParamSource + ?Sized>(params: &P) -> Self {
        let mut paginator = Self::new();

        if let Some(page) = positive_u32(params, "page") {
            paginator = paginator.with_page(i64::from(page));
        }

        let size_keys: &[&str] = if params.non_empty("page_size").is_some() {
            &["page_size"]
        } else {
            &["limit", "per_page"]
        };
        for key in size_keys {
            if let Some(size) = positive_u32(params, key) {
                paginator = paginator.with_page_size(i64::from(size));
            }
        }

        paginator
    }

    /// Lenient parse from a JSON object with `page` and `page_size`.
    ///
    /// Integers, floats (truncated) and numeric strings are accepted.
    pub fn from_json(object: &JsonObject) -> Self {
        let mut paginator = Self::new();

        if let Some(page) = object.get("page").and_then(json_int).filter(|p| *p > 0) {
            paginator = paginator.with_page(page);
        }
        if let Some(size) = object
            .get("page_size")
            .and_then(json_int)
            .filter(|s| *s > 0)
        {
            paginator = paginator.with_page_size(size);
        }

        paginator
    }
}
