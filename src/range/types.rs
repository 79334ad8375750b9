//! Range value type

use super::parser::parse_range_header;
use crate::config::{DEFAULT_PAGE_SIZE, DEFAULT_RANGE_UNIT};
use crate::error::{Error, Result};
use crate::pagination::{clamp_page_size, OffsetPaginator};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inclusive index range over a named unit.
///
/// A range with `end < start` can be built but has size 0 and fails
/// [`Range::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    /// First index (inclusive)
    pub start: i64,
    /// Last index (inclusive)
    pub end: i64,
    /// Unit name, e.g. "items" or "bytes"
    pub unit: String,
}

impl Range {
    /// Create a range over the default "items" unit
    pub fn new(start: i64, end: i64) -> Self {
        Self::with_unit(start, end, DEFAULT_RANGE_UNIT)
    }

    /// Create a range over a custom unit
    pub fn with_unit(start: i64, end: i64, unit: impl Into<String>) -> Self {
        Self {
            start,
            end,
            unit: unit.into(),
        }
    }

    /// Range covering `limit` items from `offset`.
    /// A non-positive limit yields the single item at `offset`.
    pub fn from_offset_limit(offset: i64, limit: i64) -> Self {
        let end = if limit <= 0 {
            offset
        } else {
            offset.saturating_add(limit - 1)
        };
        Self::new(offset, end)
    }

    /// Number of items covered: `end - start + 1`, or 0 when backwards
    pub fn size(&self) -> i64 {
        if self.end < self.start {
            return 0;
        }
        self.end.saturating_sub(self.start).saturating_add(1)
    }

    /// Reject a negative start or an end before the start
    pub fn validate(&self) -> Result<()> {
        if self.start < 0 {
            return Err(Error::invalid_offset(self.start));
        }
        if self.end < self.start {
            return Err(Error::backwards_range(self.start, self.end));
        }
        Ok(())
    }

    /// `LIMIT size OFFSET start`
    pub fn sql_clause(&self) -> String {
        format!("LIMIT {} OFFSET {}", self.size(), self.start)
    }

    /// `Range` header value, e.g. `items=0-24`
    pub fn header(&self) -> String {
        self.to_string()
    }

    /// `Content-Range` header value for this range.
    /// A negative `total` means unknown and renders as `*`.
    pub fn content_range_header(&self, total: i64) -> String {
        if total < 0 {
            format!("{} {}-{}/*", self.unit, self.start, self.end)
        } else {
            format!("{} {}-{}/{}", self.unit, self.start, self.end, total)
        }
    }

    /// Approximate offset paginator for this range.
    ///
    /// The range size becomes the page size (clamped, default when empty)
    /// and the page is `start / page_size + 1`. Ranges that do not sit on a
    /// page boundary do not map back exactly.
    pub fn to_paginator(&self) -> OffsetPaginator {
        let size = self.size();
        let page_size = if size <= 0 {
            DEFAULT_PAGE_SIZE
        } else {
            clamp_page_size(size)
        };
        let page = (self.start / i64::from(page_size)).saturating_add(1);
        OffsetPaginator::from_values(page, i64::from(page_size))
    }
}

impl From<&OffsetPaginator> for Range {
    fn from(paginator: &OffsetPaginator) -> Self {
        Self::from_offset_limit(paginator.offset(), i64::from(paginator.limit()))
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}-{}", self.unit, self.start, self.end)
    }
}

impl FromStr for Range {
    type Err = Error;

    /// Strict parse: unlike [`parse_range_header`], empty input is an error
    fn from_str(s: &str) -> Result<Self> {
        parse_range_header(s)?.ok_or_else(|| Error::malformed_range(s))
    }
}
