//! Pagination module
//!
//! Supports: Offset (page/page_size) and Cursor (opaque token + limit + direction)
//!
//! # Overview
//!
//! Paginators are small immutable values. The `with_*` methods return a new
//! paginator and never touch the receiver, so one instance can be shared
//! across threads freely.
//!
//! Parsing from untrusted input is lenient: `from_query` replaces any
//! missing or unusable field with its default and never fails. Call
//! `validate` afterwards when out-of-bounds input must be rejected.

mod cursor;
mod offset;

pub use cursor::CursorPaginator;
pub use offset::OffsetPaginator;

use crate::config::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, MIN_PAGE_SIZE};

/// Normalize a requested page size: below the minimum falls back to the
/// default, above the maximum is capped.
pub fn clamp_page_size(size: i64) -> u32 {
    if size < i64::from(MIN_PAGE_SIZE) {
        DEFAULT_PAGE_SIZE
    } else if size > i64::from(MAX_PAGE_SIZE) {
        MAX_PAGE_SIZE
    } else {
        size as u32
    }
}
