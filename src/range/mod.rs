//! Range pagination
//!
//! Inclusive `start`-`end` index ranges over a named unit, modeled on the
//! HTTP `Range` header but accepting any single-word unit:
//!
//! ```text
//! items=0-24      -> start 0, end 24
//! bytes=100-199   -> start 100, end 199, unit "bytes"
//! items=50-       -> start 50, end 50 + DEFAULT_PAGE_SIZE - 1
//! ```
//!
//! An empty header means "no range" and parses to `Ok(None)`.

mod parser;
mod types;

pub use parser::parse_range_header;
pub use types::Range;
