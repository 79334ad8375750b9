// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # pagekit
//!
//! Pagination primitives for HTTP APIs: offset, cursor and range
//! pagination, an opaque cursor codec, `Range` header parsing and the
//! response envelopes and headers that go with them.
//!
//! ## Features
//!
//! - **Offset pagination**: page/page_size with clamping, SQL clauses and navigation
//! - **Cursor pagination**: opaque URL-safe tokens carrying id, value, timestamp or offset
//! - **Range pagination**: `Range: items=0-24` parsing and `Content-Range` formatting
//! - **Envelopes**: offset pages, cursor pages, GraphQL connections, range responses
//! - **Link headers**: RFC 5988 `first`/`prev`/`next`/`last` relations
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagekit::{LinkHeader, OffsetPaginator, Page};
//!
//! let paginator = OffsetPaginator::from_query(&query_pairs);
//! let rows = db.fetch(paginator.offset(), paginator.limit())?;
//!
//! let links = LinkHeader::build("https://api.example.com/users", &paginator, total);
//! links.apply(|name, value| response.insert_header(name, value));
//!
//! let body = Page::new(rows, total, &paginator);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │   request params ──► Paginator ──► (offset, limit) / cursor   │
//! └───────────────────────────────────────────────────────────────┘
//!                                │
//! ┌───────────────┬──────────────┴───────┬────────────────────────┐
//! │  pagination   │   cursor / range     │   response             │
//! ├───────────────┼──────────────────────┼────────────────────────┤
//! │ Offset        │ CursorData codec     │ Page / CursorPage      │
//! │ Cursor        │ Range header parser  │ Connection             │
//! │               │ Range                │ RangeResponse / Link   │
//! └───────────────┴──────────────────────┴────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Bounds, defaults and server configuration
pub mod config;

/// Common types and parameter sources
pub mod types;

/// Opaque cursor tokens
pub mod cursor;

/// Offset and cursor paginators
pub mod pagination;

/// Range header parsing and formatting
pub mod range;

/// Response envelopes and Link headers
pub mod response;

/// Command-line interface and demo server
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use cursor::{
    cursor_from_id, cursor_from_offset, cursor_from_timestamp, cursor_from_value, decode_cursor,
    encode_cursor, CursorData,
};
pub use pagination::{clamp_page_size, CursorPaginator, OffsetPaginator};
pub use range::{parse_range_header, Range};
pub use response::{Connection, CursorPage, Edge, LinkHeader, Page, PageInfo, RangeResponse};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
