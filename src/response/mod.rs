//! Response envelopes and header builders
//!
//! Plain serializable views assembled from a slice of items plus the
//! paginator that produced it:
//!
//! - [`Page`] for offset pagination
//! - [`CursorPage`] for cursor pagination
//! - [`Connection`] for GraphQL-style edges and page info
//! - [`RangeResponse`] for range pagination, with its `Content-Range` value
//! - [`LinkHeader`] for RFC 5988 `Link` headers

mod link;
mod types;

pub use link::LinkHeader;
pub use types::{Connection, CursorPage, Edge, Page, PageInfo, RangeResponse};

#[cfg(test)]
mod tests;
