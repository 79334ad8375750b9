//! Response envelope types

use crate::pagination::OffsetPaginator;
use crate::range::Range;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

// ============================================================================
// Offset Page
// ============================================================================

/// One page of offset-paginated results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// Total items across all pages
    pub total: i64,
    /// Current page (1-indexed)
    pub page: u32,
    /// Items per page
    pub page_size: u32,
    /// Number of pages, 0 when there are no items
    pub total_pages: u32,
    /// A page before this one exists
    pub has_prev: bool,
    /// A page after this one exists
    pub has_next: bool,
}

impl<T> Page<T> {
    /// Build a page from its items, the total item count and the paginator
    pub fn new(items: Vec<T>, total: i64, paginator: &OffsetPaginator) -> Self {
        Self {
            items,
            total,
            page: paginator.page,
            page_size: paginator.page_size,
            total_pages: paginator.total_pages(total),
            has_prev: paginator.has_previous(),
            has_next: paginator.has_next(total),
        }
    }

    /// True when there are no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items
    pub fn count(&self) -> usize {
        self.items.len()
    }
}

// ============================================================================
// Cursor Page
// ============================================================================

/// One page of cursor-paginated results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CursorPage<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// Token for the following page, empty when none
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub next_cursor: String,
    /// Token for the preceding page, empty when none
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prev_cursor: String,
    /// More items follow this page
    pub has_more: bool,
    /// Requested page size
    pub limit: u32,
}

impl<T> CursorPage<T> {
    /// Build a page with explicit cursors in both directions
    pub fn new(
        items: Vec<T>,
        limit: u32,
        next_cursor: impl Into<String>,
        prev_cursor: impl Into<String>,
        has_more: bool,
    ) -> Self {
        Self {
            items,
            next_cursor: next_cursor.into(),
            prev_cursor: prev_cursor.into(),
            has_more,
            limit,
        }
    }

    /// Forward-only page: `has_more` is true iff a next cursor is given
    pub fn simple(items: Vec<T>, limit: u32, next_cursor: impl Into<String>) -> Self {
        let next_cursor = next_cursor.into();
        Self {
            items,
            has_more: !next_cursor.is_empty(),
            next_cursor,
            prev_cursor: String::new(),
            limit,
        }
    }

    /// True when there are no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items
    pub fn count(&self) -> usize {
        self.items.len()
    }
}

// ============================================================================
// GraphQL Connection
// ============================================================================

/// A node with the cursor pointing at it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<T> {
    /// The item
    pub node: T,
    /// Token pointing at this item
    pub cursor: String,
}

/// Navigation metadata for a connection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Items exist before the first edge
    pub has_previous_page: bool,
    /// Items exist after the last edge
    pub has_next_page: bool,
    /// Cursor of the first edge, empty for no edges
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub start_cursor: String,
    /// Cursor of the last edge, empty for no edges
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub end_cursor: String,
}

/// Relay-style connection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection<T> {
    /// Items with their cursors
    pub edges: Vec<Edge<T>>,
    /// Navigation metadata
    pub page_info: PageInfo,
    /// Total items, omitted when 0
    #[serde(default, skip_serializing_if = "is_zero")]
    pub total_count: i64,
}

fn is_zero(n: &i64) -> bool {
    *n == 0
}

impl<T> Connection<T> {
    /// Build a connection, asking `cursor_fn` for each item's cursor.
    ///
    /// `has_prev` and `has_next` come from the caller's own pagination logic.
    pub fn new<F>(
        items: Vec<T>,
        mut cursor_fn: F,
        has_prev: bool,
        has_next: bool,
        total: i64,
    ) -> Self
    where
        F: FnMut(&T) -> String,
    {
        Self::try_new(
            items,
            |node| Ok::<_, Infallible>(cursor_fn(node)),
            has_prev,
            has_next,
            total,
        )
        .unwrap_or_else(|never| match never {})
    }

    /// Like [`Connection::new`] with a fallible cursor function, e.g. one that
    /// encodes a [`CursorData`](crate::cursor::CursorData)
    pub fn try_new<F, E>(
        items: Vec<T>,
        mut cursor_fn: F,
        has_prev: bool,
        has_next: bool,
        total: i64,
    ) -> Result<Self, E>
    where
        F: FnMut(&T) -> Result<String, E>,
    {
        let edges = items
            .into_iter()
            .map(|node| {
                Ok(Edge {
                    cursor: cursor_fn(&node)?,
                    node,
                })
            })
            .collect::<Result<Vec<Edge<T>>, E>>()?;

        let start_cursor = edges.first().map(|e| e.cursor.clone()).unwrap_or_default();
        let end_cursor = edges.last().map(|e| e.cursor.clone()).unwrap_or_default();

        Ok(Self {
            edges,
            page_info: PageInfo {
                has_previous_page: has_prev,
                has_next_page: has_next,
                start_cursor,
                end_cursor,
            },
            total_count: total,
        })
    }

    /// True when there are no items
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of items
    pub fn count(&self) -> usize {
        self.edges.len()
    }

    /// The nodes without their cursors
    pub fn nodes(&self) -> Vec<&T> {
        self.edges.iter().map(|e| &e.node).collect()
    }

    /// Consume the connection, keeping only the nodes
    pub fn into_nodes(self) -> Vec<T> {
        self.edges.into_iter().map(|e| e.node).collect()
    }
}

// ============================================================================
// Range Response
// ============================================================================

/// Items returned for a range request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeResponse<T> {
    /// Items in the range
    pub items: Vec<T>,
    /// Index of the first item
    pub start: i64,
    /// Index of the last item returned
    pub end: i64,
    /// Total items, negative when unknown
    pub total: i64,
    /// Range unit, e.g. "items"
    pub unit: String,
}

impl<T> RangeResponse<T> {
    /// Build a response; `end` reflects the items actually returned, not the
    /// requested range.
    pub fn new(items: Vec<T>, range: &Range, total: i64) -> Self {
        let end = if items.is_empty() {
            range.start
        } else {
            range.start.saturating_add(items.len() as i64 - 1)
        };
        Self {
            items,
            start: range.start,
            end,
            total,
            unit: range.unit.clone(),
        }
    }

    /// `Content-Range` value: `unit start-end/total`, or `unit */total` when
    /// nothing was returned. A negative total renders as `*`.
    pub fn content_range(&self) -> String {
        let total = if self.total < 0 {
            "*".to_string()
        } else {
            self.total.to_string()
        };
        if self.items.is_empty() {
            format!("{} */{total}", self.unit)
        } else {
            format!("{} {}-{}/{total}", self.unit, self.start, self.end)
        }
    }

    /// True when items exist past `end`
    pub fn has_more(&self) -> bool {
        self.end < self.total.saturating_sub(1)
    }

    /// True when there are no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items
    pub fn count(&self) -> usize {
        self.items.len()
    }
}
