//! Cursor pagination

use super::clamp_page_size;
use crate::config::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, MIN_PAGE_SIZE};
use crate::cursor::{decode_cursor, CursorData};
use crate::error::{Error, Result};
use crate::types::{positive_u32, ParamSource};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Cursor-based pagination parameters.
///
/// An empty cursor means "start from the natural beginning" in the given
/// direction. Common request shapes:
/// - `?cursor=abc&limit=20`
/// - `?after=abc&limit=20` / `?before=abc&limit=20`
/// - `?first=20&after=abc` / `?last=20&before=abc` (GraphQL style)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CursorPaginator {
    /// Opaque position token, empty for none
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cursor: String,
    /// Maximum items per page
    pub limit: u32,
    /// `true` pages forward (after the cursor), `false` backward (before it)
    pub forward: bool,
}

impl Default for CursorPaginator {
    fn default() -> Self {
        Self {
            cursor: String::new(),
            limit: DEFAULT_PAGE_SIZE,
            forward: true,
        }
    }
}

impl CursorPaginator {
    /// Create a forward paginator with no cursor and the default limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paginator with a specific limit
    pub fn with_limit_value(limit: i64) -> Self {
        Self::new().with_limit(limit)
    }

    /// Copy with another limit, clamped into bounds
    #[must_use]
    pub fn with_limit(&self, limit: i64) -> Self {
        Self {
            limit: clamp_page_size(limit),
            ..self.clone()
        }
    }

    /// Copy with another cursor
    #[must_use]
    pub fn with_cursor(&self, cursor: impl Into<String>) -> Self {
        Self {
            cursor: cursor.into(),
            ..self.clone()
        }
    }

    /// Copy with another direction
    #[must_use]
    pub fn with_forward(&self, forward: bool) -> Self {
        Self {
            forward,
            ..self.clone()
        }
    }

    /// True when a cursor is set
    pub fn has_cursor(&self) -> bool {
        !self.cursor.is_empty()
    }

    /// Decode the cursor with a value of type `T`. `Ok(None)` without a cursor.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<Option<CursorData<T>>> {
        decode_cursor(&self.cursor)
    }

    /// Encode a payload into a token for the next request
    pub fn encode<T: Serialize>(&self, data: &CursorData<T>) -> Result<String> {
        data.encode()
    }

    /// Reject a limit outside the bounds or a cursor that does not decode
    pub fn validate(&self) -> Result<()> {
        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&self.limit) {
            return Err(Error::invalid_page_size(self.limit));
        }
        if self.has_cursor() {
            self.decode::<serde_json::Value>()?;
        }
        Ok(())
    }

    /// `after` or `before` (when a cursor is set) plus `limit`
    pub fn query_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        if self.has_cursor() {
            let key = if self.forward { "after" } else { "before" };
            params.insert(key.to_string(), self.cursor.clone());
        }
        params.insert("limit".to_string(), self.limit.to_string());
        params
    }

    /// URL-encoded query string
    pub fn query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_params())
            .finish()
    }

    /// Lenient parse from query parameters.
    ///
    /// Applied in order, later keys overriding earlier ones: `cursor`,
    /// `after` (forward), `before` (backward), `limit`, `first` (limit,
    /// forward), `last` (limit, backward). Unusable numbers are ignored.
    pub fn from_query<P: ParamSource + ?Sized>(params: &P) -> Self {
        let mut paginator = Self::new();

        if let Some(cursor) = params.non_empty("cursor") {
            paginator = paginator.with_cursor(cursor);
        }
        if let Some(after) = params.non_empty("after") {
            paginator = paginator.with_cursor(after).with_forward(true);
        }
        if let Some(before) = params.non_empty("before") {
            paginator = paginator.with_cursor(before).with_forward(false);
        }

        if let Some(limit) = positive_u32(params, "limit") {
            paginator = paginator.with_limit(i64::from(limit));
        }
        if let Some(first) = positive_u32(params, "first") {
            paginator = paginator.with_limit(i64::from(first)).with_forward(true);
        }
        if let Some(last) = positive_u32(params, "last") {
            paginator = paginator.with_limit(i64::from(last)).with_forward(false);
        }

        paginator
    }
}
