//! Cursor payload and base64/JSON codec

use crate::error::{Error, Result};
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// URL-safe alphabet, padded output, padding optional on input
const CURSOR_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Data carried inside a cursor token.
///
/// Every field is optional. A payload with nothing set is still a valid
/// payload and encodes to `e30=` (`{}`), which is distinct from "no cursor".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct CursorData<T = serde_json::Value> {
    /// Identifier of the boundary record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Caller-defined sort key. A present `v` key always decodes to `Some`,
    /// even when it holds `null`.
    #[serde(
        rename = "v",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_value"
    )]
    pub value: Option<T>,

    /// Point in time, usually paired with `id` as a tie-breaker
    #[serde(rename = "ts", default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    /// Absolute position, for cursor APIs in front of offset backends
    #[serde(rename = "o", default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
}

/// Serde only calls this when the `v` key is present; a missing key uses `default`
fn present_value<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl<T> Default for CursorData<T> {
    fn default() -> Self {
        Self {
            id: None,
            value: None,
            timestamp: None,
            offset: None,
        }
    }
}

impl<T> CursorData<T> {
    /// Empty payload
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identifier
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the value
    #[must_use]
    pub fn with_value(mut self, value: T) -> Self {
        self.value = Some(value);
        self
    }

    /// Set the timestamp
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Set the offset
    #[must_use]
    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.value.is_none() && self.timestamp.is_none() && self.offset.is_none()
    }
}

impl<T: Serialize> CursorData<T> {
    /// Encode this payload into a token
    pub fn encode(&self) -> Result<String> {
        let json = serde_json::to_vec(self)?;
        Ok(CURSOR_ENGINE.encode(json))
    }
}

/// Encode an optional payload. `None` encodes to the empty token.
///
/// Fails only when the value cannot be serialized to JSON.
pub fn encode_cursor<T: Serialize>(data: Option<&CursorData<T>>) -> Result<String> {
    match data {
        Some(data) => data.encode(),
        None => Ok(String::new()),
    }
}

/// Decode a token into a payload whose value has type `T`.
///
/// The empty token decodes to `Ok(None)` so "first page" needs no special
/// casing. Bad base64 and bad JSON both surface as [`Error::InvalidCursor`].
pub fn decode_cursor<T: DeserializeOwned>(token: &str) -> Result<Option<CursorData<T>>> {
    if token.is_empty() {
        return Ok(None);
    }

    let bytes = CURSOR_ENGINE.decode(token).map_err(|e| {
        tracing::debug!(error = %e, "cursor is not valid base64");
        Error::InvalidCursor
    })?;

    let data = serde_json::from_slice(&bytes).map_err(|e| {
        tracing::debug!(error = %e, "cursor payload does not deserialize");
        Error::InvalidCursor
    })?;

    Ok(Some(data))
}

// ============================================================================
// Convenience constructors
// ============================================================================

/// Token carrying only an identifier
pub fn cursor_from_id(id: impl Into<String>) -> Result<String> {
    CursorData::<serde_json::Value>::new().with_id(id).encode()
}

/// Token carrying only a typed value
pub fn cursor_from_value<T: Serialize>(value: T) -> Result<String> {
    CursorData::new().with_value(value).encode()
}

/// Token carrying a timestamp with an identifier as tie-breaker
pub fn cursor_from_timestamp(timestamp: DateTime<Utc>, id: impl Into<String>) -> Result<String> {
    CursorData::<serde_json::Value>::new()
        .with_timestamp(timestamp)
        .with_id(id)
        .encode()
}

/// Token carrying only an absolute offset
pub fn cursor_from_offset(offset: i64) -> Result<String> {
    CursorData::<serde_json::Value>::new()
        .with_offset(offset)
        .encode()
}
