//! Cursor codec
//!
//! Turns a typed [`CursorData`] payload into an opaque token that is safe
//! to put in a URL query parameter, and back.
//!
//! # Wire format
//!
//! A token is the URL-safe base64 encoding of the JSON object
//! `{"id"?: string, "v"?: T, "ts"?: RFC 3339, "o"?: integer}`. Encoding
//! emits padding; decoding accepts padded and unpadded tokens.
//!
//! # Type fidelity
//!
//! The payload value is generic so a decoder can ask for the exact type the
//! encoder used. Decoding `CursorData<u64>` keeps a `u64`; decoding the same
//! token as `CursorData<serde_json::Value>` works too, but the caller then
//! owns any numeric interpretation.
//!
//! Tokens are not signed. Treat a decoded payload as untrusted input.

mod codec;

pub use codec::{
    cursor_from_id, cursor_from_offset, cursor_from_timestamp, cursor_from_value, decode_cursor,
    encode_cursor, CursorData,
};

#[cfg(test)]
mod tests;
