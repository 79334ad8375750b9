//! Tests for the cursor codec

use super::*;
use crate::error::Error;
use base64::Engine as _;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

// ============================================================================
// Encoding
// ============================================================================

#[test]
fn test_encode_none_is_empty_token() {
    let token = encode_cursor::<Value>(None).unwrap();
    assert_eq!(token, "");
}

#[test]
fn test_encode_empty_payload_is_not_empty_token() {
    let token = CursorData::<Value>::new().encode().unwrap();
    assert_eq!(token, "e30=");

    let decoded = decode_cursor::<Value>(&token).unwrap().unwrap();
    assert!(decoded.is_empty());
}

#[test]
fn test_encode_uses_short_field_names() {
    let data = CursorData::new()
        .with_id("user_1")
        .with_value(7)
        .with_offset(3);
    let token = data.encode().unwrap();

    let raw = base64::engine::general_purpose::URL_SAFE
        .decode(&token)
        .unwrap();
    let json: Value = serde_json::from_slice(&raw).unwrap();
    assert_eq!(json, json!({"id": "user_1", "v": 7, "o": 3}));
}

#[test]
fn test_encode_timestamp_is_rfc3339() {
    let ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
    let token = cursor_from_timestamp(ts, "evt_9").unwrap();

    let raw = base64::engine::general_purpose::URL_SAFE
        .decode(&token)
        .unwrap();
    let json: Value = serde_json::from_slice(&raw).unwrap();
    assert_eq!(json["ts"], "2024-01-15T10:30:00Z");
    assert_eq!(json["id"], "evt_9");
}

#[test]
fn test_token_is_url_safe() {
    let token = cursor_from_id("???>>>~~~").unwrap();
    assert!(!token.contains('+'));
    assert!(!token.contains('/'));
}

// ============================================================================
// Decoding
// ============================================================================

#[test]
fn test_decode_empty_token_is_none() {
    assert!(decode_cursor::<Value>("").unwrap().is_none());
}

#[test]
fn test_decode_invalid_base64() {
    let err = decode_cursor::<Value>("not valid base64!!!").unwrap_err();
    assert!(matches!(err, Error::InvalidCursor));
}

#[test]
fn test_decode_invalid_json() {
    let token = base64::engine::general_purpose::URL_SAFE.encode("not json");
    let err = decode_cursor::<Value>(&token).unwrap_err();
    assert!(matches!(err, Error::InvalidCursor));
}

#[test]
fn test_decode_wrong_value_type() {
    let token = cursor_from_value("text").unwrap();
    let err = decode_cursor::<u64>(&token).unwrap_err();
    assert!(matches!(err, Error::InvalidCursor));
}

#[test]
fn test_decode_accepts_unpadded_token() {
    let padded = cursor_from_id("a").unwrap();
    assert!(padded.ends_with('='));

    let unpadded = padded.trim_end_matches('=');
    let data = decode_cursor::<Value>(unpadded).unwrap().unwrap();
    assert_eq!(data.id.as_deref(), Some("a"));
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn test_round_trip_all_fields() {
    let original = CursorData::new()
        .with_id("test_123")
        .with_value("some-value".to_string())
        .with_timestamp(Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).unwrap())
        .with_offset(42);

    let token = original.encode().unwrap();
    let decoded = decode_cursor::<String>(&token).unwrap().unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn test_round_trip_null_value() {
    let original = CursorData::new().with_value(Value::Null);

    let token = original.encode().unwrap();
    assert_eq!(token, "eyJ2IjpudWxsfQ==");
    let decoded = decode_cursor::<Value>(&token).unwrap().unwrap();
    assert_eq!(decoded, original);
    assert!(!decoded.is_empty());
}

#[test]
fn test_round_trip_option_value() {
    let original = CursorData::<Option<i32>>::new().with_value(None);

    let token = original.encode().unwrap();
    let decoded = decode_cursor::<Option<i32>>(&token).unwrap().unwrap();
    assert_eq!(decoded, original);
    assert_eq!(decoded.value, Some(None));
}

#[test]
fn test_missing_value_key_stays_none() {
    let decoded = decode_cursor::<Value>("e30=").unwrap().unwrap();
    assert_eq!(decoded.value, None);
}

#[test]
fn test_round_trip_keeps_integer_width() {
    let big = u64::MAX - 1;
    let token = cursor_from_value(big).unwrap();
    let decoded = decode_cursor::<u64>(&token).unwrap().unwrap();
    assert_eq!(decoded.value, Some(big));

    let token = cursor_from_value(42_i32).unwrap();
    let decoded = decode_cursor::<i32>(&token).unwrap().unwrap();
    assert_eq!(decoded.value, Some(42));
}

#[test]
fn test_round_trip_zero_offset_stays_present() {
    let token = cursor_from_offset(0).unwrap();
    let decoded = decode_cursor::<Value>(&token).unwrap().unwrap();
    assert_eq!(decoded.offset, Some(0));
    assert!(!decoded.is_empty());
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SortKey {
    created_at: i64,
    name: String,
}

#[test]
fn test_round_trip_struct_value() {
    let key = SortKey {
        created_at: 1_700_000_000_123,
        name: "Alice".to_string(),
    };
    let token = cursor_from_value(key.clone()).unwrap();
    let decoded = decode_cursor::<SortKey>(&token).unwrap().unwrap();
    assert_eq!(decoded.value, Some(key));
    assert_eq!(decoded.id, None);
}

#[test]
fn test_generic_value_decoding_keeps_integers() {
    let token = cursor_from_value(42_u64).unwrap();
    let decoded = decode_cursor::<Value>(&token).unwrap().unwrap();
    assert_eq!(decoded.value.as_ref().and_then(Value::as_u64), Some(42));
}

// ============================================================================
// Convenience constructors
// ============================================================================

#[test]
fn test_cursor_from_id() {
    let token = cursor_from_id("user_123").unwrap();
    let data = decode_cursor::<Value>(&token).unwrap().unwrap();
    assert_eq!(
        data,
        CursorData {
            id: Some("user_123".to_string()),
            ..CursorData::default()
        }
    );
}

#[test]
fn test_cursor_from_timestamp() {
    let ts = Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap();
    let token = cursor_from_timestamp(ts, "row_5").unwrap();
    let data = decode_cursor::<Value>(&token).unwrap().unwrap();
    assert_eq!(data.timestamp, Some(ts));
    assert_eq!(data.id.as_deref(), Some("row_5"));
    assert_eq!(data.offset, None);
}

#[test]
fn test_cursor_from_offset() {
    let token = cursor_from_offset(100).unwrap();
    let data = decode_cursor::<Value>(&token).unwrap().unwrap();
    assert_eq!(data.offset, Some(100));
    assert_eq!(data.id, None);
}
