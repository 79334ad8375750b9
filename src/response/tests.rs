//! Tests for response envelopes and link headers

use super::*;
use crate::cursor::{cursor_from_id, decode_cursor};
use crate::pagination::OffsetPaginator;
use crate::range::Range;
use serde_json::{json, Value};
use test_case::test_case;

// ============================================================================
// Page Tests
// ============================================================================

#[test]
fn test_new_page() {
    let p = OffsetPaginator::from_values(2, 10);
    let page = Page::new(vec![11, 12, 13], 25, &p);

    assert_eq!(page.page, 2);
    assert_eq!(page.page_size, 10);
    assert_eq!(page.total_pages, 3);
    assert!(page.has_prev);
    assert!(page.has_next);
    assert_eq!(page.count(), 3);
    assert!(!page.is_empty());
}

#[test]
fn test_page_serialization() {
    let page = Page::new(vec!["a"], 1, &OffsetPaginator::new());
    assert_eq!(
        serde_json::to_value(&page).unwrap(),
        json!({
            "items": ["a"],
            "total": 1,
            "page": 1,
            "page_size": 20,
            "total_pages": 1,
            "has_prev": false,
            "has_next": false
        })
    );
}

#[test]
fn test_empty_page() {
    let page: Page<i32> = Page::new(vec![], 0, &OffsetPaginator::new());
    assert!(page.is_empty());
    assert_eq!(page.total_pages, 0);
    assert!(!page.has_next);
}

// ============================================================================
// CursorPage Tests
// ============================================================================

#[test]
fn test_new_cursor_page() {
    let page = CursorPage::new(vec![1, 2], 2, "next", "prev", true);
    assert_eq!(page.next_cursor, "next");
    assert_eq!(page.prev_cursor, "prev");
    assert!(page.has_more);
    assert_eq!(page.limit, 2);
    assert_eq!(page.count(), 2);
}

#[test]
fn test_cursor_page_simple() {
    let page = CursorPage::simple(vec![1], 1, "abc");
    assert!(page.has_more);
    assert_eq!(page.prev_cursor, "");

    let last = CursorPage::simple(vec![1], 1, "");
    assert!(!last.has_more);
}

#[test]
fn test_cursor_page_omits_empty_cursors() {
    let page = CursorPage::simple(Vec::<i32>::new(), 20, "");
    assert!(page.is_empty());
    assert_eq!(
        serde_json::to_value(&page).unwrap(),
        json!({"items": [], "has_more": false, "limit": 20})
    );
}

// ============================================================================
// Connection Tests
// ============================================================================

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
struct User {
    id: String,
}

fn users(ids: &[&str]) -> Vec<User> {
    ids.iter()
        .map(|id| User {
            id: (*id).to_string(),
        })
        .collect()
}

#[test]
fn test_new_connection() {
    let conn = Connection::new(
        users(&["1", "2", "3"]),
        |u| format!("c{}", u.id),
        false,
        true,
        10,
    );

    assert_eq!(conn.count(), 3);
    assert_eq!(conn.edges[1].cursor, "c2");
    assert_eq!(conn.page_info.start_cursor, "c1");
    assert_eq!(conn.page_info.end_cursor, "c3");
    assert!(!conn.page_info.has_previous_page);
    assert!(conn.page_info.has_next_page);
    assert_eq!(conn.total_count, 10);
}

#[test]
fn test_connection_try_new_with_encoded_cursors() {
    let conn = Connection::try_new(users(&["7"]), |u| cursor_from_id(&u.id), false, false, 1)
        .unwrap();

    let data = decode_cursor::<Value>(&conn.edges[0].cursor)
        .unwrap()
        .unwrap();
    assert_eq!(data.id.as_deref(), Some("7"));
}

#[test]
fn test_connection_try_new_propagates_errors() {
    let result = Connection::try_new(
        users(&["1", "2"]),
        |u| {
            if u.id == "2" {
                Err("boom")
            } else {
                Ok(u.id.clone())
            }
        },
        false,
        false,
        0,
    );
    assert_eq!(result.unwrap_err(), "boom");
}

#[test]
fn test_empty_connection() {
    let conn = Connection::new(Vec::<User>::new(), |u| u.id.clone(), false, false, 0);
    assert!(conn.is_empty());
    assert_eq!(conn.page_info, PageInfo::default());
    assert_eq!(
        serde_json::to_value(&conn).unwrap(),
        json!({
            "edges": [],
            "page_info": {"has_previous_page": false, "has_next_page": false}
        })
    );
}

#[test]
fn test_connection_nodes() {
    let conn = Connection::new(users(&["a", "b"]), |u| u.id.clone(), false, false, 2);
    let ids: Vec<&str> = conn.nodes().iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(conn.into_nodes(), users(&["a", "b"]));
}

// ============================================================================
// RangeResponse Tests
// ============================================================================

#[test]
fn test_new_range_response() {
    let r = Range::new(0, 24);
    let resp = RangeResponse::new(vec!["a", "b", "c"], &r, 100);
    assert_eq!(resp.start, 0);
    assert_eq!(resp.end, 2);
    assert_eq!(resp.unit, "items");
    assert_eq!(resp.count(), 3);
    assert!(resp.has_more());
}

#[test]
fn test_range_response_content_range() {
    let r = Range::new(0, 24);

    let resp = RangeResponse::new(vec!["a", "b", "c"], &r, 100);
    assert_eq!(resp.content_range(), "items 0-2/100");

    let empty = RangeResponse::new(Vec::<&str>::new(), &r, 100);
    assert!(empty.is_empty());
    assert_eq!(empty.content_range(), "items */100");

    let unknown = RangeResponse::new(vec!["a"], &r, -1);
    assert_eq!(unknown.content_range(), "items 0-0/*");
}

#[test]
fn test_range_response_has_more() {
    let r = Range::new(8, 9);
    let resp = RangeResponse::new(vec![9, 10], &r, 10);
    assert!(!resp.has_more());
}

#[test]
fn test_range_response_at_i64_max() {
    let r = crate::range::parse_range_header(&format!("items={0}-{0}", i64::MAX))
        .unwrap()
        .unwrap();
    let resp = RangeResponse::new(vec![1], &r, -1);
    assert_eq!(resp.start, i64::MAX);
    assert_eq!(resp.end, i64::MAX);
    assert_eq!(
        resp.content_range(),
        format!("items {0}-{0}/*", i64::MAX)
    );
}

#[test]
fn test_range_response_has_more_with_min_total() {
    let resp = RangeResponse::new(vec![1], &Range::new(0, 0), i64::MIN);
    assert!(!resp.has_more());
}

// ============================================================================
// LinkHeader Tests
// ============================================================================

#[test]
fn test_build_link_header() {
    let p = OffsetPaginator::from_values(3, 20);
    let links = LinkHeader::build("https://api.example.com/users", &p, 100);

    assert_eq!(
        links.first.as_deref(),
        Some("https://api.example.com/users?page=1&page_size=20")
    );
    assert_eq!(
        links.prev.as_deref(),
        Some("https://api.example.com/users?page=2&page_size=20")
    );
    assert_eq!(
        links.next.as_deref(),
        Some("https://api.example.com/users?page=4&page_size=20")
    );
    assert_eq!(
        links.last.as_deref(),
        Some("https://api.example.com/users?page=5&page_size=20")
    );
}

#[test_case(1, 100 => (false, true) ; "first page")]
#[test_case(5, 100 => (true, false) ; "last page")]
#[test_case(3, 100 => (true, true) ; "middle page")]
#[test_case(1, 20 => (false, false) ; "only page")]
#[test_case(1, 0 => (false, false) ; "empty results")]
fn test_link_header_relations(page: i64, total: i64) -> (bool, bool) {
    let links = LinkHeader::build("https://example.com", &OffsetPaginator::from_values(page, 20), total);
    (links.prev.is_some(), links.next.is_some())
}

#[test]
fn test_link_header_string() {
    let links = LinkHeader::build("/users", &OffsetPaginator::from_values(2, 10), 30);
    assert_eq!(
        links.to_string(),
        "</users?page=1&page_size=10>; rel=\"first\", \
         </users?page=1&page_size=10>; rel=\"prev\", \
         </users?page=3&page_size=10>; rel=\"next\", \
         </users?page=3&page_size=10>; rel=\"last\""
    );
}

#[test]
fn test_link_header_partial() {
    let links = LinkHeader {
        first: Some("/a".to_string()),
        next: Some("/b".to_string()),
        ..LinkHeader::default()
    };
    assert_eq!(links.to_string(), "</a>; rel=\"first\", </b>; rel=\"next\"");
}

#[test]
fn test_link_header_keeps_existing_query() {
    let links = LinkHeader::build("/users?sort=name", &OffsetPaginator::new(), 5);
    assert_eq!(
        links.first.as_deref(),
        Some("/users?sort=name&page=1&page_size=20")
    );
}

#[test]
fn test_empty_link_header_is_not_applied() {
    let links = LinkHeader::build("/users", &OffsetPaginator::new(), 0);
    assert!(links.is_empty());
    assert_eq!(links.to_string(), "");

    let mut calls = Vec::new();
    links.apply(|name, value| calls.push((name.to_string(), value.to_string())));
    assert!(calls.is_empty());

    let links = LinkHeader::build("/users", &OffsetPaginator::new(), 5);
    links.apply(|name, value| calls.push((name.to_string(), value.to_string())));
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "Link");
}
