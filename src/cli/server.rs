//! Demo HTTP server exposing every pagination style over one record list

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{Duration, Utc};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::cursor::cursor_from_id;
use crate::error::{Error, Result, ResultExt};
use crate::pagination::{CursorPaginator, OffsetPaginator};
use crate::range::{parse_range_header, Range};
use crate::response::{Connection, CursorPage, LinkHeader, Page, RangeResponse};

/// Records served when no data file is configured
const SAMPLE_USERS: [(&str, &str); 10] = [
    ("1", "Alice"),
    ("2", "Bob"),
    ("3", "Charlie"),
    ("4", "Diana"),
    ("5", "Eve"),
    ("6", "Frank"),
    ("7", "Grace"),
    ("8", "Henry"),
    ("9", "Iris"),
    ("10", "Jack"),
];

/// App state shared across handlers
#[derive(Debug, Clone)]
pub struct AppState {
    config: ServerConfig,
    records: Vec<Value>,
}

impl AppState {
    /// State over an explicit record list. Every record needs a string `id`.
    pub fn new(config: ServerConfig, records: Vec<Value>) -> Result<Self> {
        if let Some(pos) = records.iter().position(|r| record_id(r).is_none()) {
            return Err(Error::config(format!(
                "record {pos} has no string 'id' field"
            )));
        }
        Ok(Self { config, records })
    }

    /// State from config: the data file when set, the sample users otherwise
    pub fn from_config(config: ServerConfig) -> Result<Self> {
        let records = match &config.data_file {
            Some(path) => load_records(path)?,
            None => sample_users(),
        };
        tracing::info!(records = records.len(), "loaded records");
        Self::new(config, records)
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn records(&self) -> &[Value] {
        &self.records
    }

    fn total(&self) -> i64 {
        self.records.len() as i64
    }

    fn position_of(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| record_id(r) == Some(id))
    }
}

/// Ten users with ids "1" through "10", oldest first
pub fn sample_users() -> Vec<Value> {
    let now = Utc::now();
    SAMPLE_USERS
        .iter()
        .enumerate()
        .map(|(i, (id, name))| {
            let age_hours = 100 - 10 * i as i64;
            json!({
                "id": id,
                "name": name,
                "email": format!("{}@example.com", name.to_lowercase()),
                "created_at": now - Duration::hours(age_hours),
            })
        })
        .collect()
}

fn load_records(path: &Path) -> Result<Vec<Value>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read data file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Data file {} is not a JSON array", path.display()))
}

fn record_id(record: &Value) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}

// ============================================================================
// Responses
// ============================================================================

/// Response wrapper
#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn error(msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

/// Handler error carrying the status from [`Error::status_code`]
struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::debug!(error = %self.0, status = status.as_u16(), "rejected request");
        }
        (status, Json(ApiResponse::<()>::error(self.0.to_string()))).into_response()
    }
}

type ApiResult = std::result::Result<Response, ApiError>;

// ============================================================================
// Server
// ============================================================================

/// Build the router; exposed so tests can drive it without a socket
pub fn router(state: AppState) -> Router {
    // Build CORS layer - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([header::LINK, header::CONTENT_RANGE, header::ACCEPT_RANGES]);

    Router::new()
        .route("/health", get(health))
        .route("/users/offset", get(users_offset))
        .route("/users/cursor", get(users_cursor))
        .route("/users/range", get(users_range))
        .route("/users/graphql", get(users_graphql))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the HTTP server
pub async fn serve(state: AppState) -> Result<()> {
    let addr = state.config.bind_addr();
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to {addr}: {e}")))?;

    tracing::info!("Starting HTTP server on http://{}", addr);
    tracing::info!("Try GET /users/offset?page=1&page_size=3");
    tracing::info!("Try GET /users/cursor?limit=3");
    tracing::info!("Try GET /users/range with 'Range: items=0-2'");
    tracing::info!("Try GET /users/graphql?first=3");

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::success(json!({
        "status": "ok",
        "version": crate::VERSION,
        "records": state.records.len(),
    })))
}

/// Offset page with a Link header
async fn users_offset(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> ApiResult {
    let paginator = OffsetPaginator::from_query(&params);
    paginator.validate()?;

    let total = state.total();
    let (start, end) = window(paginator.offset(), i64::from(paginator.limit()), total);
    let items = state.records[start..end].to_vec();
    tracing::debug!(page = paginator.page, start, end, "serving offset page");

    let base_url = link_base(&state.config, &headers, "/users/offset");
    let links = LinkHeader::build(&base_url, &paginator, total);

    let mut response_headers = HeaderMap::new();
    links.apply(|name, value| {
        if let (Ok(name), Ok(value)) = (HeaderName::try_from(name), HeaderValue::from_str(value)) {
            response_headers.insert(name, value);
        }
    });

    Ok((response_headers, Json(Page::new(items, total, &paginator))).into_response())
}

/// Cursor page; cursors carry the id of the boundary record
async fn users_cursor(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult {
    let paginator = CursorPaginator::from_query(&params);
    let (start, end) = cursor_window(&state, &paginator)?;
    let items = &state.records[start..end];

    let next_cursor = match items.last() {
        Some(last) if end < state.records.len() => cursor_from_id(record_id(last).unwrap_or_default())?,
        _ => String::new(),
    };
    let prev_cursor = match items.first() {
        Some(first) if start > 0 => cursor_from_id(record_id(first).unwrap_or_default())?,
        _ => String::new(),
    };
    tracing::debug!(start, end, forward = paginator.forward, "serving cursor page");

    let has_more = !next_cursor.is_empty();
    let page = CursorPage::new(
        items.to_vec(),
        paginator.limit,
        next_cursor,
        prev_cursor,
        has_more,
    );
    Ok(Json(page).into_response())
}

/// Range response driven by the `Range` request header
async fn users_range(State(state): State<Arc<AppState>>, headers: HeaderMap) -> ApiResult {
    let unit = state.config.range_unit.as_str();

    let requested = match headers.get(header::RANGE) {
        Some(value) => {
            let value = value
                .to_str()
                .map_err(|_| Error::malformed_range("<non-ascii header>"))?;
            parse_range_header(value)?
        }
        None => None,
    };
    // First three records when no range is asked for
    let range = requested.unwrap_or_else(|| Range::with_unit(0, 2, unit));

    if range.unit != unit {
        return Err(Error::InvalidRange {
            message: format!("unit '{}' is not served, use '{unit}'", range.unit),
            unsatisfiable: true,
        }
        .into());
    }

    let total = state.total();
    let (start, end) = window(range.start, range.size(), total);
    let response = RangeResponse::new(state.records[start..end].to_vec(), &range, total);

    let status = if start == 0 && end as i64 >= total {
        StatusCode::OK
    } else {
        StatusCode::PARTIAL_CONTENT
    };
    tracing::debug!(%range, status = status.as_u16(), "serving range");

    Ok((
        status,
        [
            (header::CONTENT_RANGE, response.content_range()),
            (header::ACCEPT_RANGES, unit.to_string()),
        ],
        Json(response),
    )
        .into_response())
}

/// GraphQL-style connection driven by first/last/after/before
async fn users_graphql(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult {
    let paginator = CursorPaginator::from_query(&params);
    let (start, end) = cursor_window(&state, &paginator)?;

    let connection = Connection::try_new(
        state.records[start..end].to_vec(),
        |record| cursor_from_id(record_id(record).unwrap_or_default()),
        start > 0,
        end < state.records.len(),
        state.total(),
    )?;
    Ok(Json(connection).into_response())
}

// ============================================================================
// Helpers
// ============================================================================

/// Clamp `[start, start + len)` to the record list
fn window(start: i64, len: i64, total: i64) -> (usize, usize) {
    let start = start.clamp(0, total);
    let end = start.saturating_add(len.max(0)).min(total);
    (start as usize, end as usize)
}

/// Slice bounds for a cursor request.
///
/// Forward pages start right after the cursor record; backward pages end
/// right before it. A cursor naming an unknown id starts from the top.
fn cursor_window(state: &AppState, paginator: &CursorPaginator) -> Result<(usize, usize)> {
    let limit = paginator.limit as usize;
    let len = state.records.len();

    let anchor = paginator
        .decode::<Value>()?
        .and_then(|data| data.id)
        .and_then(|id| state.position_of(&id));

    let (start, end) = match anchor {
        Some(i) if paginator.forward => (i + 1, (i + 1).saturating_add(limit).min(len)),
        Some(i) => (i.saturating_sub(limit), i),
        None => (0, limit.min(len)),
    };
    Ok((start, end))
}

/// Absolute URL of `path`, from config or the request's Host header
fn link_base(config: &ServerConfig, headers: &HeaderMap, path: &str) -> String {
    if let Some(base) = &config.base_url {
        return format!("{}{path}", base.trim_end_matches('/'));
    }
    let host = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("localhost");
    format!("http://{host}{path}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn state() -> AppState {
        AppState::from_config(ServerConfig::default()).unwrap()
    }

    #[test]
    fn test_sample_users() {
        let users = sample_users();
        assert_eq!(users.len(), 10);
        assert_eq!(users[0]["name"], "Alice");
        assert_eq!(users[0]["email"], "alice@example.com");
        assert_eq!(users[9]["id"], "10");
    }

    #[test]
    fn test_state_rejects_records_without_id() {
        let err = AppState::new(ServerConfig::default(), vec![json!({"name": "x"})]).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test_case(0, 3, 10 => (0, 3) ; "first page")]
    #[test_case(9, 3, 10 => (9, 10) ; "clipped end")]
    #[test_case(20, 3, 10 => (10, 10) ; "past the end")]
    #[test_case(0, 0, 10 => (0, 0) ; "empty span")]
    fn test_window(start: i64, len: i64, total: i64) -> (usize, usize) {
        window(start, len, total)
    }

    #[test]
    fn test_cursor_window() {
        let state = state();
        let after = |id: &str| {
            CursorPaginator::new()
                .with_limit(3)
                .with_cursor(cursor_from_id(id).unwrap())
        };

        assert_eq!(
            cursor_window(&state, &CursorPaginator::new().with_limit(3)).unwrap(),
            (0, 3)
        );
        assert_eq!(cursor_window(&state, &after("3")).unwrap(), (3, 6));
        assert_eq!(cursor_window(&state, &after("9")).unwrap(), (9, 10));
        assert_eq!(
            cursor_window(&state, &after("7").with_forward(false)).unwrap(),
            (3, 6)
        );
        assert_eq!(
            cursor_window(&state, &after("2").with_forward(false)).unwrap(),
            (0, 1)
        );
        assert_eq!(cursor_window(&state, &after("unknown")).unwrap(), (0, 3));
    }

    #[test]
    fn test_cursor_window_rejects_bad_token() {
        let paginator = CursorPaginator::new().with_cursor("%%%");
        assert!(matches!(
            cursor_window(&state(), &paginator),
            Err(Error::InvalidCursor)
        ));
    }

    #[test]
    fn test_link_base() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("api.test:8080"));

        let config = ServerConfig::default();
        assert_eq!(
            link_base(&config, &headers, "/users/offset"),
            "http://api.test:8080/users/offset"
        );

        let config = ServerConfig {
            base_url: Some("https://example.com/".to_string()),
            ..ServerConfig::default()
        };
        assert_eq!(
            link_base(&config, &headers, "/users/offset"),
            "https://example.com/users/offset"
        );
    }
}
