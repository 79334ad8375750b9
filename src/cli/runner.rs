//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::cli::server::{self, AppState};
use crate::config::ServerConfig;
use crate::cursor::{decode_cursor, CursorData};
use crate::error::{Error, Result, ResultExt};
use crate::pagination::OffsetPaginator;
use crate::range::parse_range_header;
use crate::response::LinkHeader;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use std::path::Path;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let report = match &self.cli.command {
            Commands::Offset {
                page,
                page_size,
                total,
            } => offset_report(*page, *page_size, *total),
            Commands::EncodeCursor {
                id,
                value,
                timestamp,
                offset,
            } => encode_report(id.as_deref(), value.as_deref(), timestamp.as_deref(), *offset)?,
            Commands::DecodeCursor { token } => decode_report(token)?,
            Commands::ParseRange { header, total } => range_report(header, *total)?,
            Commands::Links {
                base_url,
                page,
                page_size,
                total,
            } => links_report(base_url, *page, *page_size, *total),
            Commands::Serve { port, config } => {
                return self.serve(*port, config.as_deref()).await;
            }
        };
        self.output_message(&report)
    }

    /// Load server config, apply overrides and serve until shutdown
    async fn serve(&self, port: Option<u16>, config_path: Option<&Path>) -> Result<()> {
        let mut config = match config_path {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::default(),
        };
        if let Some(port) = port {
            config.port = port;
        }

        let state = AppState::from_config(config)?;
        server::serve(state).await
    }

    fn output_message(&self, msg: &Value) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(msg),
            OutputFormat::Pretty => serde_json::to_string_pretty(msg),
        }
        .context("Failed to render output")?;
        println!("{text}");
        Ok(())
    }
}

// ============================================================================
// Reports
// ============================================================================

fn offset_report(page: i64, page_size: i64, total: Option<i64>) -> Value {
    let paginator = OffsetPaginator::from_values(page, page_size);
    tracing::debug!(page, page_size, ?paginator, "normalized offset paginator");

    let mut report = json!({
        "page": paginator.page,
        "page_size": paginator.page_size,
        "offset": paginator.offset(),
        "limit": paginator.limit(),
        "sql": paginator.sql_clause(),
        "sql_mysql": paginator.sql_clause_mysql(),
        "query": paginator.query_string(),
    });

    if let Some(total) = total {
        report["total"] = json!(total);
        report["total_pages"] = json!(paginator.total_pages(total));
        report["has_previous"] = json!(paginator.has_previous());
        report["has_next"] = json!(paginator.has_next(total));
        report["is_last_page"] = json!(paginator.is_last_page(total));
        report["is_empty"] = json!(paginator.is_empty(total));
    }
    report
}

fn encode_report(
    id: Option<&str>,
    value: Option<&str>,
    timestamp: Option<&str>,
    offset: Option<i64>,
) -> Result<Value> {
    let mut data = CursorData::<Value>::new();
    if let Some(id) = id {
        data = data.with_id(id);
    }
    if let Some(raw) = value {
        // Anything that is not JSON is taken as a plain string
        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        data = data.with_value(value);
    }
    if let Some(ts) = timestamp {
        let ts = DateTime::parse_from_rfc3339(ts)
            .map_err(|e| Error::Other(format!("timestamp '{ts}' is not RFC 3339: {e}")))?;
        data = data.with_timestamp(ts.with_timezone(&Utc));
    }
    if let Some(offset) = offset {
        data = data.with_offset(offset);
    }

    Ok(json!({
        "cursor": data.encode()?,
        "data": data,
    }))
}

fn decode_report(token: &str) -> Result<Value> {
    let data = decode_cursor::<Value>(token)?;
    Ok(json!({ "data": data }))
}

fn range_report(header: &str, total: Option<i64>) -> Result<Value> {
    let Some(range) = parse_range_header(header)? else {
        return Ok(json!({ "range": null }));
    };
    let paginator = range.to_paginator();

    Ok(json!({
        "range": range,
        "size": range.size(),
        "header": range.header(),
        "sql": range.sql_clause(),
        "content_range": range.content_range_header(total.unwrap_or(-1)),
        "paginator": paginator,
    }))
}

fn links_report(base_url: &str, page: i64, page_size: i64, total: i64) -> Value {
    let paginator = OffsetPaginator::from_values(page, page_size);
    let links = LinkHeader::build(base_url, &paginator, total);

    json!({
        "header": links.to_string(),
        "links": links,
    })
}
