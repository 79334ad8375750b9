//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pagination toolkit CLI
#[derive(Parser, Debug)]
#[command(name = "pagekit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Normalize offset pagination parameters
    Offset {
        /// Page number (1-indexed)
        #[arg(long, default_value = "1", allow_hyphen_values = true)]
        page: i64,

        /// Items per page
        #[arg(long, default_value = "20", allow_hyphen_values = true)]
        page_size: i64,

        /// Total item count, enables page navigation output
        #[arg(long)]
        total: Option<i64>,
    },

    /// Encode a cursor token
    EncodeCursor {
        /// Record identifier
        #[arg(long)]
        id: Option<String>,

        /// Sort key value (any JSON)
        #[arg(long)]
        value: Option<String>,

        /// Timestamp (RFC 3339)
        #[arg(long)]
        timestamp: Option<String>,

        /// Numeric position
        #[arg(long, allow_hyphen_values = true)]
        offset: Option<i64>,
    },

    /// Decode a cursor token
    DecodeCursor {
        /// Token to decode
        token: String,
    },

    /// Parse a Range header value such as "items=0-24"
    ParseRange {
        /// Header value
        header: String,

        /// Total item count for the Content-Range header (omit for "*")
        #[arg(long)]
        total: Option<i64>,
    },

    /// Build a Link header
    Links {
        /// Base URL of the collection
        #[arg(long)]
        base_url: String,

        /// Current page
        #[arg(long, default_value = "1")]
        page: i64,

        /// Items per page
        #[arg(long, default_value = "20")]
        page_size: i64,

        /// Total item count
        #[arg(long)]
        total: i64,
    },

    /// Start the demo HTTP server
    Serve {
        /// Port to listen on (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// Server configuration file (YAML or JSON)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}
