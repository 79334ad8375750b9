//! CLI module
//!
//! Command-line interface for the pagination toolkit.
//!
//! # Commands
//!
//! - `offset` - Normalize page/page_size and show offsets
//! - `encode-cursor` / `decode-cursor` - Work with cursor tokens
//! - `parse-range` - Parse a Range header
//! - `links` - Build a Link header
//! - `serve` - Start the demo HTTP server

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
pub use server::{router, sample_users, serve, AppState};
