//! Error types for pagekit
//!
//! Every pagination error is a client-correctable condition: a bad page
//! number, an out-of-bounds page size, a malformed cursor or range. The
//! remaining variants belong to the CLI and demo server surfaces.

use crate::config::{MAX_PAGE_SIZE, MIN_PAGE_SIZE};
use thiserror::Error;

/// The main error type for pagekit
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("page must be >= 1: got {page}")]
    InvalidPage { page: i64 },

    #[error("page_size must be between {min} and {max}: got {size}")]
    InvalidPageSize { size: i64, min: u32, max: u32 },

    #[error("cursor is malformed or invalid")]
    InvalidCursor,

    #[error("offset must be a non-negative integer: got {value}")]
    InvalidOffset { value: String },

    #[error("invalid range: {message}")]
    InvalidRange {
        message: String,
        /// Set when the input parsed but describes an unsatisfiable span
        unsatisfiable: bool,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an invalid page error
    pub fn invalid_page(page: impl Into<i64>) -> Self {
        Self::InvalidPage { page: page.into() }
    }

    /// Create an invalid page size error carrying the allowed bounds
    pub fn invalid_page_size(size: impl Into<i64>) -> Self {
        Self::InvalidPageSize {
            size: size.into(),
            min: MIN_PAGE_SIZE,
            max: MAX_PAGE_SIZE,
        }
    }

    /// Create an invalid offset error from the offending value or text
    pub fn invalid_offset(value: impl ToString) -> Self {
        Self::InvalidOffset {
            value: value.to_string(),
        }
    }

    /// Input that is not a range expression at all
    pub fn malformed_range(input: impl AsRef<str>) -> Self {
        Self::InvalidRange {
            message: format!("'{}' does not match <unit>=<start>-[end]", input.as_ref()),
            unsatisfiable: false,
        }
    }

    /// A well-formed range whose end precedes its start
    pub fn backwards_range(start: i64, end: i64) -> Self {
        Self::InvalidRange {
            message: format!("end {end} is before start {start}"),
            unsatisfiable: true,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if the caller can fix this error by changing its input
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidPage { .. }
                | Error::InvalidPageSize { .. }
                | Error::InvalidCursor
                | Error::InvalidOffset { .. }
                | Error::InvalidRange { .. }
        )
    }

    /// HTTP status code a server should answer with for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Error::InvalidRange {
                unsatisfiable: true,
                ..
            } => 416,
            e if e.is_client_error() => 400,
            _ => 500,
        }
    }
}

/// Result type alias for pagekit
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
