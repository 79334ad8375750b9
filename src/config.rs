//! Bounds, defaults and server configuration
//!
//! The pagination bounds are plain constants shared by every paginator.
//! [`ServerConfig`] configures the demo HTTP server and can be loaded from
//! YAML or JSON.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================================================
// Bounds & Defaults
// ============================================================================

/// Page used when none (or an unusable one) is given
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when none (or one below the minimum) is given
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest accepted page size; larger requests are clamped to it
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Smallest accepted page size
pub const MIN_PAGE_SIZE: u32 = 1;

/// Unit name for ranges built without an explicit one
pub const DEFAULT_RANGE_UNIT: &str = "items";

// ============================================================================
// Server Config
// ============================================================================

/// Demo server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Absolute base URL used in Link headers (e.g. "https://api.example.com").
    /// When unset, it is derived from the request's Host header.
    pub base_url: Option<String>,

    /// Unit advertised in `Accept-Ranges` and expected in `Range`
    pub range_unit: String,

    /// JSON file holding an array of records to serve instead of the
    /// built-in sample users. Every record needs a string `id`.
    pub data_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            base_url: None,
            range_unit: DEFAULT_RANGE_UNIT.to_string(),
            data_file: None,
        }
    }
}

impl ServerConfig {
    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a file, choosing the format by extension (`.json` or YAML)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read {}: {e}", path.display()))
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.range_unit.is_empty()
            || !self
                .range_unit
                .chars()
                .all(|c| c.is_alphanumeric() || c == '_')
        {
            return Err(Error::config(format!(
                "range_unit must be a single word, got '{}'",
                self.range_unit
            )));
        }
        if let Some(base) = &self.base_url {
            url::Url::parse(base)
                .map_err(|e| Error::config(format!("base_url '{base}' is not a URL: {e}")))?;
        }
        Ok(())
    }

    /// Socket address string to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
