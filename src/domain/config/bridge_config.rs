//! Bridge configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

/// Versioned configuration page the watchface ships with
pub const DEFAULT_BASE_URL: &str = "http://data.lingen.me/pebble/retroclock/config-2.0.html";

/// Default tracing filter when neither `RUST_LOG` nor `--verbose` is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Accepted values for `log_level`
pub const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Bridge configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BridgeConfig {
    pub base_url: Option<String>,
    pub settings_file: Option<String>,
    pub open_browser: Option<bool>,
    pub log_level: Option<String>,
}

impl BridgeConfig {
    /// Create config with default values.
    ///
    /// `settings_file` stays unset: its default lives in the platform data
    /// directory and is resolved by the file store.
    pub fn defaults() -> Self {
        Self {
            base_url: Some(DEFAULT_BASE_URL.to_string()),
            settings_file: None,
            open_browser: Some(true),
            log_level: Some(DEFAULT_LOG_LEVEL.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            base_url: other.base_url.or(self.base_url),
            settings_file: other.settings_file.or(self.settings_file),
            open_browser: other.open_browser.or(self.open_browser),
            log_level: other.log_level.or(self.log_level),
        }
    }

    /// Resolve the configuration page URL, falling back to the shipped page
    /// when unset. A configured value that is not an http(s) URL is an error.
    pub fn resolve_base_url(&self) -> Result<Url, String> {
        parse_base_url(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))
    }

    /// Get the settings file override, if any
    pub fn settings_file_path(&self) -> Option<PathBuf> {
        self.settings_file
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    }

    /// Get open_browser setting, or true if not set
    pub fn open_browser_or_default(&self) -> bool {
        self.open_browser.unwrap_or(true)
    }

    /// Get log level, or "warn" if not set/invalid
    pub fn log_level_or_default(&self) -> &str {
        self.log_level
            .as_deref()
            .filter(|l| VALID_LOG_LEVELS.contains(l))
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

/// Parse a configuration page URL. Only absolute http(s) URLs are accepted.
pub fn parse_base_url(input: &str) -> Result<Url, String> {
    let url = Url::parse(input).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("unsupported scheme '{}', expected http or https", other)),
    }
}
