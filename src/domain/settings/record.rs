//! Persisted settings record

use super::payload::{ConfigurationPayload, CANCELLED_SENTINEL};
use super::DateFormat;
use crate::domain::error::PayloadError;

/// The single persisted settings record.
///
/// Holds the closure payload exactly as the configuration page returned it.
/// The raw string is the unit of persistence so that the next load replays it
/// byte for byte; decoding happens on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsRecord {
    raw: String,
}

impl SettingsRecord {
    /// Wrap a raw payload string
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Raw stored text
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn into_raw(self) -> String {
        self.raw
    }

    /// Whether the cancellation sentinel ended up stored as settings.
    ///
    /// The closure handler never persists it; older companions might have.
    pub fn is_cancelled_sentinel(&self) -> bool {
        self.raw == CANCELLED_SENTINEL
    }

    /// Decode the stored payload
    pub fn payload(&self) -> Result<ConfigurationPayload, PayloadError> {
        ConfigurationPayload::parse(&self.raw)
    }

    /// Date format recoverable from the record, if any
    pub fn dateformat(&self) -> Option<DateFormat> {
        if self.is_cancelled_sentinel() {
            return None;
        }
        self.payload().ok().and_then(|p| p.dateformat())
    }

    /// Date format, or the default when the record carries no usable one
    pub fn dateformat_or_default(&self) -> DateFormat {
        self.dateformat().unwrap_or_default()
    }
}

impl From<String> for SettingsRecord {
    fn from(raw: String) -> Self {
        Self::from_raw(raw)
    }
}
