//! Closure payload value objects

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::DateFormat;
use crate::domain::error::PayloadError;

/// Key under which the configuration page submits the date format
pub const DATEFORMAT_KEY: &str = "0";

/// Closure sentinel for an aborted configuration session
pub const CANCELLED_SENTINEL: &str = "CANCELLED";

/// Closure sentinel for a session closed without changes
pub const UNCHANGED_SENTINEL: &str = "{}";

/// Settings submitted by the configuration page.
///
/// A mapping from small-integer string keys to JSON values. It is forwarded
/// to the watchface unmodified, so no key or value is interpreted here except
/// for reading back the date format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigurationPayload(Map<String, Value>);

impl ConfigurationPayload {
    /// Parse a payload from its JSON text. Only JSON objects are accepted.
    pub fn parse(text: &str) -> Result<Self, PayloadError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| PayloadError::NotJson(e.to_string()))?;

        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(PayloadError::NotAnObject(json_kind(&other))),
        }
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Date format carried under key `"0"`, if present and integral
    pub fn dateformat(&self) -> Option<DateFormat> {
        self.get(DATEFORMAT_KEY).and_then(DateFormat::from_value)
    }

    /// Underlying key/value mapping
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Compact JSON encoding, as delivered to the device
    pub fn to_json(&self) -> String {
        Value::Object(self.0.clone()).to_string()
    }
}

impl FromStr for ConfigurationPayload {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Map<String, Value>> for ConfigurationPayload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Raw closure response, classified by its sentinel.
///
/// Classification does not parse anything: a `Submitted` response may still
/// turn out to be malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClosureResponse<'a> {
    /// Nothing was returned
    Empty,
    /// The user aborted the configuration page
    Cancelled,
    /// The page was closed without changes
    Unchanged,
    /// Anything else, expected to be a JSON payload
    Submitted(&'a str),
}

impl<'a> ClosureResponse<'a> {
    /// Classify the response string handed back by the configuration page
    pub fn classify(response: Option<&'a str>) -> Self {
        match response {
            None | Some("") => Self::Empty,
            Some(CANCELLED_SENTINEL) => Self::Cancelled,
            Some(UNCHANGED_SENTINEL) => Self::Unchanged,
            Some(text) => Self::Submitted(text),
        }
    }
}
