//! Date format value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Integer-coded date display format.
///
/// The code is opaque to the companion: it is read back from stored settings,
/// handed to the configuration page and otherwise left alone. Code `0` is the
/// watchface's built-in default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateFormat(i64);

impl DateFormat {
    /// Create a date format from its raw code
    pub const fn new(code: i64) -> Self {
        Self(code)
    }

    /// Get the raw code
    pub const fn code(&self) -> i64 {
        self.0
    }

    /// Read a date format from a JSON value.
    ///
    /// Accepts integers, whole floats such as `2.0` and integer strings (the
    /// configuration page may submit any of them). Anything else yields `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().or_else(|| whole_f64(n.as_f64()?)).map(Self),
            Value::String(s) => s.trim().parse().ok().map(Self),
            _ => None,
        }
    }
}

fn whole_f64(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DateFormat {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<i64> for DateFormat {
    fn from(code: i64) -> Self {
        Self(code)
    }
}
