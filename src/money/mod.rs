//! Untrusted form input
//!
//! Form bindings deliver every numeric field as text, occasionally as a JSON
//! number, and as `null` or nothing at all before the user touches it. This
//! module is the single coercion boundary between those values and the
//! pricing arithmetic.

mod parser;

pub use parser::{parse_count, parse_money};

use serde::{Deserialize, Serialize};

/// A raw value as it arrives from a form binding
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Already numeric (JSON number)
    Number(f64),
    /// Text typed by the user, possibly locale-formatted ("1.234,56")
    Text(String),
    /// `null` or absent
    #[default]
    Missing,
}

impl RawValue {
    /// Text content, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(RawValue::Missing)
    }
}
