//! Lenient numeric input, as it arrives from form fields and stored JSON.

use serde::{Deserialize, Serialize};

/// A number that may have been supplied as a string.
///
/// Form inputs and persisted item rows carry quantities and prices either as
/// JSON numbers or as raw strings ("3", "", "abc"). For computation the value
/// is always treated numerically: anything that does not parse contributes 0.
/// Coercion never fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl RawNumber {
    /// Numeric value, coercing non-numeric input to 0.
    pub fn to_f64(&self) -> f64 {
        match self {
            RawNumber::Number(n) if n.is_finite() => *n,
            RawNumber::Number(_) => 0.0,
            RawNumber::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        }
    }
}

impl core::fmt::Display for RawNumber {
    /// Shows the value as the form supplied it; whole numbers drop the `.0`.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RawNumber::Number(n) if n.is_finite() && n.fract() == 0.0 => {
                write!(f, "{}", *n as i64)
            }
            RawNumber::Number(n) => write!(f, "{n}"),
            RawNumber::Text(s) => f.write_str(s),
        }
    }
}

impl Default for RawNumber {
    fn default() -> Self {
        RawNumber::Number(0.0)
    }
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        RawNumber::Number(value)
    }
}

impl From<i64> for RawNumber {
    fn from(value: i64) -> Self {
        RawNumber::Number(value as f64)
    }
}

impl From<&str> for RawNumber {
    fn from(value: &str) -> Self {
        RawNumber::Text(value.to_string())
    }
}

impl From<String> for RawNumber {
    fn from(value: String) -> Self {
        RawNumber::Text(value)
    }
}
