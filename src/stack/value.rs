//! Stack entry values and numeric coercion

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single stack entry value
///
/// Thicknesses and derived parameters are numeric; the piezo class is text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StackValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl StackValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Numeric view of the value, `None` for text
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Text(_) => None,
        }
    }
}

/// Numbers compare by value regardless of representation (`140 == 140.0`).
impl PartialEq for StackValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Text(_), _) | (_, Self::Text(_)) => false,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl From<i64> for StackValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for StackValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for StackValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl fmt::Display for StackValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Coerce a cleaned token into a number.
///
/// Values with no fractional part become `Int`, the rest `Float`. Anything
/// that does not parse as a finite float yields `None` and the caller drops
/// the entry.
pub fn coerce_number(token: &str) -> Option<StackValue> {
    let value: f64 = token.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    // Integral values outside i64 stay floats rather than saturating
    if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
        Some(StackValue::Int(value as i64))
    } else {
        Some(StackValue::Float(value))
    }
}
