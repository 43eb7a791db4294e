//! Core types for the append-callback library
//!
//! This module defines the element type held by a [`Sequence`](crate::Sequence)
//! and the error type shared by every operation in the crate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type for library operations
pub type Result<T> = std::result::Result<T, CallbackError>;

/// Errors that can occur while appending and invoking a callback
#[derive(Debug, thiserror::Error)]
pub enum CallbackError {
    #[error("Callback is not invocable: {0}")]
    NotInvocable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A single element of a sequence
///
/// Sequences are permissive: text and numbers can live side by side, so the
/// usual `["Juan", "Karla"]` list can have the numeric literal `100` appended.
///
/// Serializes untagged, so a sequence of values becomes a plain JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean value
    Boolean(bool),
    /// Signed integer value
    Integer(i64),
    /// Floating-point value
    Float(f64),
    /// Text value
    Text(String),
}

impl Value {
    /// Interpret a command-line literal
    ///
    /// `true`/`false` become booleans, integer text becomes [`Value::Integer`],
    /// finite float text becomes [`Value::Float`] and anything else is kept as
    /// text. Never fails.
    pub fn parse_literal(input: &str) -> Self {
        match input {
            "true" => return Value::Boolean(true),
            "false" => return Value::Boolean(false),
            _ => {}
        }

        if let Ok(v) = input.parse::<i64>() {
            return Value::Integer(v);
        }

        match input.parse::<f64>() {
            Ok(v) if v.is_finite() => Value::Float(v),
            _ => Value::Text(input.to_string()),
        }
    }

    /// Get the text content if this is a text value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Check if this is a numeric value
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }
}

impl fmt::Display for Value {
    /// Console-style rendering: text quoted, numbers and booleans bare
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(v) => write!(f, "{}", v),
            Value::Integer(v) => write!(f, "{}", v),
            Value::Float(v) if v.is_infinite() => {
                write!(f, "{}", if *v > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(s) => write!(f, "'{}'", s.replace('\'', "\\'")),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}
