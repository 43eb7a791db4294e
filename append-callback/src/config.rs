//! Append configuration types
//!
//! The library only needs to know which literal to append. Choosing the
//! callback, rendering output and reading config files is handled by the
//! application layer.

use crate::types::{CallbackError, Result, Value};
use serde::{Deserialize, Serialize};

/// Literal appended when nothing else is configured
pub const DEFAULT_LITERAL: i64 = 100;

/// Configuration for an [`Appender`](crate::Appender)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppendConfig {
    /// Value pushed onto the sequence before the callback runs
    #[serde(default = "default_literal")]
    pub literal: Value,
}

fn default_literal() -> Value {
    Value::Integer(DEFAULT_LITERAL)
}

impl Default for AppendConfig {
    fn default() -> Self {
        Self {
            literal: default_literal(),
        }
    }
}

impl AppendConfig {
    /// Create a new configuration with the default literal
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the appended literal
    pub fn with_literal(mut self, literal: impl Into<Value>) -> Self {
        self.literal = literal.into();
        self
    }

    /// Check the configuration before use
    ///
    /// TOML accepts `nan` and `inf`, which have no sensible place in a
    /// sequence, so non-finite float literals are rejected.
    pub fn validate(&self) -> Result<()> {
        match self.literal {
            Value::Float(v) if !v.is_finite() => Err(CallbackError::InvalidConfig(format!(
                "literal must be a finite number, got {}",
                v
            ))),
            _ => Ok(()),
        }
    }
}
