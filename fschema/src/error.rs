//! Schema fetch and schema construction errors.
//!
//! ```rust
//! use fschema::SchemaError;
//!
//! let missing = SchemaError::not_found("no schema for 'shipping'");
//! assert!(!missing.retryable);
//!
//! let flaky = SchemaError::unavailable("catalog warming up");
//! assert!(flaky.retryable);
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorKind {
    NotFound,
    InvalidSchema,
    Timeout,
    Transport,
    Unavailable,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    pub kind: SchemaErrorKind,
    pub message: String,
    pub retryable: bool,
}

impl SchemaError {
    pub fn new(kind: SchemaErrorKind, message: impl Into<String>, retryable: bool) -> Self {
        Self {
            kind,
            message: message.into(),
            retryable,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(SchemaErrorKind::NotFound, message, false)
    }

    pub fn invalid_schema(message: impl Into<String>) -> Self {
        Self::new(SchemaErrorKind::InvalidSchema, message, false)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(SchemaErrorKind::Timeout, message, true)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(SchemaErrorKind::Transport, message, true)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(SchemaErrorKind::Unavailable, message, true)
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(SchemaErrorKind::Other, message, false)
    }
}

impl Display for SchemaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for SchemaError {}

impl From<serde_json::Error> for SchemaError {
    fn from(value: serde_json::Error) -> Self {
        SchemaError::invalid_schema(value.to_string())
    }
}
