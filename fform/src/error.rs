//! Session-layer errors and classification.
//!
//! ```rust
//! use fform::{SessionError, SessionErrorKind};
//!
//! let err = SessionError::not_ready("schema is still loading");
//! assert_eq!(err.kind, SessionErrorKind::NotReady);
//! assert!(err.to_string().contains("still loading"));
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

use frecords::RecordError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionErrorKind {
    NotReady,
    InvalidRequest,
    Store,
    Config,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionError {
    pub kind: SessionErrorKind,
    pub message: String,
}

impl SessionError {
    pub fn new(kind: SessionErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn not_ready(message: impl Into<String>) -> Self {
        Self::new(SessionErrorKind::NotReady, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(SessionErrorKind::InvalidRequest, message)
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::new(SessionErrorKind::Store, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(SessionErrorKind::Config, message)
    }
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for SessionError {}

impl From<RecordError> for SessionError {
    fn from(value: RecordError) -> Self {
        SessionError::store(value.to_string())
    }
}
