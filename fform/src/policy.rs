//! Session policy: notification timing, edit recovery, and message text.
//!
//! ```rust
//! use std::time::Duration;
//!
//! use fform::{DanglingEditPolicy, SessionPolicy};
//!
//! let policy = SessionPolicy::default()
//!     .with_notification_ttl(Duration::from_secs(5))
//!     .with_dangling_edit(DanglingEditPolicy::KeepEditing);
//! assert!(policy.validate().is_ok());
//! assert!(SessionPolicy::default().with_notification_ttl(Duration::ZERO).validate().is_err());
//! ```

use std::time::Duration;

use crate::{DEFAULT_NOTIFICATION_TTL, SessionError};

/// What happens to an active edit when its record is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DanglingEditPolicy {
    /// Leave edit mode and clear the draft.
    #[default]
    CancelEdit,
    /// Keep the draft; a later submit reports the missing record.
    KeepEditing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionMessages {
    pub load_failed: String,
    pub required_fields_missing: String,
    pub submitted: String,
    pub updated: String,
    pub edit_started: String,
    pub deleted: String,
    pub storage_failed: String,
    pub edit_target_missing: String,
}

impl Default for SessionMessages {
    fn default() -> Self {
        Self {
            load_failed: "Failed to load form configuration".to_string(),
            required_fields_missing: "Please fill in all required fields".to_string(),
            submitted: "Form submitted successfully!".to_string(),
            updated: "Entry updated successfully!".to_string(),
            edit_started: "Edit mode activated".to_string(),
            deleted: "Entry deleted successfully".to_string(),
            storage_failed: "Unable to update saved entries".to_string(),
            edit_target_missing: "Entry no longer exists".to_string(),
        }
    }
}

impl SessionMessages {
    fn all(&self) -> [(&'static str, &str); 8] {
        [
            ("load_failed", self.load_failed.as_str()),
            ("required_fields_missing", self.required_fields_missing.as_str()),
            ("submitted", self.submitted.as_str()),
            ("updated", self.updated.as_str()),
            ("edit_started", self.edit_started.as_str()),
            ("deleted", self.deleted.as_str()),
            ("storage_failed", self.storage_failed.as_str()),
            ("edit_target_missing", self.edit_target_missing.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPolicy {
    pub notification_ttl: Duration,
    pub dangling_edit: DanglingEditPolicy,
    pub messages: SessionMessages,
}

impl Default for SessionPolicy {
    fn default() -> Self {
        Self {
            notification_ttl: DEFAULT_NOTIFICATION_TTL,
            dangling_edit: DanglingEditPolicy::default(),
            messages: SessionMessages::default(),
        }
    }
}

impl SessionPolicy {
    pub fn with_notification_ttl(mut self, ttl: Duration) -> Self {
        self.notification_ttl = ttl;
        self
    }

    pub fn with_dangling_edit(mut self, policy: DanglingEditPolicy) -> Self {
        self.dangling_edit = policy;
        self
    }

    pub fn with_messages(mut self, messages: SessionMessages) -> Self {
        self.messages = messages;
        self
    }

    pub fn validate(&self) -> Result<(), SessionError> {
        if self.notification_ttl.is_zero() {
            return Err(SessionError::config(
                "notification_ttl must be greater than zero",
            ));
        }

        for (name, text) in self.messages.all() {
            if text.trim().is_empty() {
                return Err(SessionError::config(format!(
                    "message '{name}' must not be empty"
                )));
            }
        }

        Ok(())
    }
}
