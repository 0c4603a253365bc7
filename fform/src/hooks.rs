//! Hook contracts for observing session activity.
//!
//! ```rust
//! use fform::{NoopSessionHooks, SessionHooks};
//!
//! fn accepts_hooks(_hooks: &dyn SessionHooks) {}
//!
//! let hooks = NoopSessionHooks;
//! accepts_hooks(&hooks);
//! ```

use fcommon::{FormType, RecordId};
use fschema::SchemaError;

use crate::ErrorSet;

/// Monotonic correlation number for a schema fetch.
pub type SchemaTicket = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveKind {
    Created,
    Updated,
}

impl SaveKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCancelReason {
    /// The record under edit was deleted.
    RecordDeleted,
    /// The record under edit vanished before its changes were saved.
    RecordMissing,
    /// The schema needed to edit the record failed to load.
    SchemaFailed,
    /// A different form type was selected.
    FormTypeChanged,
    Requested,
}

impl EditCancelReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RecordDeleted => "record_deleted",
            Self::RecordMissing => "record_missing",
            Self::SchemaFailed => "schema_failed",
            Self::FormTypeChanged => "form_type_changed",
            Self::Requested => "requested",
        }
    }
}

pub trait SessionHooks: Send + Sync {
    fn on_schema_requested(&self, _form_type: &FormType, _ticket: SchemaTicket) {}

    fn on_schema_applied(&self, _form_type: &FormType, _ticket: SchemaTicket, _field_count: usize) {
    }

    /// A response arrived after a newer request superseded it.
    fn on_schema_discarded(&self, _form_type: &FormType, _ticket: SchemaTicket) {}

    fn on_schema_failed(&self, _form_type: &FormType, _ticket: SchemaTicket, _error: &SchemaError) {
    }

    fn on_field_changed(&self, _form_type: &FormType, _field: &str, _cleared_error: bool) {}

    fn on_submit_rejected(&self, _form_type: &FormType, _errors: &ErrorSet) {}

    fn on_record_saved(&self, _form_type: &FormType, _id: &RecordId, _kind: SaveKind) {}

    fn on_record_deleted(&self, _id: &RecordId, _existed: bool) {}

    fn on_edit_started(&self, _form_type: &FormType, _id: &RecordId) {}

    fn on_edit_cancelled(&self, _id: &RecordId, _reason: EditCancelReason) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSessionHooks;

impl SessionHooks for NoopSessionHooks {}
