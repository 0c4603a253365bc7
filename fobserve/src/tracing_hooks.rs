//! Tracing-based observability hooks for schema fetches, sessions, and notifications.
//!
//! ```rust
//! use fobserve::TracingObservabilityHooks;
//! use fform::SessionHooks;
//!
//! fn accepts_session_hooks(_hooks: &dyn SessionHooks) {}
//!
//! let hooks = TracingObservabilityHooks;
//! accepts_session_hooks(&hooks);
//! ```

use std::time::Duration;

use fcommon::{FormType, RecordId};
use fform::{
    EditCancelReason, ErrorSet, Notification, NotificationKind, NotificationSink, SaveKind,
    SchemaTicket, SessionHooks,
};
use fschema::{FetchOutcome, FetchReport, SchemaError, SchemaFetchHooks};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObservabilityHooks;

impl SchemaFetchHooks for TracingObservabilityHooks {
    fn on_fetch_started(&self, form_type: &FormType) {
        tracing::debug!(
            phase = "schema_fetch",
            event = "started",
            form_type = %form_type
        );
    }

    fn on_retry(&self, form_type: &FormType, attempt: u32, delay: Duration, error: &SchemaError) {
        tracing::warn!(
            phase = "schema_fetch",
            event = "retry",
            form_type = %form_type,
            attempt,
            delay_ms = delay.as_millis() as u64,
            error_kind = ?error.kind,
            error = %error
        );
    }

    fn on_fetch_finished(&self, form_type: &FormType, report: &FetchReport) {
        let elapsed_ms = report.elapsed.as_millis() as u64;
        match report.outcome {
            FetchOutcome::Loaded { field_count } => tracing::info!(
                phase = "schema_fetch",
                event = "loaded",
                form_type = %form_type,
                attempts = report.attempts,
                elapsed_ms,
                field_count
            ),
            FetchOutcome::Failed {
                kind,
                retries_exhausted,
            } => tracing::error!(
                phase = "schema_fetch",
                event = "failed",
                form_type = %form_type,
                attempts = report.attempts,
                elapsed_ms,
                error_kind = ?kind,
                retries_exhausted
            ),
        }
    }
}

impl SessionHooks for TracingObservabilityHooks {
    fn on_schema_requested(&self, form_type: &FormType, ticket: SchemaTicket) {
        tracing::info!(
            phase = "session",
            event = "schema_requested",
            form_type = %form_type,
            ticket
        );
    }

    fn on_schema_applied(&self, form_type: &FormType, ticket: SchemaTicket, field_count: usize) {
        tracing::info!(
            phase = "session",
            event = "schema_applied",
            form_type = %form_type,
            ticket,
            field_count
        );
    }

    fn on_schema_discarded(&self, form_type: &FormType, ticket: SchemaTicket) {
        tracing::debug!(
            phase = "session",
            event = "schema_discarded",
            form_type = %form_type,
            ticket
        );
    }

    fn on_schema_failed(&self, form_type: &FormType, ticket: SchemaTicket, error: &SchemaError) {
        tracing::error!(
            phase = "session",
            event = "schema_failed",
            form_type = %form_type,
            ticket,
            error_kind = ?error.kind,
            error = %error
        );
    }

    fn on_field_changed(&self, form_type: &FormType, field: &str, cleared_error: bool) {
        tracing::trace!(
            phase = "session",
            event = "field_changed",
            form_type = %form_type,
            field,
            cleared_error
        );
    }

    fn on_submit_rejected(&self, form_type: &FormType, errors: &ErrorSet) {
        let fields: Vec<&str> = errors.iter().map(|(field, _)| field).collect();
        tracing::warn!(
            phase = "session",
            event = "submit_rejected",
            form_type = %form_type,
            missing = errors.len(),
            fields = ?fields
        );
    }

    fn on_record_saved(&self, form_type: &FormType, id: &RecordId, kind: SaveKind) {
        tracing::info!(
            phase = "session",
            event = "record_saved",
            form_type = %form_type,
            record_id = %id,
            kind = kind.as_str()
        );
    }

    fn on_record_deleted(&self, id: &RecordId, existed: bool) {
        tracing::info!(
            phase = "session",
            event = "record_deleted",
            record_id = %id,
            existed
        );
    }

    fn on_edit_started(&self, form_type: &FormType, id: &RecordId) {
        tracing::info!(
            phase = "session",
            event = "edit_started",
            form_type = %form_type,
            record_id = %id
        );
    }

    fn on_edit_cancelled(&self, id: &RecordId, reason: EditCancelReason) {
        tracing::info!(
            phase = "session",
            event = "edit_cancelled",
            record_id = %id,
            reason = reason.as_str()
        );
    }
}

impl NotificationSink for TracingObservabilityHooks {
    fn notify(&self, notification: &Notification) {
        match notification.kind {
            NotificationKind::Error => tracing::warn!(
                phase = "notification",
                kind = notification.kind.as_str(),
                message = %notification.message
            ),
            NotificationKind::Success | NotificationKind::Info => tracing::info!(
                phase = "notification",
                kind = notification.kind.as_str(),
                message = %notification.message
            ),
        }
    }
}
