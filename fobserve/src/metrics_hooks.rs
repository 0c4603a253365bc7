//! Metrics-based observability hooks for schema fetches, sessions, and notifications.
//!
//! ```rust
//! use fobserve::MetricsObservabilityHooks;
//! use fschema::SchemaFetchHooks;
//!
//! fn accepts_fetch_hooks(_hooks: &dyn SchemaFetchHooks) {}
//!
//! let hooks = MetricsObservabilityHooks;
//! accepts_fetch_hooks(&hooks);
//! ```

use std::time::Duration;

use fcommon::{FormType, RecordId};
use fform::{
    EditCancelReason, ErrorSet, Notification, NotificationSink, SaveKind, SchemaTicket,
    SessionHooks,
};
use fschema::{FetchOutcome, FetchReport, SchemaError, SchemaFetchHooks};

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsObservabilityHooks;

impl SchemaFetchHooks for MetricsObservabilityHooks {
    fn on_retry(&self, form_type: &FormType, _attempt: u32, delay: Duration, error: &SchemaError) {
        metrics::counter!(
            "formdeck_schema_fetch_retry_total",
            "form_type" => form_type.to_string(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
        metrics::histogram!(
            "formdeck_schema_fetch_retry_delay_seconds",
            "form_type" => form_type.to_string()
        )
        .record(delay.as_secs_f64());
    }

    fn on_fetch_finished(&self, form_type: &FormType, report: &FetchReport) {
        let error_kind = match report.outcome {
            FetchOutcome::Loaded { .. } => "none".to_string(),
            FetchOutcome::Failed { kind, .. } => format!("{kind:?}"),
        };
        metrics::counter!(
            "formdeck_schema_fetch_total",
            "form_type" => form_type.to_string(),
            "outcome" => report.outcome.as_str(),
            "error_kind" => error_kind
        )
        .increment(1);
        metrics::histogram!(
            "formdeck_schema_fetch_attempts",
            "form_type" => form_type.to_string(),
            "outcome" => report.outcome.as_str()
        )
        .record(report.attempts as f64);
        metrics::histogram!(
            "formdeck_schema_fetch_duration_seconds",
            "form_type" => form_type.to_string()
        )
        .record(report.elapsed.as_secs_f64());
    }
}

impl SessionHooks for MetricsObservabilityHooks {
    fn on_schema_applied(&self, form_type: &FormType, _ticket: SchemaTicket, field_count: usize) {
        metrics::counter!(
            "formdeck_session_schema_applied_total",
            "form_type" => form_type.to_string()
        )
        .increment(1);
        metrics::histogram!(
            "formdeck_session_schema_fields",
            "form_type" => form_type.to_string()
        )
        .record(field_count as f64);
    }

    fn on_schema_discarded(&self, form_type: &FormType, _ticket: SchemaTicket) {
        metrics::counter!(
            "formdeck_session_schema_discarded_total",
            "form_type" => form_type.to_string()
        )
        .increment(1);
    }

    fn on_schema_failed(&self, form_type: &FormType, _ticket: SchemaTicket, error: &SchemaError) {
        metrics::counter!(
            "formdeck_session_schema_failed_total",
            "form_type" => form_type.to_string(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
    }

    fn on_submit_rejected(&self, form_type: &FormType, errors: &ErrorSet) {
        metrics::counter!(
            "formdeck_session_submit_rejected_total",
            "form_type" => form_type.to_string()
        )
        .increment(1);
        metrics::histogram!(
            "formdeck_session_missing_fields",
            "form_type" => form_type.to_string()
        )
        .record(errors.len() as f64);
    }

    fn on_record_saved(&self, form_type: &FormType, _id: &RecordId, kind: SaveKind) {
        metrics::counter!(
            "formdeck_session_record_saved_total",
            "form_type" => form_type.to_string(),
            "kind" => kind.as_str()
        )
        .increment(1);
    }

    fn on_record_deleted(&self, _id: &RecordId, existed: bool) {
        metrics::counter!(
            "formdeck_session_record_deleted_total",
            "existed" => existed.to_string()
        )
        .increment(1);
    }

    fn on_edit_started(&self, form_type: &FormType, _id: &RecordId) {
        metrics::counter!(
            "formdeck_session_edit_started_total",
            "form_type" => form_type.to_string()
        )
        .increment(1);
    }

    fn on_edit_cancelled(&self, _id: &RecordId, reason: EditCancelReason) {
        metrics::counter!(
            "formdeck_session_edit_cancelled_total",
            "reason" => reason.as_str()
        )
        .increment(1);
    }
}

impl NotificationSink for MetricsObservabilityHooks {
    fn notify(&self, notification: &Notification) {
        metrics::counter!(
            "formdeck_notifications_total",
            "kind" => notification.kind.as_str()
        )
        .increment(1);
    }
}
