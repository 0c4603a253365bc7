use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use fcommon::{FormType, RecordId};
use fform::{
    EditCancelReason, ErrorSet, Notification, NotificationSink, SaveKind, SchemaTicket,
    SessionHooks,
};
use fschema::{FetchReport, SchemaError, SchemaFetchHooks};

pub struct SafeFetchHooks<H> {
    inner: H,
}

impl<H> SafeFetchHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> SchemaFetchHooks for SafeFetchHooks<H>
where
    H: SchemaFetchHooks,
{
    fn on_fetch_started(&self, form_type: &FormType) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.on_fetch_started(form_type)));
    }

    fn on_retry(&self, form_type: &FormType, attempt: u32, delay: Duration, error: &SchemaError) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_retry(form_type, attempt, delay, error)
        }));
    }

    fn on_fetch_finished(&self, form_type: &FormType, report: &FetchReport) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_fetch_finished(form_type, report)
        }));
    }
}

pub struct SafeSessionHooks<H> {
    inner: H,
}

impl<H> SafeSessionHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> SessionHooks for SafeSessionHooks<H>
where
    H: SessionHooks,
{
    fn on_schema_requested(&self, form_type: &FormType, ticket: SchemaTicket) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_schema_requested(form_type, ticket)
        }));
    }

    fn on_schema_applied(&self, form_type: &FormType, ticket: SchemaTicket, field_count: usize) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_schema_applied(form_type, ticket, field_count)
        }));
    }

    fn on_schema_discarded(&self, form_type: &FormType, ticket: SchemaTicket) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_schema_discarded(form_type, ticket)
        }));
    }

    fn on_schema_failed(&self, form_type: &FormType, ticket: SchemaTicket, error: &SchemaError) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_schema_failed(form_type, ticket, error)
        }));
    }

    fn on_field_changed(&self, form_type: &FormType, field: &str, cleared_error: bool) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_field_changed(form_type, field, cleared_error)
        }));
    }

    fn on_submit_rejected(&self, form_type: &FormType, errors: &ErrorSet) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_submit_rejected(form_type, errors)
        }));
    }

    fn on_record_saved(&self, form_type: &FormType, id: &RecordId, kind: SaveKind) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_record_saved(form_type, id, kind)
        }));
    }

    fn on_record_deleted(&self, id: &RecordId, existed: bool) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_record_deleted(id, existed)
        }));
    }

    fn on_edit_started(&self, form_type: &FormType, id: &RecordId) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_edit_started(form_type, id)
        }));
    }

    fn on_edit_cancelled(&self, id: &RecordId, reason: EditCancelReason) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_edit_cancelled(id, reason)
        }));
    }
}

pub struct SafeNotificationSink<S> {
    inner: S,
}

impl<S> SafeNotificationSink<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S> NotificationSink for SafeNotificationSink<S>
where
    S: NotificationSink,
{
    fn notify(&self, notification: &Notification) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.notify(notification)));
    }
}
