use std::sync::{Arc, Mutex};
use std::time::Duration;

use fcommon::{FormType, RecordId};
use fform::{
    EditCancelReason, ErrorSet, FormSession, Notification, NotificationSink, SaveKind,
    SchemaTicket, SessionHooks,
};
use fschema::{
    FetchOutcome, FetchReport, FieldDescriptor, FormSchema, InMemorySchemaProvider,
    SchemaCatalog, SchemaError, SchemaErrorKind, SchemaFetchHooks,
};

use crate::{
    MetricsObservabilityHooks, SafeFetchHooks, SafeNotificationSink, SafeSessionHooks,
    TracingObservabilityHooks,
};

fn sample_errors() -> ErrorSet {
    let mut errors = ErrorSet::new();
    errors.insert("email", "Email is required");
    errors
}

fn exercise_fetch_hooks(hooks: &dyn SchemaFetchHooks) {
    let error = SchemaError::timeout("schema timeout");
    let form_type = FormType::address();

    hooks.on_fetch_started(&form_type);
    hooks.on_retry(&form_type, 1, Duration::from_millis(10), &error);
    hooks.on_fetch_finished(
        &form_type,
        &FetchReport {
            attempts: 2,
            elapsed: Duration::from_millis(15),
            outcome: FetchOutcome::Loaded { field_count: 4 },
        },
    );
    hooks.on_fetch_finished(
        &form_type,
        &FetchReport {
            attempts: 3,
            elapsed: Duration::from_millis(40),
            outcome: FetchOutcome::Failed {
                kind: SchemaErrorKind::Timeout,
                retries_exhausted: true,
            },
        },
    );
}

fn exercise_session_hooks(hooks: &dyn SessionHooks) {
    let error = SchemaError::not_found("no schema");
    let form_type = FormType::user_info();
    let id = RecordId::new("record-1");

    hooks.on_schema_requested(&form_type, 1);
    hooks.on_schema_applied(&form_type, 1, 3);
    hooks.on_schema_discarded(&form_type, 2);
    hooks.on_schema_failed(&form_type, 3, &error);
    hooks.on_field_changed(&form_type, "email", true);
    hooks.on_submit_rejected(&form_type, &sample_errors());
    hooks.on_record_saved(&form_type, &id, SaveKind::Created);
    hooks.on_record_deleted(&id, false);
    hooks.on_edit_started(&form_type, &id);
    hooks.on_edit_cancelled(&id, EditCancelReason::RecordDeleted);
}

#[test]
fn tracing_hooks_smoke_test_all_callbacks() {
    let hooks = TracingObservabilityHooks;

    exercise_fetch_hooks(&hooks);
    exercise_session_hooks(&hooks);
    hooks.notify(&Notification::error("Failed to load form configuration"));
    hooks.notify(&Notification::success("Form submitted successfully!"));
}

#[test]
fn metrics_hooks_smoke_test_all_callbacks() {
    let hooks = MetricsObservabilityHooks;

    exercise_fetch_hooks(&hooks);
    exercise_session_hooks(&hooks);
    hooks.notify(&Notification::info("Edit mode activated"));
}

#[derive(Default, Clone)]
struct RecordingSessionHooks {
    events: Arc<Mutex<Vec<&'static str>>>,
}

impl RecordingSessionHooks {
    fn push(&self, event: &'static str) {
        self.events.lock().expect("events lock").push(event);
    }
}

impl SessionHooks for RecordingSessionHooks {
    fn on_schema_requested(&self, _form_type: &FormType, _ticket: SchemaTicket) {
        self.push("schema_requested");
    }

    fn on_schema_applied(&self, _form_type: &FormType, _ticket: SchemaTicket, _field_count: usize) {
        self.push("schema_applied");
    }

    fn on_field_changed(&self, _form_type: &FormType, _field: &str, _cleared_error: bool) {
        self.push("field_changed");
    }

    fn on_record_saved(&self, _form_type: &FormType, _id: &RecordId, _kind: SaveKind) {
        self.push("record_saved");
    }
}

#[derive(Default, Clone)]
struct RecordingFetchHooks {
    events: Arc<Mutex<Vec<&'static str>>>,
}

impl SchemaFetchHooks for RecordingFetchHooks {
    fn on_fetch_started(&self, _form_type: &FormType) {
        self.events.lock().expect("events lock").push("started");
    }

    fn on_fetch_finished(&self, _form_type: &FormType, _report: &FetchReport) {
        self.events.lock().expect("events lock").push("finished");
    }
}

struct PanicFetchHooks;

impl SchemaFetchHooks for PanicFetchHooks {
    fn on_fetch_started(&self, _form_type: &FormType) {
        panic!("fetch_started panic");
    }

    fn on_retry(&self, _form_type: &FormType, _attempt: u32, _delay: Duration, _error: &SchemaError) {
        panic!("retry panic");
    }

    fn on_fetch_finished(&self, _form_type: &FormType, _report: &FetchReport) {
        panic!("fetch_finished panic");
    }
}

struct PanicSessionHooks;

impl SessionHooks for PanicSessionHooks {
    fn on_schema_requested(&self, _form_type: &FormType, _ticket: SchemaTicket) {
        panic!("schema_requested panic");
    }

    fn on_schema_applied(&self, _form_type: &FormType, _ticket: SchemaTicket, _field_count: usize) {
        panic!("schema_applied panic");
    }

    fn on_field_changed(&self, _form_type: &FormType, _field: &str, _cleared_error: bool) {
        panic!("field_changed panic");
    }

    fn on_record_saved(&self, _form_type: &FormType, _id: &RecordId, _kind: SaveKind) {
        panic!("record_saved panic");
    }

    fn on_edit_cancelled(&self, _id: &RecordId, _reason: EditCancelReason) {
        panic!("edit_cancelled panic");
    }
}

struct PanicSink;

impl NotificationSink for PanicSink {
    fn notify(&self, _notification: &Notification) {
        panic!("notify panic");
    }
}

#[test]
fn safe_wrappers_forward_callbacks() {
    let fetch = RecordingFetchHooks::default();
    let safe_fetch = SafeFetchHooks::new(fetch.clone());
    safe_fetch.on_fetch_started(&FormType::payment());
    safe_fetch.on_fetch_finished(
        &FormType::payment(),
        &FetchReport {
            attempts: 1,
            elapsed: Duration::ZERO,
            outcome: FetchOutcome::Loaded { field_count: 2 },
        },
    );
    assert_eq!(
        *fetch.events.lock().expect("events lock"),
        vec!["started", "finished"]
    );

    let session = RecordingSessionHooks::default();
    let safe_session = SafeSessionHooks::new(session.clone());
    safe_session.on_schema_requested(&FormType::payment(), 1);
    safe_session.on_record_saved(&FormType::payment(), &RecordId::new("r"), SaveKind::Updated);
    assert_eq!(
        *session.events.lock().expect("events lock"),
        vec!["schema_requested", "record_saved"]
    );
}

#[test]
fn safe_wrappers_swallow_hook_panics() {
    exercise_fetch_hooks(&SafeFetchHooks::new(PanicFetchHooks));
    exercise_session_hooks(&SafeSessionHooks::new(PanicSessionHooks));
    SafeNotificationSink::new(PanicSink).notify(&Notification::info("ignored"));
}

#[tokio::test]
async fn session_drives_hooks_through_a_full_submit() {
    let catalog = SchemaCatalog::new().with_schema(
        FormType::user_info(),
        FormSchema::new(vec![FieldDescriptor::text("name", "Full Name").required()])
            .expect("schema"),
    );
    let recording = RecordingSessionHooks::default();
    let mut session = FormSession::builder(Arc::new(InMemorySchemaProvider::new(catalog)))
        .hooks(Arc::new(SafeSessionHooks::new(recording.clone())))
        .notification_sink(Arc::new(SafeNotificationSink::new(TracingObservabilityHooks)))
        .build()
        .expect("session");

    session.select_form_type(FormType::user_info()).await;
    session.change_field("name", "Ada").expect("name");
    session.submit().expect("submit");

    assert_eq!(
        *recording.events.lock().expect("events lock"),
        vec![
            "schema_requested",
            "schema_applied",
            "field_changed",
            "record_saved"
        ]
    );
}

#[tokio::test]
async fn panicking_session_hooks_do_not_break_the_session() {
    let catalog = SchemaCatalog::new().with_schema(
        FormType::address(),
        FormSchema::new(vec![FieldDescriptor::text("street", "Street").required()])
            .expect("schema"),
    );
    let mut session = FormSession::builder(Arc::new(InMemorySchemaProvider::new(catalog)))
        .hooks(Arc::new(SafeSessionHooks::new(PanicSessionHooks)))
        .notification_sink(Arc::new(SafeNotificationSink::new(PanicSink)))
        .build()
        .expect("session");

    session.select_form_type(FormType::address()).await;
    session.change_field("street", "Main").expect("street");
    session.submit().expect("submit");

    assert_eq!(session.records().expect("records").len(), 1);
}
