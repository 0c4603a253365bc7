//! Unified facade over the formdeck workspace crates.
//!
//! This crate is the single dependency for most applications. It re-exports
//! the schema, record, session, and observability crates and adds wiring
//! helpers and macros for common setup.

mod macros;

pub mod prelude;
pub mod runtime;
pub mod util;

pub use fcommon;
pub use fform;
pub use fobserve;
pub use frecords;
pub use fschema;

pub use fcommon::{BoxFuture, FormType, RecordId};
pub use fform::{
    DEFAULT_NOTIFICATION_TTL, DanglingEditPolicy, EditCancelReason, ErrorSet, FormSession,
    FormSessionBuilder, NoopNotificationSink, NoopSessionHooks, Notification, NotificationKind,
    NotificationSink, SaveKind, SchemaApply, SchemaRequest, SchemaResponse, SchemaTicket,
    SessionError, SessionErrorKind, SessionHooks, SessionMessages, SessionMode, SessionPolicy,
    SessionView, SubmitOutcome, ToastCenter, ValidationOutcome, VisibleToast, progress, validate,
};
pub use fobserve::{
    MetricsObservabilityHooks, SafeFetchHooks, SafeNotificationSink, SafeSessionHooks,
    TracingObservabilityHooks,
};
pub use frecords::{
    FieldValue, FieldValues, InMemoryRecordStore, Record, RecordError, RecordErrorKind,
    RecordGroup, RecordStore, group_by_form_type,
};
pub use fschema::{
    FetchOutcome, FetchReport, FieldDescriptor, FormSchema, InMemorySchemaProvider, InputKind,
    NoopFetchHooks, RetryPolicy, RetryingSchemaProvider, SchemaCatalog, SchemaError,
    SchemaErrorKind, SchemaFetchHooks, SchemaFuture, SchemaProvider,
};

pub use runtime::{
    SessionBundle, build_session, build_session_with, build_session_with_store, catalog_provider,
    catalog_provider_from_json, in_memory_store, open_session, retrying_provider,
};
pub use util::{parse_form_type, table_rows};

#[cfg(test)]
mod tests {
    use crate::{FieldValue, InputKind};

    #[test]
    fn fd_values_macro_builds_typed_values() {
        let values = crate::fd_values! {
            "street" => "Main",
            "units" => 3,
        };

        assert_eq!(values.get("street"), Some(&FieldValue::from("Main")));
        assert_eq!(values.get("units"), Some(&FieldValue::Number(3.0)));
        assert!(crate::fd_values!().is_empty());
    }

    #[test]
    fn fd_field_macro_maps_kind_shorthands() {
        let age = crate::fd_field!(number "age", "Age");
        assert_eq!(age.input_kind, InputKind::Number);
        assert!(!age.required);

        let card = crate::fd_field!(choice "cardType", "Card Type", ["Visa"], required);
        assert!(card.required);
        assert_eq!(card.input_kind, InputKind::Choice);
    }

    #[test]
    fn fd_schema_macro_rejects_duplicate_names() {
        let result = crate::fd_schema![
            (text "name", "Name"),
            (email "name", "Email", required),
        ];

        assert!(result.is_err());
    }
}
