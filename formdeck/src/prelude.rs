//! Common imports for most formdeck applications.

pub use crate::{
    build_session, build_session_with, build_session_with_store, catalog_provider,
    catalog_provider_from_json, in_memory_store, open_session, parse_form_type,
    retrying_provider, table_rows,
};
pub use crate::{fd_field, fd_schema, fd_values};
pub use crate::{
    DanglingEditPolicy, ErrorSet, FieldDescriptor, FieldValue, FieldValues, FormSchema,
    FormSession, FormSessionBuilder, FormType, InMemoryRecordStore, InMemorySchemaProvider,
    InputKind, Notification, NotificationKind, Record, RecordGroup, RecordId, RecordStore,
    RetryPolicy, SchemaApply, SchemaCatalog, SchemaError, SchemaProvider, SessionBundle,
    SessionError, SessionErrorKind, SessionMode, SessionPolicy, SessionView, SubmitOutcome,
    ToastCenter,
};
