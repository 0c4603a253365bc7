//! Common `fschema` imports for downstream crates.

pub use crate::{
    FetchOutcome, FetchReport, FieldDescriptor, FormSchema, InMemorySchemaProvider, InputKind,
    NoopFetchHooks, RetryPolicy, RetryingSchemaProvider, SchemaCatalog, SchemaError,
    SchemaErrorKind, SchemaFetchHooks, SchemaFuture, SchemaProvider,
};
pub use fcommon::{BoxFuture, FormType};
