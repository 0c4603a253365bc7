//! Form schemas and the providers that serve them.
//!
//! ```rust
//! use fcommon::FormType;
//! use fschema::{FieldDescriptor, FormSchema, InMemorySchemaProvider, SchemaCatalog, SchemaProvider};
//!
//! let catalog = SchemaCatalog::new().with_schema(
//!     "address",
//!     FormSchema::new(vec![FieldDescriptor::text("street", "Street").required()])
//!         .expect("valid schema"),
//! );
//!
//! let provider = InMemorySchemaProvider::new(catalog);
//! let form_type = FormType::address();
//! let _pending = provider.fetch_schema(&form_type);
//! ```

mod catalog;
mod error;
mod provider;
mod retry;
mod schema;

pub mod prelude;

pub use catalog::SchemaCatalog;
pub use error::{SchemaError, SchemaErrorKind};
pub use provider::{InMemorySchemaProvider, SchemaFuture, SchemaProvider};
pub use retry::{
    FetchOutcome, FetchReport, NoopFetchHooks, RetryPolicy, RetryingSchemaProvider,
    SchemaFetchHooks,
};
pub use schema::{FieldDescriptor, FormSchema, InputKind};
pub use fcommon::FormType;
