//! Schema provider contract and the catalog-backed in-memory provider.
//!
//! ```rust
//! use fcommon::FormType;
//! use fschema::{FieldDescriptor, FormSchema, InMemorySchemaProvider, SchemaCatalog};
//!
//! let mut catalog = SchemaCatalog::new();
//! catalog.insert(
//!     FormType::user_info(),
//!     FormSchema::new(vec![FieldDescriptor::text("name", "Name").required()]).expect("schema"),
//! );
//!
//! let provider = InMemorySchemaProvider::new(catalog);
//! assert!(provider.catalog().contains(&FormType::user_info()));
//! ```

use std::sync::Mutex;

use fcommon::{BoxFuture, FormType, Registry};

use crate::{FormSchema, SchemaCatalog, SchemaError};

pub type SchemaFuture<'a, T> = BoxFuture<'a, T>;

pub trait SchemaProvider: Send + Sync {
    fn fetch_schema<'a>(
        &'a self,
        form_type: &'a FormType,
    ) -> SchemaFuture<'a, Result<FormSchema, SchemaError>>;
}

/// Serves schemas straight from a [`SchemaCatalog`].
///
/// Individual form types can be forced to fail, which is how callers
/// exercise the load-error path without a real backend.
#[derive(Debug, Default)]
pub struct InMemorySchemaProvider {
    catalog: SchemaCatalog,
    failures: Mutex<Registry<FormType, SchemaError>>,
}

impl InMemorySchemaProvider {
    pub fn new(catalog: SchemaCatalog) -> Self {
        Self {
            catalog,
            failures: Mutex::new(Registry::new()),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, SchemaError> {
        Ok(Self::new(SchemaCatalog::from_json_str(json)?))
    }

    pub fn catalog(&self) -> &SchemaCatalog {
        &self.catalog
    }

    pub fn fail_with(&self, form_type: impl Into<FormType>, error: SchemaError) {
        if let Ok(mut failures) = self.failures.lock() {
            failures.insert(form_type.into(), error);
        }
    }

    pub fn clear_failure(&self, form_type: &FormType) {
        if let Ok(mut failures) = self.failures.lock() {
            failures.remove(form_type);
        }
    }
}

impl SchemaProvider for InMemorySchemaProvider {
    fn fetch_schema<'a>(
        &'a self,
        form_type: &'a FormType,
    ) -> SchemaFuture<'a, Result<FormSchema, SchemaError>> {
        Box::pin(async move {
            let failures = self
                .failures
                .lock()
                .map_err(|_| SchemaError::other("schema failure table lock poisoned"))?;
            if let Some(error) = failures.get(form_type) {
                return Err(error.clone());
            }
            drop(failures);

            self.catalog.get(form_type).cloned().ok_or_else(|| {
                SchemaError::not_found(format!("no schema registered for '{form_type}'"))
            })
        })
    }
}
