//! Required-field validation over a draft and its schema.
//!
//! ```rust
//! use fform::validate;
//! use frecords::FieldValues;
//! use fschema::{FieldDescriptor, FormSchema, InputKind};
//!
//! let schema = FormSchema::new(vec![
//!     FieldDescriptor::new("email", InputKind::Email, "Email").required(),
//! ])
//! .expect("schema");
//!
//! let outcome = validate(&FieldValues::new(), &schema);
//! assert!(!outcome.is_valid);
//! assert_eq!(outcome.errors.get("email"), Some("Email is required"));
//! ```

use std::collections::BTreeMap;

use frecords::FieldValues;
use fschema::FormSchema;
use serde::Serialize;

/// Field name to human-readable message. Empty messages are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ErrorSet(BTreeMap<String, String>);

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        let message = message.into();
        if message.is_empty() {
            self.0.remove(&field);
        } else {
            self.0.insert(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Returns whether an error was present.
    pub fn clear_field(&mut self, field: &str) -> bool {
        self.0.remove(field).is_some()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub errors: ErrorSet,
}

pub fn validate(draft: &FieldValues, schema: &FormSchema) -> ValidationOutcome {
    let mut errors = ErrorSet::new();
    for field in schema.required_fields() {
        if !draft.is_filled(&field.name) {
            errors.insert(field.name.clone(), format!("{} is required", field.label));
        }
    }

    ValidationOutcome {
        is_valid: errors.is_empty(),
        errors,
    }
}
