//! Serde-loadable catalog mapping form types to their schemas.
//!
//! ```rust
//! use fcommon::FormType;
//! use fschema::SchemaCatalog;
//!
//! let catalog = SchemaCatalog::from_json_str(r#"{
//!     "userInfo": { "fields": [
//!         { "name": "name", "type": "text", "label": "Name", "required": true }
//!     ] }
//! }"#).expect("catalog should parse");
//!
//! assert_eq!(catalog.len(), 1);
//! assert!(catalog.get(&FormType::user_info()).is_some());
//! ```

use std::collections::BTreeMap;

use fcommon::FormType;
use serde::{Deserialize, Serialize};

use crate::{FormSchema, SchemaError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaCatalog {
    schemas: BTreeMap<FormType, FormSchema>,
}

impl SchemaCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn insert(&mut self, form_type: FormType, schema: FormSchema) -> Option<FormSchema> {
        self.schemas.insert(form_type, schema)
    }

    pub fn with_schema(mut self, form_type: impl Into<FormType>, schema: FormSchema) -> Self {
        self.insert(form_type.into(), schema);
        self
    }

    pub fn get(&self, form_type: &FormType) -> Option<&FormSchema> {
        self.schemas.get(form_type)
    }

    pub fn contains(&self, form_type: &FormType) -> bool {
        self.schemas.contains_key(form_type)
    }

    pub fn form_types(&self) -> impl Iterator<Item = &FormType> {
        self.schemas.keys()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldDescriptor, SchemaErrorKind};

    #[test]
    fn catalog_round_trips_through_json() {
        let catalog = SchemaCatalog::new().with_schema(
            "payment",
            FormSchema::new(vec![
                FieldDescriptor::text("cardNumber", "Card Number").required(),
                FieldDescriptor::choice("cardType", "Card Type", ["Visa", "Amex"]).required(),
            ])
            .expect("schema")
            .with_title("Payment Information"),
        );

        let json = catalog.to_json_string().expect("serialize catalog");
        let decoded = SchemaCatalog::from_json_str(&json).expect("decode catalog");

        assert_eq!(decoded, catalog);
        assert_eq!(
            decoded.form_types().collect::<Vec<_>>(),
            vec![&FormType::payment()]
        );
    }

    #[test]
    fn malformed_catalog_reports_invalid_schema() {
        let error = SchemaCatalog::from_json_str("{ \"address\": { \"fields\": 7 } }")
            .expect_err("fields must be a list");

        assert_eq!(error.kind, SchemaErrorKind::InvalidSchema);
        assert!(!error.retryable);
    }
}
