//! Field descriptors and ordered form schemas.
//!
//! ```rust
//! use fschema::{FieldDescriptor, FormSchema, InputKind};
//!
//! let schema = FormSchema::new(vec![
//!     FieldDescriptor::new("email", InputKind::Email, "Email").required(),
//!     FieldDescriptor::choice("plan", "Plan", ["basic", "pro"]),
//! ])
//! .expect("names are unique");
//!
//! assert_eq!(schema.len(), 2);
//! assert_eq!(schema.required_fields().count(), 1);
//! assert_eq!(schema.field("plan").and_then(|f| f.placeholder()), Some("Select Plan".to_string()));
//! ```

use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::SchemaError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InputKind {
    Text,
    Number,
    Email,
    Tel,
    Date,
    Password,
    Choice,
    Other(String),
}

impl InputKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Date => "date",
            Self::Password => "password",
            Self::Choice => "choice",
            Self::Other(kind) => kind.as_str(),
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Choice)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number)
    }
}

impl Display for InputKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for InputKind {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Self::Text,
            "number" => Self::Number,
            "email" => Self::Email,
            "tel" => Self::Tel,
            "date" => Self::Date,
            "password" => Self::Password,
            "choice" | "dropdown" | "select" => Self::Choice,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for InputKind {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<InputKind> for String {
    fn from(value: InputKind) -> Self {
        match value {
            InputKind::Other(kind) => kind,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub input_kind: InputKind,
    pub label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, rename = "options", skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, input_kind: InputKind, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input_kind,
            label: label.into(),
            required: false,
            choices: None,
        }
    }

    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, InputKind::Text, label)
    }

    pub fn choice(
        name: impl Into<String>,
        label: impl Into<String>,
        choices: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            choices: Some(choices.into_iter().map(Into::into).collect()),
            ..Self::new(name, InputKind::Choice, label)
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn choices(&self) -> &[String] {
        self.choices.as_deref().unwrap_or_default()
    }

    /// Empty-selection prompt for choice fields.
    pub fn placeholder(&self) -> Option<String> {
        self.input_kind
            .is_choice()
            .then(|| format!("Select {}", self.label))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawFormSchema")]
pub struct FormSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    fields: Vec<FieldDescriptor>,
}

#[derive(Deserialize)]
struct RawFormSchema {
    #[serde(default)]
    title: Option<String>,
    fields: Vec<FieldDescriptor>,
}

impl TryFrom<RawFormSchema> for FormSchema {
    type Error = SchemaError;

    fn try_from(value: RawFormSchema) -> Result<Self, Self::Error> {
        let schema = FormSchema::new(value.fields)?;
        Ok(match value.title {
            Some(title) => schema.with_title(title),
            None => schema,
        })
    }
}

impl FormSchema {
    /// Names saved records use for their own identity and form type.
    pub const RESERVED_FIELD_NAMES: [&'static str; 2] = ["id", "type"];

    /// Builds a schema, rejecting empty, reserved and duplicate field names.
    pub fn new(fields: Vec<FieldDescriptor>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::new();
        for field in &fields {
            if field.name.trim().is_empty() {
                return Err(SchemaError::invalid_schema("field name must not be empty"));
            }

            if Self::RESERVED_FIELD_NAMES.contains(&field.name.as_str()) {
                return Err(SchemaError::invalid_schema(format!(
                    "field name '{}' is reserved",
                    field.name
                )));
            }

            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::invalid_schema(format!(
                    "duplicate field name '{}'",
                    field.name
                )));
            }
        }

        Ok(Self {
            title: None,
            fields,
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|field| field.required)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SchemaErrorKind;

    #[test]
    fn duplicate_field_names_are_rejected() {
        let error = FormSchema::new(vec![
            FieldDescriptor::text("name", "Name"),
            FieldDescriptor::text("name", "Full Name"),
        ])
        .expect_err("duplicates should fail");

        assert_eq!(error.kind, SchemaErrorKind::InvalidSchema);
        assert!(error.message.contains("name"));
    }

    #[test]
    fn reserved_record_keys_are_rejected_as_field_names() {
        for name in FormSchema::RESERVED_FIELD_NAMES {
            let error = FormSchema::new(vec![
                FieldDescriptor::text("street", "Street"),
                FieldDescriptor::text(name, "Shadow"),
            ])
            .expect_err("reserved name should fail");

            assert_eq!(error.kind, SchemaErrorKind::InvalidSchema);
            assert!(error.message.contains("reserved"));
        }

        assert!(FormSchema::new(vec![FieldDescriptor::text("typeCode", "Type Code")]).is_ok());
    }

    #[test]
    fn deserializing_a_schema_with_a_reserved_field_fails() {
        let json = r#"{ "fields": [
            { "name": "id", "type": "text", "label": "Identifier" }
        ] }"#;

        let error = serde_json::from_str::<FormSchema>(json).expect_err("reserved name");
        assert!(error.to_string().contains("reserved"));
    }

    #[test]
    fn input_kind_accepts_dropdown_and_select_spellings() {
        assert_eq!(InputKind::from("dropdown"), InputKind::Choice);
        assert_eq!(InputKind::from("Number"), InputKind::Number);
        assert_eq!(
            InputKind::from("color"),
            InputKind::Other("color".to_string())
        );
        assert_eq!(String::from(InputKind::Other("color".into())), "color");
    }

    #[test]
    fn schema_deserializes_from_field_list_json() {
        let json = r#"{
            "title": "Payment Information",
            "fields": [
                { "name": "cardNumber", "type": "text", "label": "Card Number", "required": true },
                { "name": "cardType", "type": "dropdown", "label": "Card Type", "required": true,
                  "options": ["Visa", "Mastercard"] },
                { "name": "notes", "type": "text", "label": "Notes" }
            ]
        }"#;

        let schema: FormSchema = serde_json::from_str(json).expect("schema should parse");
        assert_eq!(schema.title(), Some("Payment Information"));
        assert_eq!(schema.len(), 3);
        assert_eq!(schema.required_fields().count(), 2);

        let card_type = schema.field("cardType").expect("card type field");
        assert!(card_type.input_kind.is_choice());
        assert_eq!(card_type.choices(), ["Visa", "Mastercard"]);
        assert!(schema.field("notes").expect("notes").choices().is_empty());
    }

    #[test]
    fn deserializing_duplicate_names_fails() {
        let json = r#"{ "fields": [
            { "name": "a", "type": "text", "label": "A" },
            { "name": "a", "type": "text", "label": "A again" }
        ] }"#;

        assert!(serde_json::from_str::<FormSchema>(json).is_err());
    }

    #[test]
    fn placeholder_only_applies_to_choice_fields() {
        let text = FieldDescriptor::text("city", "City");
        let choice = FieldDescriptor::choice("country", "Country", ["US", "CA"]);

        assert_eq!(text.placeholder(), None);
        assert_eq!(choice.placeholder().as_deref(), Some("Select Country"));
    }
}
