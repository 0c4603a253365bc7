//! Typed scalar field values and the name-to-value mapping used by drafts and records.
//!
//! ```rust
//! use frecords::{FieldValue, FieldValues};
//!
//! let mut values = FieldValues::new();
//! values.insert("name", "Ada");
//! values.insert("age", 36);
//!
//! assert_eq!(values.get("age"), Some(&FieldValue::Number(36.0)));
//! assert!(values.is_filled("name"));
//! assert!(!values.is_filled("email"));
//! ```

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Blank means absent for required-field purposes: whitespace-only text
    /// or a non-finite number.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Number(number) => !number.is_finite(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(_) => None,
        }
    }

    /// Converts text into [`FieldValue::Number`] when the number renders back
    /// to exactly the same text.
    ///
    /// Leading zeros, exponents, padding and non-finite values stay text.
    pub fn into_numeric(self) -> Self {
        match self {
            Self::Text(text) => match text.parse::<f64>() {
                Ok(number) if number.is_finite() && number.to_string() == text => {
                    Self::Number(number)
                }
                _ => Self::Text(text),
            },
            number => number,
        }
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues(BTreeMap<String, FieldValue>);

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.0.insert(name.into(), value.into())
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.0.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Present and not blank.
    pub fn is_filled(&self, name: &str) -> bool {
        self.get(name).is_some_and(|value| !value.is_blank())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FieldValues
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

impl IntoIterator for FieldValues {
    type Item = (String, FieldValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_text_and_non_finite_numbers_are_blank() {
        assert!(FieldValue::from("   ").is_blank());
        assert!(FieldValue::from("").is_blank());
        assert!(!FieldValue::from(" x ").is_blank());
        assert!(!FieldValue::from(0).is_blank());
        assert!(FieldValue::from(f64::NAN).is_blank());
        assert!(FieldValue::from(f64::INFINITY).is_blank());

        let values = FieldValues::new().with("age", f64::NAN);
        assert!(!values.is_filled("age"));
    }

    #[test]
    fn into_numeric_converts_canonical_numbers() {
        assert_eq!(FieldValue::from("42").into_numeric(), FieldValue::Number(42.0));
        assert_eq!(FieldValue::from("4.5").into_numeric(), FieldValue::Number(4.5));
        assert_eq!(FieldValue::from("-3").into_numeric(), FieldValue::Number(-3.0));
    }

    #[test]
    fn into_numeric_keeps_text_that_would_not_round_trip() {
        for text in ["007", "1e3", " 42 ", "4.50", "+5", "forty", "inf", "NaN", ""] {
            assert_eq!(
                FieldValue::from(text).into_numeric(),
                FieldValue::from(text),
                "{text:?} should stay text"
            );
        }
    }

    #[test]
    fn display_renders_whole_numbers_without_fraction() {
        assert_eq!(FieldValue::Number(42.0).to_string(), "42");
        assert_eq!(FieldValue::Number(2.5).to_string(), "2.5");
        assert_eq!(FieldValue::from("abc").to_string(), "abc");
    }

    #[test]
    fn values_serialize_as_plain_json_scalars() {
        let values = FieldValues::new().with("zip", "02139").with("units", 3);
        let json = serde_json::to_string(&values).expect("serialize values");
        assert_eq!(json, r#"{"units":3.0,"zip":"02139"}"#);

        let decoded: FieldValues = serde_json::from_str(&json).expect("decode values");
        assert_eq!(decoded, values);
    }

    #[test]
    fn collects_from_pairs() {
        let values: FieldValues = [("a", "1"), ("b", " ")].into_iter().collect();

        assert_eq!(values.len(), 2);
        assert!(values.is_filled("a"));
        assert!(!values.is_filled("b"));
        assert_eq!(values.names().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
