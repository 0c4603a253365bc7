//! Saved records and their per-form-type grouping.

use fcommon::{FormType, RecordId};
use serde::{Deserialize, Serialize};

use crate::FieldValues;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub form_type: FormType,
    #[serde(flatten)]
    pub values: FieldValues,
}

impl Record {
    pub fn new(id: impl Into<RecordId>, form_type: impl Into<FormType>, values: FieldValues) -> Self {
        Self {
            id: id.into(),
            form_type: form_type.into(),
            values,
        }
    }

    /// Creates a record under a freshly generated identity.
    pub fn create(form_type: impl Into<FormType>, values: FieldValues) -> Self {
        Self::new(RecordId::generate(), form_type, values)
    }
}

/// Records sharing one form type, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordGroup {
    pub form_type: FormType,
    pub records: Vec<Record>,
}

impl RecordGroup {
    pub fn title(&self) -> &str {
        self.form_type.display_title()
    }

    /// Field names appearing in the group, in first-seen order.
    pub fn columns(&self) -> Vec<String> {
        let mut columns: Vec<String> = Vec::new();
        for record in &self.records {
            for name in record.values.names() {
                if !columns.iter().any(|column| column == name) {
                    columns.push(name.to_string());
                }
            }
        }

        columns
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Partitions records by form type.
///
/// Partitions appear in order of their first record; empty partitions
/// never appear.
pub fn group_by_form_type(records: impl IntoIterator<Item = Record>) -> Vec<RecordGroup> {
    let mut groups: Vec<RecordGroup> = Vec::new();
    for record in records {
        match groups
            .iter_mut()
            .find(|group| group.form_type == record.form_type)
        {
            Some(group) => group.records.push(record),
            None => groups.push(RecordGroup {
                form_type: record.form_type.clone(),
                records: vec![record],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, form_type: FormType, values: FieldValues) -> Record {
        Record::new(id, form_type, values)
    }

    #[test]
    fn grouping_preserves_relative_order_within_each_type() {
        let groups = group_by_form_type(vec![
            record("1", FormType::user_info(), FieldValues::new()),
            record("2", FormType::address(), FieldValues::new()),
            record("3", FormType::user_info(), FieldValues::new()),
            record("4", FormType::address(), FieldValues::new()),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].form_type, FormType::user_info());
        assert_eq!(groups[0].title(), "User Information");
        let first_ids: Vec<&str> = groups[0].records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(first_ids, vec!["1", "3"]);
        let second_ids: Vec<&str> = groups[1].records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(second_ids, vec!["2", "4"]);
    }

    #[test]
    fn grouping_nothing_yields_no_partitions() {
        assert!(group_by_form_type(Vec::new()).is_empty());
    }

    #[test]
    fn columns_union_field_names_in_first_seen_order() {
        let group = RecordGroup {
            form_type: FormType::address(),
            records: vec![
                record("1", FormType::address(), FieldValues::new().with("street", "Main")),
                record(
                    "2",
                    FormType::address(),
                    FieldValues::new().with("city", "Oslo").with("street", "Elm"),
                ),
            ],
        };

        assert_eq!(group.columns(), vec!["street", "city"]);
    }

    #[test]
    fn record_serializes_flat_with_id_and_type() {
        let record = record(
            "abc",
            FormType::payment(),
            FieldValues::new().with("cardType", "Visa"),
        );

        let json = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(json["id"], "abc");
        assert_eq!(json["type"], "payment");
        assert_eq!(json["cardType"], "Visa");
    }

    #[test]
    fn created_records_get_distinct_ids() {
        let a = Record::create(FormType::user_info(), FieldValues::new());
        let b = Record::create(FormType::user_info(), FieldValues::new());
        assert_ne!(a.id, b.id);
    }
}
