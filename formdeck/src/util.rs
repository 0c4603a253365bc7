//! Small convenience parsers and table helpers.

use crate::{FieldValue, FormType, RecordGroup};

/// Parses a form type key, accepting common aliases.
pub fn parse_form_type(value: &str) -> Option<FormType> {
    match value
        .trim()
        .to_ascii_lowercase()
        .replace(['-', '_', ' '], "")
        .as_str()
    {
        "userinfo" | "user" | "userinformation" => Some(FormType::user_info()),
        "address" | "addr" | "addressinformation" => Some(FormType::address()),
        "payment" | "pay" | "card" | "paymentinformation" => Some(FormType::payment()),
        _ => None,
    }
}

/// Renders each record of `group` as one cell per column. Missing values
/// render empty.
pub fn table_rows(group: &RecordGroup) -> Vec<Vec<String>> {
    let columns = group.columns();
    group
        .records
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|column| {
                    record
                        .values
                        .get(column)
                        .map(FieldValue::to_string)
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect()
}
