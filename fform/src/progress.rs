//! Required-field completion ratio.

use frecords::FieldValues;
use fschema::FormSchema;

/// Percentage in `[0, 100]` of required fields holding a non-blank value.
///
/// A schema without required fields is vacuously complete.
pub fn progress(draft: &FieldValues, schema: &FormSchema) -> f64 {
    let (total, filled) = schema
        .required_fields()
        .fold((0_usize, 0_usize), |(total, filled), field| {
            let filled = filled + usize::from(draft.is_filled(&field.name));
            (total + 1, filled)
        });

    if total == 0 {
        return 100.0;
    }

    filled as f64 / total as f64 * 100.0
}
