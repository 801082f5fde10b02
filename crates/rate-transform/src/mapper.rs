//! Per-row field resolution.

use rate_model::{CellValue, ColumnRef, DefaultValues, FieldMapping, RequiredField, SourceRow};

/// Returns the effective raw value of `field` for one row.
///
/// The mapped cell wins when the field is mapped, the column exists in the
/// row and the cell is not empty. Otherwise the field's default is used, or
/// an empty string when none is configured.
pub fn resolve_field(
    row: &SourceRow<'_>,
    field: RequiredField,
    mapping: &FieldMapping,
    defaults: &DefaultValues,
) -> String {
    let cell = match mapping.get(field) {
        ColumnRef::Column(column) => row.get(column),
        ColumnRef::Unmapped => None,
    };
    match cell {
        Some(CellValue::Text(value)) => value.clone(),
        Some(CellValue::Empty) | None => defaults.get(field).to_string(),
    }
}
