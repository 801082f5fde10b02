//! Source and canonical tables.

use serde::{Deserialize, Serialize};

use crate::field::RequiredField;

/// A single source cell, kept as text exactly as read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Empty,
}

impl CellValue {
    /// Only a zero-length cell is empty; whitespace and markers such as
    /// `N/A` are real text.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.is_empty() {
            Self::Empty
        } else {
            Self::Text(raw)
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// A fully loaded source file: header in file order plus every data row.
///
/// Every row holds exactly one cell per column. Duplicate column names are
/// kept; lookups by name resolve to the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceTable {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl SourceTable {
    /// Builds a table, padding short rows with `Empty` and dropping cells
    /// beyond the header width.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<SourceRow<'_>> {
        self.rows.get(index).map(|cells| SourceRow {
            columns: &self.columns,
            cells,
        })
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = SourceRow<'_>> {
        self.rows.iter().map(|cells| SourceRow {
            columns: &self.columns,
            cells,
        })
    }
}

/// Borrowed view of one source row with name-based cell lookup.
#[derive(Debug, Clone, Copy)]
pub struct SourceRow<'a> {
    columns: &'a [String],
    cells: &'a [CellValue],
}

impl<'a> SourceRow<'a> {
    /// Returns `None` when the row has no column with this exact name.
    pub fn get(&self, column: &str) -> Option<&'a CellValue> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.cells.get(idx)
    }

    pub fn cells(&self) -> &'a [CellValue] {
        self.cells
    }
}

/// One canonical output row, one value per required field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow {
    values: [String; RequiredField::COUNT],
}

impl OutputRow {
    pub fn new(values: [String; RequiredField::COUNT]) -> Self {
        Self { values }
    }

    /// Builds a row by evaluating `f` once per field, in output order.
    pub fn from_fn(mut f: impl FnMut(RequiredField) -> String) -> Self {
        Self {
            values: std::array::from_fn(|idx| f(RequiredField::ALL[idx])),
        }
    }

    pub fn get(&self, field: RequiredField) -> &str {
        &self.values[field.index()]
    }

    /// Values in output column order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (RequiredField, &str)> {
        RequiredField::ALL
            .into_iter()
            .zip(self.values.iter().map(String::as_str))
    }
}

/// The resolved, fixed-schema output table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalTable {
    rows: Vec<OutputRow>,
}

impl CanonicalTable {
    pub fn new(rows: Vec<OutputRow>) -> Self {
        Self { rows }
    }

    /// Header names in output column order.
    pub fn header() -> [&'static str; RequiredField::COUNT] {
        RequiredField::ALL.map(RequiredField::as_str)
    }

    pub fn rows(&self) -> &[OutputRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<OutputRow> for CanonicalTable {
    fn from_iter<I: IntoIterator<Item = OutputRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    #[test]
    fn only_zero_length_cells_are_empty() {
        assert_eq!(CellValue::from_raw(""), CellValue::Empty);
        assert_eq!(CellValue::from_raw(" "), text(" "));
        assert_eq!(CellValue::from_raw("N/A"), text("N/A"));
        assert_eq!(CellValue::from_raw("007").as_text(), Some("007"));
    }

    #[test]
    fn rows_are_normalized_to_header_width() {
        let table = SourceTable::new(
            vec!["A".to_string(), "B".to_string()],
            vec![vec![text("1")], vec![text("1"), text("2"), text("3")]],
        );
        assert_eq!(table.len(), 2);
        let first = table.row(0).unwrap();
        assert_eq!(first.cells(), &[text("1"), CellValue::Empty]);
        let second = table.row(1).unwrap();
        assert_eq!(second.cells(), &[text("1"), text("2")]);
    }

    #[test]
    fn duplicate_columns_resolve_to_first() {
        let table = SourceTable::new(
            vec!["Rate".to_string(), "Rate".to_string()],
            vec![vec![text("0.1"), text("0.2")]],
        );
        let row = table.row(0).unwrap();
        assert_eq!(row.get("Rate"), Some(&text("0.1")));
        assert_eq!(row.get("rate"), None);
        assert_eq!(table.columns().len(), 2);
    }

    #[test]
    fn output_row_is_built_in_field_order() {
        let mut seen = Vec::new();
        let row = OutputRow::from_fn(|field| {
            seen.push(field);
            field.as_str().to_uppercase()
        });
        assert_eq!(seen, RequiredField::ALL.to_vec());
        assert_eq!(row.get(RequiredField::Currency), "CURRENCY");
        assert_eq!(row.values().len(), RequiredField::COUNT);
    }

    #[test]
    fn header_matches_required_fields() {
        assert_eq!(
            CanonicalTable::header().join(","),
            "destination,prefix,rate,setup,currency,description"
        );
    }

    #[test]
    fn cell_value_serializes_tagged() {
        let json = serde_json::to_string(&text("US")).unwrap();
        assert_eq!(json, r#"{"kind":"Text","value":"US"}"#);
        let empty: CellValue = serde_json::from_str(r#"{"kind":"Empty"}"#).unwrap();
        assert_eq!(empty, CellValue::Empty);
    }
}
