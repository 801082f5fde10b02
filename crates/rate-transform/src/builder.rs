//! Canonical table assembly.

use rate_model::{
    CanonicalTable, DefaultValues, FieldMapping, NumericFallback, NumericOutcome, OutputRow,
    SourceRow, SourceTable, TransformConfig,
};

use crate::mapper::resolve_field;
use crate::numeric::transform_numeric;

/// A canonical table plus the monetary cells that were kept verbatim.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildReport {
    pub table: CanonicalTable,
    pub fallbacks: Vec<NumericFallback>,
}

/// Builds the canonical table, one output row per source row, in order.
pub fn build(
    source: &SourceTable,
    mapping: &FieldMapping,
    defaults: &DefaultValues,
    config: &TransformConfig,
) -> CanonicalTable {
    build_with_report(source, mapping, defaults, config).table
}

/// Same as [`build`], also collecting non-numeric monetary cells.
pub fn build_with_report(
    source: &SourceTable,
    mapping: &FieldMapping,
    defaults: &DefaultValues,
    config: &TransformConfig,
) -> BuildReport {
    let (rows, fallbacks): (Vec<OutputRow>, Vec<Vec<NumericFallback>>) = source
        .rows()
        .enumerate()
        .map(|(index, row)| build_row(index, &row, mapping, defaults, config))
        .unzip();
    BuildReport {
        table: CanonicalTable::new(rows),
        fallbacks: fallbacks.into_iter().flatten().collect(),
    }
}

fn build_row(
    index: usize,
    row: &SourceRow<'_>,
    mapping: &FieldMapping,
    defaults: &DefaultValues,
    config: &TransformConfig,
) -> (OutputRow, Vec<NumericFallback>) {
    let mut fallbacks = Vec::new();
    let output = OutputRow::from_fn(|field| {
        let value = resolve_field(row, field, mapping, defaults);
        if !field.is_numeric() {
            return value;
        }
        match transform_numeric(&value, config) {
            NumericOutcome::PassThrough(original) => {
                fallbacks.push(NumericFallback {
                    row: index,
                    field,
                    value: original.clone(),
                });
                original
            }
            outcome => outcome.into_value(),
        }
    });
    (output, fallbacks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rate_model::{CellValue, RequiredField};

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    #[test]
    fn builds_row_from_mapped_columns() {
        let source = SourceTable::new(
            vec!["Destino".to_string(), "Tarifa".to_string()],
            vec![vec![text("US"), text("0.05")]],
        );
        let mapping = FieldMapping::new()
            .with_column(RequiredField::Destination, "Destino")
            .with_column(RequiredField::Rate, "Tarifa");
        let table = build(
            &source,
            &mapping,
            &DefaultValues::new(),
            &TransformConfig::new(10.0, 5.0),
        );
        assert_eq!(table.len(), 1);
        let row = &table.rows()[0];
        assert_eq!(row.get(RequiredField::Destination), "US");
        assert_eq!(row.get(RequiredField::Rate), "0.047250");
        assert_eq!(row.get(RequiredField::Setup), "");
        assert_eq!(row.get(RequiredField::Prefix), "");
    }

    #[test]
    fn default_for_blank_rate_is_rescaled() {
        let source = SourceTable::new(vec!["Tarifa".to_string()], vec![vec![CellValue::Empty]]);
        let mapping = FieldMapping::new().with_column(RequiredField::Rate, "Tarifa");
        let defaults = DefaultValues::new()
            .with(RequiredField::Rate, "1")
            .with(RequiredField::Setup, "2,5");
        let table = build(&source, &mapping, &defaults, &TransformConfig::new(50.0, 0.0));
        let row = &table.rows()[0];
        assert_eq!(row.get(RequiredField::Rate), "0.500000");
        assert_eq!(row.get(RequiredField::Setup), "1.250000");
    }

    #[test]
    fn records_pass_through_cells_without_stopping() {
        let source = SourceTable::new(
            vec!["Rate".to_string(), "Setup".to_string()],
            vec![
                vec![text("N/A"), text("1")],
                vec![text("0.2"), text("free")],
            ],
        );
        let mapping = FieldMapping::new()
            .with_column(RequiredField::Rate, "Rate")
            .with_column(RequiredField::Setup, "Setup");
        let report = build_with_report(
            &source,
            &mapping,
            &DefaultValues::new(),
            &TransformConfig::default(),
        );
        assert_eq!(report.table.len(), 2);
        assert_eq!(report.table.rows()[0].get(RequiredField::Rate), "N/A");
        assert_eq!(report.table.rows()[0].get(RequiredField::Setup), "1.000000");
        assert_eq!(report.table.rows()[1].get(RequiredField::Rate), "0.200000");
        assert_eq!(report.table.rows()[1].get(RequiredField::Setup), "free");
        assert_eq!(
            report.fallbacks,
            vec![
                NumericFallback {
                    row: 0,
                    field: RequiredField::Rate,
                    value: "N/A".to_string(),
                },
                NumericFallback {
                    row: 1,
                    field: RequiredField::Setup,
                    value: "free".to_string(),
                },
            ]
        );
    }

    #[test]
    fn empty_source_builds_empty_table() {
        let source = SourceTable::new(vec!["A".to_string()], Vec::new());
        let table = build(
            &source,
            &FieldMapping::new(),
            &DefaultValues::new(),
            &TransformConfig::default(),
        );
        assert!(table.is_empty());
    }
}
