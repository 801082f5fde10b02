//! Integration tests for the generation pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use rate_cli::pipeline::{generate, inspect};
use rate_cli::request::GenerateRequest;
use rate_ingest::{ErrorKind, IngestError};
use rate_model::{DefaultValues, FieldMapping, RequiredField, TransformConfig};
use tempfile::TempDir;

const RATES_CSV: &str = "\
Destino,Prefijo,Tarifa,Cargo,Notas
US,1,0.05,\"0,10\",Mainland
Mexico Mobile,0052,\"12,50\",,\"Telcel, Movistar\"
Cuba,53,N/A,1,
";

fn write_source(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write source");
    path
}

fn read_rows(bytes: &[u8]) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(bytes);
    reader
        .records()
        .map(|record| {
            record
                .expect("record")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}

fn full_mapping() -> FieldMapping {
    FieldMapping::new()
        .with_column(RequiredField::Destination, "Destino")
        .with_column(RequiredField::Prefix, "Prefijo")
        .with_column(RequiredField::Rate, "Tarifa")
        .with_column(RequiredField::Setup, "Cargo")
        .with_column(RequiredField::Description, "Notas")
}

#[test]
fn inspect_lists_columns() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "rates.csv", RATES_CSV);
    let columns = inspect(&path, 5).expect("inspect");
    assert_eq!(columns, vec!["Destino", "Prefijo", "Tarifa", "Cargo", "Notas"]);
}

#[test]
fn generates_canonical_csv() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "rates.csv", RATES_CSV);
    let defaults = DefaultValues::new()
        .with(RequiredField::Currency, "USD")
        .with(RequiredField::Setup, "0");
    let config = TransformConfig::new(10.0, 5.0);

    let result = generate(&path, &full_mapping(), &defaults, &config).expect("generate");
    assert_eq!(result.rows, 3);
    assert!(result.missing_columns.is_empty());
    assert_eq!(result.fallbacks.len(), 1);
    assert_eq!(result.fallbacks[0].row, 2);
    assert_eq!(result.fallbacks[0].field, RequiredField::Rate);

    let rows = read_rows(&result.csv);
    assert_eq!(
        rows,
        vec![
            vec!["destination", "prefix", "rate", "setup", "currency", "description"],
            vec!["US", "1", "0.047250", "0.094500", "USD", "Mainland"],
            vec![
                "Mexico Mobile",
                "0052",
                "11.812500",
                "0.000000",
                "USD",
                "Telcel, Movistar"
            ],
            vec!["Cuba", "53", "N/A", "0.945000", "USD", ""],
        ]
    );
}

#[test]
fn identity_transform_formats_six_decimals() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "rates.csv", "A,B\nUS,0.05\n");
    let mapping = FieldMapping::new()
        .with_column(RequiredField::Destination, "A")
        .with_column(RequiredField::Rate, "B");
    let result = generate(
        &path,
        &mapping,
        &DefaultValues::new(),
        &TransformConfig::default(),
    )
    .expect("generate");
    let text = String::from_utf8(result.csv).unwrap();
    assert_eq!(
        text,
        "destination,prefix,rate,setup,currency,description\nUS,,0.050000,,,\n"
    );
}

#[test]
fn missing_mapped_column_falls_back_to_default() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "rates.csv", "Destino\nUS\n");
    let mapping = FieldMapping::new()
        .with_column(RequiredField::Destination, "Destino")
        .with_column(RequiredField::Currency, "Moneda");
    let defaults = DefaultValues::new().with(RequiredField::Currency, "EUR");

    let result = generate(&path, &mapping, &defaults, &TransformConfig::default())
        .expect("generate");
    assert_eq!(
        result.missing_columns,
        vec![(RequiredField::Currency, "Moneda".to_string())]
    );
    let rows = read_rows(&result.csv);
    assert_eq!(rows[1], vec!["US", "", "", "", "EUR", ""]);
}

#[test]
fn request_file_drives_generation() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "rates.csv", "Destino,Tarifa\nUS,0.05\n");
    let request_path = write_source(
        &dir,
        "request.json",
        r#"{"mapping": {"destination": "Destino", "rate": "Tarifa"}, "discount": 10, "gain": "5"}"#,
    );
    let request = GenerateRequest::load(&request_path).expect("load request");
    let result = generate(
        &path,
        &request.field_mapping(),
        &request.default_values(),
        &request.transform_config(),
    )
    .expect("generate");
    let rows = read_rows(&result.csv);
    assert_eq!(rows[1][0], "US");
    assert_eq!(rows[1][2], "0.047250");
}

fn ingest_kind(path: &Path) -> ErrorKind {
    let err = generate(
        path,
        &full_mapping(),
        &DefaultValues::new(),
        &TransformConfig::default(),
    )
    .expect_err("generation should fail");
    err.downcast_ref::<IngestError>()
        .expect("ingest error")
        .kind()
}

#[test]
fn fatal_errors_are_classified() {
    let dir = TempDir::new().unwrap();
    let unsupported = write_source(&dir, "rates.txt", RATES_CSV);
    assert_eq!(ingest_kind(&unsupported), ErrorKind::UnsupportedFormat);

    assert_eq!(
        ingest_kind(&dir.path().join("missing.csv")),
        ErrorKind::MissingReference
    );

    let corrupt = write_source(&dir, "rates.xlsx", "not a workbook");
    assert_eq!(ingest_kind(&corrupt), ErrorKind::ParseError);
}
