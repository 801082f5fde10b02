//! CSV file reading with verbatim text cells.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use ::csv::{Reader, ReaderBuilder, StringRecord};
use rate_model::{CellValue, SourceTable};

use crate::error::{IngestError, Result};

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is acceptable (stripped from the first header)
    Ok(())
}

fn open_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::MissingReference {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

fn open_reader(path: &Path) -> Result<Reader<File>> {
    validate_encoding(path)?;
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    Ok(ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file))
}

fn parse_error(path: &Path, source: ::csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    }
}

fn read_header(reader: &mut Reader<File>, path: &Path) -> Result<Vec<String>> {
    let header = reader.headers().map_err(|e| parse_error(path, e))?;
    if header.is_empty() {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    Ok(header
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            if idx == 0 {
                name.strip_prefix('\u{feff}').unwrap_or(name).to_string()
            } else {
                name.to_string()
            }
        })
        .collect())
}

fn record_cells(record: &StringRecord) -> Vec<CellValue> {
    record.iter().map(CellValue::from_raw).collect()
}

/// Reads the header plus at most `sample_rows` records.
///
/// Sample records are parsed so malformed content surfaces here rather than
/// at generation time.
pub fn read_csv_columns(path: &Path, sample_rows: usize) -> Result<Vec<String>> {
    let mut reader = open_reader(path)?;
    let columns = read_header(&mut reader, path)?;
    for record in reader.records().take(sample_rows) {
        record.map_err(|e| parse_error(path, e))?;
    }
    Ok(columns)
}

/// Reads every record. Cells are kept verbatim; zero-length cells are `Empty`.
pub fn read_csv_table(path: &Path) -> Result<SourceTable> {
    let mut reader = open_reader(path)?;
    let columns = read_header(&mut reader, path)?;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| parse_error(path, e))?;
        rows.push(record_cells(&record));
    }
    Ok(SourceTable::new(columns, rows))
}
