//! Entry points shared by all source formats.

use std::path::Path;
use std::time::Instant;

use rate_model::SourceTable;
use tracing::{debug, info};

use crate::csv::{read_csv_columns, read_csv_table};
use crate::error::{IngestError, Result};
use crate::format::SourceFormat;
use crate::workbook::{read_workbook_columns, read_workbook_table, read_xlsx_columns};

/// Data rows read after the header when sampling a file's schema.
pub const DEFAULT_SAMPLE_ROWS: usize = 5;

/// Maximum accepted source file size (50 MB).
pub const MAX_SOURCE_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_SOURCE_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::MissingReference {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    if !metadata.is_file() {
        return Err(IngestError::MissingReference {
            path: path.to_path_buf(),
        });
    }

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Format is decided from the name first, so unsupported files are rejected
/// before they are touched.
fn checked_format(path: &Path) -> Result<SourceFormat> {
    let format = SourceFormat::from_path(path)?;
    check_file_size(path)?;
    Ok(format)
}

/// Returns the column names of a source file, in file order.
pub fn read_columns(path: &Path) -> Result<Vec<String>> {
    read_columns_with_sample(path, DEFAULT_SAMPLE_ROWS)
}

/// Returns the column names, parsing at most `sample_rows` data rows of
/// delimited text.
pub fn read_columns_with_sample(path: &Path, sample_rows: usize) -> Result<Vec<String>> {
    let format = checked_format(path)?;
    let columns = match format {
        SourceFormat::Csv => read_csv_columns(path, sample_rows)?,
        SourceFormat::Xls => read_workbook_columns(path)?,
        SourceFormat::Xlsx | SourceFormat::Xlsm => read_xlsx_columns(path)?,
    };
    debug!(
        path = %path.display(),
        format = format.extension(),
        columns = columns.len(),
        "read source columns"
    );
    Ok(columns)
}

/// Loads every row and column of a source file as text.
pub fn load_table(path: &Path) -> Result<SourceTable> {
    let format = checked_format(path)?;
    let start = Instant::now();
    let table = match format {
        SourceFormat::Csv => read_csv_table(path)?,
        SourceFormat::Xls | SourceFormat::Xlsx | SourceFormat::Xlsm => read_workbook_table(path)?,
    };
    info!(
        path = %path.display(),
        format = format.extension(),
        rows = table.len(),
        columns = table.columns().len(),
        duration_ms = start.elapsed().as_millis(),
        "source table loaded"
    );
    Ok(table)
}
