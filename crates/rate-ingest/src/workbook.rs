//! Spreadsheet reading via calamine. Only the first worksheet is used.

use std::path::Path;

use calamine::{Data, DataRef, Dimensions, Range, Reader, Xlsx, open_workbook, open_workbook_auto};
use rate_model::{CellValue, SourceTable};

use crate::error::{IngestError, Result};

fn workbook_error(path: &Path, error: impl ToString) -> IngestError {
    IngestError::Workbook {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

fn first_sheet_range(path: &Path) -> Result<Range<Data>> {
    let mut workbook = open_workbook_auto(path).map_err(|e| workbook_error(path, e))?;
    workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::NoWorksheet {
            path: path.to_path_buf(),
        })?
        .map_err(|e| workbook_error(path, e))
}

/// Converts a decoded cell to text as displayed by calamine: numbers use
/// their shortest decimal form, so `12.0` reads as `12`.
fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(value) => CellValue::from_raw(value.as_str()),
        other => CellValue::from_raw(other.to_string()),
    }
}

fn header_name(cell: &Data) -> String {
    cell_value(cell).as_text().unwrap_or_default().to_string()
}

fn header_row(range: &Range<Data>, path: &Path) -> Result<Vec<String>> {
    let header = range.rows().next().ok_or_else(|| IngestError::EmptyFile {
        path: path.to_path_buf(),
    })?;
    Ok(header.iter().map(header_name).collect())
}

/// Splits a used range into header and data rows. Rows with no text in any
/// cell are dropped.
fn range_to_table(range: &Range<Data>, path: &Path) -> Result<SourceTable> {
    let columns = header_row(range, path)?;
    let rows: Vec<Vec<CellValue>> = range
        .rows()
        .skip(1)
        .map(|row| row.iter().map(cell_value).collect::<Vec<_>>())
        .filter(|cells| !cells.iter().all(CellValue::is_empty))
        .collect();
    Ok(SourceTable::new(columns, rows))
}

/// Reads the header row of the first worksheet by decoding the whole sheet.
pub fn read_workbook_columns(path: &Path) -> Result<Vec<String>> {
    let range = first_sheet_range(path)?;
    header_row(&range, path)
}

/// Reads the header row of the first xlsx/xlsm worksheet, streaming cells
/// and stopping at the first cell past the header row.
pub fn read_xlsx_columns(path: &Path) -> Result<Vec<String>> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| workbook_error(path, e))?;
    let sheet = workbook
        .sheet_names()
        .into_iter()
        .next()
        .ok_or_else(|| IngestError::NoWorksheet {
            path: path.to_path_buf(),
        })?;
    let mut reader = workbook
        .worksheet_cells_reader(&sheet)
        .map_err(|e| workbook_error(path, e))?;
    let dimensions = reader.dimensions();

    let mut header_row = None;
    let mut cells = Vec::new();
    while let Some(cell) = reader.next_cell().map_err(|e| workbook_error(path, e))? {
        let (row, col) = cell.get_position();
        let value = cell.get_value();
        if matches!(value, DataRef::Empty) {
            continue;
        }
        match header_row {
            Some(header) if row > header => break,
            Some(_) => {}
            None => header_row = Some(row),
        }
        cells.push((col, Data::from(value.clone())));
    }

    match header_row {
        Some(row) => Ok(place_header(dimensions, row, &cells)),
        None => Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        }),
    }
}

/// Lays header cells over the sheet's used columns, leaving gaps as empty
/// names. The declared sheet dimension is only trusted when it covers every
/// header cell.
fn place_header(dimensions: Dimensions, row: u32, cells: &[(u32, Data)]) -> Vec<String> {
    let first = cells.iter().map(|(col, _)| *col).min().unwrap_or(0);
    let last = cells.iter().map(|(col, _)| *col).max().unwrap_or(0);
    let (start, end) = if dimensions.contains(row, first) && dimensions.contains(row, last) {
        (dimensions.start.1, dimensions.end.1)
    } else {
        (first, last)
    };
    (start..=end)
        .map(|col| {
            cells
                .iter()
                .find(|(c, _)| *c == col)
                .map(|(_, value)| header_name(value))
                .unwrap_or_default()
        })
        .collect()
}

/// Reads every row of the first worksheet as text.
pub fn read_workbook_table(path: &Path) -> Result<SourceTable> {
    let range = first_sheet_range(path)?;
    range_to_table(&range, path)
}
