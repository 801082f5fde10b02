//! Rate table ingestion.
//!
//! This crate opens uploaded rate tables (delimited text or spreadsheet
//! workbooks) and turns them into a [`SourceTable`](rate_model::SourceTable)
//! whose cells are kept as text exactly as stored.
//!
//! # Features
//!
//! - **Format detection**: Reject unsupported extensions before any parsing
//! - **Schema reading**: Header names from a bounded sample, for mapping UIs
//! - **Full loading**: Every row and column, no numeric or date coercion
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use rate_ingest::{load_table, read_columns};
//!
//! let path = Path::new("uploads/carrier_rates.xlsx");
//! let columns = read_columns(path)?;
//! let table = load_table(path)?;
//! ```

mod csv;
mod error;
mod format;
mod source;
mod workbook;

// === Error Types ===
pub use error::{ErrorKind, IngestError, Result};

// === Format Detection ===
pub use format::{SUPPORTED_EXTENSIONS, SourceFormat};

// === Reading ===
pub use source::{
    DEFAULT_SAMPLE_ROWS, MAX_SOURCE_FILE_SIZE, check_file_size, check_file_size_with_limit,
    load_table, read_columns, read_columns_with_sample,
};
