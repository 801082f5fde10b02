//! Shared data model for the rate manager.
//!
//! Nothing in this crate performs I/O. Source files are read by `rate-ingest`,
//! resolved and rescaled by `rate-transform`, and written by `rate-output`.

pub mod config;
pub mod error;
pub mod field;
pub mod mapping;
pub mod outcome;
pub mod table;

pub use config::{TransformConfig, parse_percentage};
pub use error::{ModelError, Result};
pub use field::RequiredField;
pub use mapping::{ColumnRef, DefaultValues, FieldAssignment, FieldMapping, MAPPING_SENTINEL};
pub use outcome::{NumericFallback, NumericOutcome};
pub use table::{CanonicalTable, CellValue, OutputRow, SourceRow, SourceTable};
