use std::path::PathBuf;

use rate_model::{ColumnRef, RequiredField, TransformConfig};

#[derive(Debug)]
pub struct GenerateSummary {
    pub source: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
    pub config: TransformConfig,
    pub fields: Vec<FieldSummary>,
    pub pass_through: usize,
}

#[derive(Debug)]
pub struct FieldSummary {
    pub field: RequiredField,
    pub column: ColumnRef,
    /// False when the mapped column is not in the source file.
    pub found: bool,
    pub default: Option<String>,
    pub pass_through: usize,
}
