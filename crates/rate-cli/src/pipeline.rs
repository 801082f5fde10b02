//! Generation pipeline: load, build, serialize.
//!
//! The CSV is built fully in memory; callers write it only after
//! [`generate`] returns `Ok`, so a failed request never leaves a partial file.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use rate_ingest::{load_table, read_columns_with_sample};
use rate_model::{DefaultValues, FieldMapping, NumericFallback, RequiredField, TransformConfig};
use rate_output::serialize;
use rate_transform::{BuildReport, build_with_report};

use crate::logging::redact_value;

/// Everything produced by one generation request.
#[derive(Debug)]
pub struct GenerationResult {
    pub csv: Vec<u8>,
    pub rows: usize,
    /// Mapped columns the source did not contain; those fields used defaults.
    pub missing_columns: Vec<(RequiredField, String)>,
    pub fallbacks: Vec<NumericFallback>,
}

/// Reads the column names shown when choosing a mapping.
pub fn inspect(path: &Path, sample_rows: usize) -> Result<Vec<String>> {
    let start = Instant::now();
    let columns = read_columns_with_sample(path, sample_rows)
        .with_context(|| format!("read columns of {}", path.display()))?;
    info!(
        path = %path.display(),
        columns = columns.len(),
        duration_ms = start.elapsed().as_millis(),
        "schema read"
    );
    Ok(columns)
}

/// Runs the full conversion for one source file.
pub fn generate(
    path: &Path,
    mapping: &FieldMapping,
    defaults: &DefaultValues,
    config: &TransformConfig,
) -> Result<GenerationResult> {
    let source =
        load_table(path).with_context(|| format!("load source table {}", path.display()))?;

    let missing_columns: Vec<(RequiredField, String)> = mapping
        .missing_columns(source.columns())
        .into_iter()
        .map(|(field, column)| (field, column.to_string()))
        .collect();
    for (field, column) in &missing_columns {
        warn!(%field, column = %column, "mapped column not found in source, using default");
    }

    let build_start = Instant::now();
    let BuildReport { table, fallbacks } = build_with_report(&source, mapping, defaults, config);
    for fallback in &fallbacks {
        debug!(
            row = fallback.row,
            field = %fallback.field,
            value = redact_value(&fallback.value),
            "kept non-numeric value"
        );
    }
    info!(
        rows = table.len(),
        mapped_fields = mapping.mapped_count(),
        pass_through = fallbacks.len(),
        duration_ms = build_start.elapsed().as_millis(),
        "canonical table built"
    );

    let csv = serialize(&table).context("serialize canonical table")?;
    Ok(GenerationResult {
        csv,
        rows: table.len(),
        missing_columns,
        fallbacks,
    })
}
