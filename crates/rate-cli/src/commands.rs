use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};
use tracing::info_span;

use rate_cli::pipeline::{GenerationResult, generate, inspect};
use rate_cli::request::GenerateRequest;
use rate_model::{DefaultValues, FieldMapping, RequiredField, TransformConfig};

use crate::cli::{ColumnsArgs, GenerateArgs};
use crate::summary::{apply_table_style, dim_cell, header_cell};
use crate::types::{FieldSummary, GenerateSummary};

pub fn run_columns(args: &ColumnsArgs) -> Result<()> {
    let span = info_span!("columns", path = %args.file.display());
    let _guard = span.enter();
    let columns = inspect(&args.file, args.sample_rows)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&columns)?);
        return Ok(());
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Column")]);
    apply_table_style(&mut table);
    for (idx, column) in columns.iter().enumerate() {
        let name = if column.is_empty() {
            dim_cell("(unnamed)")
        } else {
            Cell::new(column)
        };
        table.add_row(vec![Cell::new(idx + 1), name]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateSummary> {
    let span = info_span!("generate", path = %args.file.display());
    let _guard = span.enter();

    let mut request = match &args.request {
        Some(path) => GenerateRequest::load(path)?,
        None => GenerateRequest::default(),
    };
    request.apply_overrides(
        &args.map,
        &args.default,
        args.discount.as_deref(),
        args.gain.as_deref(),
    );
    let mapping = request.field_mapping();
    let defaults = request.default_values();
    let config = request.transform_config();

    let result = generate(&args.file, &mapping, &defaults, &config)?;

    if args.writes_to_stdout() {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(&result.csv)
            .and_then(|()| stdout.flush())
            .context("write csv to stdout")?;
    } else {
        fs::write(&args.output, &result.csv)
            .with_context(|| format!("write {}", args.output.display()))?;
    }

    Ok(summarize(args, &mapping, &defaults, config, &result))
}

fn summarize(
    args: &GenerateArgs,
    mapping: &FieldMapping,
    defaults: &DefaultValues,
    config: TransformConfig,
    result: &GenerationResult,
) -> GenerateSummary {
    let fields = mapping
        .iter()
        .map(|(field, column)| FieldSummary {
            field,
            column: column.clone(),
            found: !result.missing_columns.iter().any(|(f, _)| *f == field),
            default: defaults
                .contains(field)
                .then(|| defaults.get(field).to_string()),
            pass_through: count_pass_through(result, field),
        })
        .collect();
    GenerateSummary {
        source: args.file.clone(),
        output: args.output.clone(),
        rows: result.rows,
        config,
        fields,
        pass_through: result.fallbacks.len(),
    }
}

fn count_pass_through(result: &GenerationResult, field: RequiredField) -> usize {
    result
        .fallbacks
        .iter()
        .filter(|fallback| fallback.field == field)
        .count()
}
