//! Command implementations: load the CSV input and run the core operations.

use std::time::Instant;

use anyhow::{Context, Result, bail};
use polars::prelude::DataFrame;
use tracing::{info, info_span};

use relnorm_core::{ColumnCardinality, NormalizedTables, cardinality, normalize};
use relnorm_ingest::{CsvOptions, read_csv_table_with_options};

use crate::cli::{CardinalityArgs, DisplayArgs, InputArgs, NormalizeArgs};
use relnorm_cli::display::DisplayOptions;

pub fn run_normalize(args: &NormalizeArgs) -> Result<Option<NormalizedTables>> {
    let span = info_span!("normalize_command", input = %args.input.path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let df = load_table(&args.input)?;
    let tables = normalize(&df, &args.primary_name, &args.headers)
        .with_context(|| format!("normalize {}", args.input.path.display()))?;

    info!(
        tables = tables.as_ref().map_or(0, NormalizedTables::len),
        duration_ms = start.elapsed().as_millis(),
        "normalize complete"
    );
    Ok(tables)
}

pub fn run_cardinality(args: &CardinalityArgs) -> Result<Vec<ColumnCardinality>> {
    let span = info_span!("cardinality_command", input = %args.input.path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let df = load_table(&args.input)?;
    let figures = cardinality(&df)
        .with_context(|| format!("cardinality of {}", args.input.path.display()))?;

    info!(
        columns = figures.len(),
        duration_ms = start.elapsed().as_millis(),
        "cardinality complete"
    );
    Ok(figures)
}

pub fn display_options(args: &DisplayArgs) -> DisplayOptions {
    DisplayOptions {
        max_rows: args.max_rows,
        width: args.width,
    }
}

fn load_table(input: &InputArgs) -> Result<DataFrame> {
    if !input.separator.is_ascii() {
        bail!("separator must be an ASCII character, got '{}'", input.separator);
    }
    let options = CsvOptions::default()
        .with_separator(input.separator as u8)
        .with_infer_schema_length(input.infer_schema_length);
    read_csv_table_with_options(&input.path, &options)
        .with_context(|| format!("load {}", input.path.display()))
}
