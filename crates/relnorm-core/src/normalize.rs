//! Single entry point tying selection and decomposition together.

use polars::prelude::DataFrame;
use tracing::{info, info_span};

use crate::decompose::{NormalizedTables, decompose};
use crate::error::{NormalizeError, Result};
use crate::headers::{HeaderSpec, select_columns};

/// Normalize `df` into a primary table plus one table per extracted column.
///
/// The rewritten copy of `df` is stored under `primary_name`; each extracted
/// table is stored under its source column's name. Returns `Ok(None)` when
/// `headers` selects no column.
///
/// Selection is fully resolved before the working copy is modified, so an
/// error never leaves a partial result behind.
///
/// # Errors
///
/// [`NormalizeError::EmptyPrimaryName`] for an empty `primary_name`, plus
/// every error of [`select_columns`] and [`decompose`].
pub fn normalize(
    df: &DataFrame,
    primary_name: &str,
    headers: &HeaderSpec,
) -> Result<Option<NormalizedTables>> {
    let span = info_span!(
        "normalize",
        primary = %primary_name,
        rows = df.height(),
        columns = df.width()
    );
    let _guard = span.enter();

    if primary_name.is_empty() {
        return Err(NormalizeError::EmptyPrimaryName);
    }
    let selected = select_columns(df, headers)?;
    let tables = decompose(df, primary_name, &selected)?;
    match &tables {
        Some(tables) => info!(extracted = tables.extracted().len(), "table normalized"),
        None => info!("nothing to normalize"),
    }
    Ok(tables)
}
