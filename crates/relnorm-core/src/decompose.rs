//! Extraction of selected columns into their own tables.
//!
//! For every selected column the distinct values, in order of first
//! occurrence, become an extracted table, and the column of the primary
//! table is replaced by each value's position in that table.

use std::collections::HashSet;

use polars::prelude::{DataFrame, Series};
use tracing::debug;

use crate::distinct::DistinctValues;
use crate::error::{NormalizeError, Result};

/// Distinct values extracted from one column of the source table.
#[derive(Debug, Clone)]
pub struct ExtractedTable {
    /// Name of the source column, also the name of this table.
    pub name: String,
    /// Distinct values; the position of a value is its surrogate key.
    pub values: Series,
}

impl ExtractedTable {
    /// Number of distinct values, missing counted once.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A borrowed table from [`NormalizedTables`].
#[derive(Debug, Clone, Copy)]
pub enum TableRef<'a> {
    /// The rewritten source table.
    Primary(&'a DataFrame),
    /// An extracted table of distinct values.
    Extracted(&'a ExtractedTable),
}

/// The primary table and every table extracted from it, by name.
///
/// Iteration yields the primary table first, then the extracted tables in
/// selection order.
#[derive(Debug, Clone)]
pub struct NormalizedTables {
    primary_name: String,
    primary: DataFrame,
    extracted: Vec<ExtractedTable>,
}

impl NormalizedTables {
    /// Name the primary table is stored under.
    pub fn primary_name(&self) -> &str {
        &self.primary_name
    }

    /// The rewritten source table.
    pub fn primary(&self) -> &DataFrame {
        &self.primary
    }

    /// Extracted tables in selection order.
    pub fn extracted(&self) -> &[ExtractedTable] {
        &self.extracted
    }

    /// Extracted table for a source column.
    pub fn extracted_table(&self, column: &str) -> Option<&ExtractedTable> {
        self.extracted.iter().find(|table| table.name == column)
    }

    /// Look up any table by name.
    pub fn get(&self, name: &str) -> Option<TableRef<'_>> {
        if name == self.primary_name {
            return Some(TableRef::Primary(&self.primary));
        }
        self.extracted_table(name).map(TableRef::Extracted)
    }

    /// Names of all tables, primary first.
    pub fn table_names(&self) -> Vec<&str> {
        self.iter().map(|(name, _)| name).collect()
    }

    /// Total number of tables, primary included.
    pub fn len(&self) -> usize {
        self.extracted.len() + 1
    }

    /// Always false; a result holds at least the primary table.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, TableRef<'_>)> {
        std::iter::once((self.primary_name.as_str(), TableRef::Primary(&self.primary))).chain(
            self.extracted
                .iter()
                .map(|table| (table.name.as_str(), TableRef::Extracted(table))),
        )
    }

    /// Rebuild the original values of an extracted column.
    ///
    /// Maps every surrogate key of the primary table's column back through
    /// its extracted table, in row order.
    pub fn restore_column(&self, column: &str) -> Result<Series> {
        let table = self
            .extracted_table(column)
            .ok_or_else(|| NormalizeError::UnknownColumn {
                name: column.to_string(),
            })?;
        let keys = self.primary.column(column)?.as_materialized_series().idx()?;
        Ok(table.values.take(keys)?)
    }
}

/// Extract `selected` columns of `df` into their own tables.
///
/// `df` itself is left untouched; the primary table in the result is a
/// rewritten copy stored under `primary_name`. Returns `Ok(None)` when
/// nothing is selected. A column listed twice is extracted once.
///
/// # Errors
///
/// [`NormalizeError::PrimaryNameCollision`] when `primary_name` equals a
/// selected column, [`NormalizeError::UnknownColumn`] for a column missing
/// from `df`. Both are checked before the copy is modified.
pub fn decompose(
    df: &DataFrame,
    primary_name: &str,
    selected: &[String],
) -> Result<Option<NormalizedTables>> {
    if selected.is_empty() {
        debug!("no columns selected");
        return Ok(None);
    }
    if selected.iter().any(|name| name == primary_name) {
        return Err(NormalizeError::PrimaryNameCollision {
            name: primary_name.to_string(),
        });
    }

    let mut sources = Vec::with_capacity(selected.len());
    let mut seen = HashSet::new();
    for name in selected {
        if !seen.insert(name.as_str()) {
            continue;
        }
        let column = df
            .column(name)
            .map_err(|_| NormalizeError::UnknownColumn { name: name.clone() })?;
        sources.push((name, column.as_materialized_series()));
    }

    let mut primary = df.clone();
    let mut extracted = Vec::with_capacity(sources.len());
    for (name, source) in sources {
        let distinct = DistinctValues::of(source)?;
        let values = distinct.values(source)?;
        debug!(column = %name, distinct = distinct.len(), "extracted column");
        primary.with_column(distinct.into_keys(name))?;
        extracted.push(ExtractedTable {
            name: name.clone(),
            values,
        });
    }

    Ok(Some(NormalizedTables {
        primary_name: primary_name.to_string(),
        primary,
        extracted,
    }))
}
