//! Per-column cardinality ratios.
//!
//! The ratio of a column is its number of distinct values, with all missing
//! values counted as a single value, divided by the number of rows. A ratio
//! near 0 marks a highly repetitive column; 1 means every value is unique.

use polars::prelude::{Column, DataFrame};
use tracing::trace;

use crate::column::ColumnId;
use crate::distinct::distinct_count;
use crate::error::Result;

/// Cardinality figures for one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnCardinality {
    /// Column name.
    pub name: String,
    /// Zero-based column position.
    pub index: usize,
    /// Distinct values, missing counted once.
    pub distinct: usize,
    /// Row count of the table.
    pub rows: usize,
    /// `distinct / rows`, or `1.0` for a table without rows.
    pub ratio: f64,
}

/// Compute the cardinality ratio of every column, in table order.
pub fn cardinality(df: &DataFrame) -> Result<Vec<ColumnCardinality>> {
    df.get_columns()
        .iter()
        .enumerate()
        .map(|(index, column)| column_cardinality(index, column))
        .collect()
}

/// Compute the cardinality ratio of a single column.
///
/// # Errors
///
/// Fails when `id` does not resolve in `df`.
pub fn column_ratio(df: &DataFrame, id: &ColumnId) -> Result<f64> {
    let resolved = id.resolve(df)?;
    let column = &df.get_columns()[resolved.index];
    Ok(column_cardinality(resolved.index, column)?.ratio)
}

pub(crate) fn column_cardinality(index: usize, column: &Column) -> Result<ColumnCardinality> {
    let rows = column.len();
    let distinct = distinct_count(column.as_materialized_series())?;
    let ratio = ratio(distinct, rows);
    trace!(column = %column.name(), distinct, rows, ratio, "column cardinality");
    Ok(ColumnCardinality {
        name: column.name().to_string(),
        index,
        distinct,
        rows,
        ratio,
    })
}

fn ratio(distinct: usize, rows: usize) -> f64 {
    if rows == 0 {
        1.0
    } else {
        distinct as f64 / rows as f64
    }
}
