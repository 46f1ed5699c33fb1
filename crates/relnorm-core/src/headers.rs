//! Selection of the columns to extract.
//!
//! A [`HeaderSpec`] describes which columns of a table are normalized:
//!
//! - a uniform cardinality threshold applied to every column
//! - an explicit list of column numbers or names, taken unconditionally
//! - a per-column threshold for a list of column numbers or names
//!
//! Thresholds are inclusive: a column whose ratio equals the threshold is
//! selected.

use std::collections::{HashMap, HashSet};

use polars::prelude::DataFrame;
use tracing::debug;

use crate::cardinality::{cardinality, column_cardinality};
use crate::column::ColumnId;
use crate::error::{NormalizeError, Result};

/// Which columns of a table to extract.
///
/// Build one directly, or parse it from text or JSON with
/// [`HeaderSpec::from_str`](std::str::FromStr) and [`HeaderSpec::from_json`].
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderSpec {
    /// Extract every column whose cardinality ratio is at most this value.
    UniformThreshold(f64),
    /// Extract these zero-based column positions.
    IndexList(Vec<usize>),
    /// Extract these named columns.
    NameList(Vec<String>),
    /// Per-position thresholds.
    IndexThresholds(Vec<(usize, f64)>),
    /// Per-name thresholds.
    NameThresholds(Vec<(String, f64)>),
}

/// Resolve `spec` against `df` into the ordered names of columns to extract.
///
/// Uniform thresholds and threshold maps yield columns in table order;
/// explicit lists keep the order they were given in, each column once.
///
/// # Errors
///
/// Thresholds outside `[0, 1]` and identifiers that do not resolve in `df`
/// are rejected before anything is selected.
pub fn select_columns(df: &DataFrame, spec: &HeaderSpec) -> Result<Vec<String>> {
    let selected = match spec {
        HeaderSpec::UniformThreshold(threshold) => {
            check_threshold("headers", *threshold)?;
            cardinality(df)?
                .into_iter()
                .filter(|column| column.ratio <= *threshold)
                .map(|column| column.name)
                .collect()
        }
        HeaderSpec::IndexList(indices) => {
            select_explicit(df, indices.iter().map(|index| ColumnId::Index(*index)))?
        }
        HeaderSpec::NameList(names) => {
            select_explicit(df, names.iter().map(|name| ColumnId::Name(name.clone())))?
        }
        HeaderSpec::IndexThresholds(entries) => select_thresholds(
            df,
            entries
                .iter()
                .map(|(index, threshold)| (ColumnId::Index(*index), *threshold)),
        )?,
        HeaderSpec::NameThresholds(entries) => select_thresholds(
            df,
            entries
                .iter()
                .map(|(name, threshold)| (ColumnId::Name(name.clone()), *threshold)),
        )?,
    };
    debug!(?selected, "selected columns for extraction");
    Ok(selected)
}

fn select_explicit(df: &DataFrame, ids: impl Iterator<Item = ColumnId>) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut selected = Vec::new();
    for id in ids {
        let resolved = id.resolve(df)?;
        if seen.insert(resolved.index) {
            selected.push(resolved.name);
        }
    }
    Ok(selected)
}

fn select_thresholds(
    df: &DataFrame,
    entries: impl Iterator<Item = (ColumnId, f64)>,
) -> Result<Vec<String>> {
    let mut limits: HashMap<usize, f64> = HashMap::new();
    for (id, threshold) in entries {
        check_threshold(&id.to_string(), threshold)?;
        let resolved = id.resolve(df)?;
        limits.insert(resolved.index, threshold);
    }

    let mut selected = Vec::new();
    for (index, column) in df.get_columns().iter().enumerate() {
        let Some(threshold) = limits.get(&index) else {
            continue;
        };
        let figures = column_cardinality(index, column)?;
        if figures.ratio <= *threshold {
            selected.push(figures.name);
        }
    }
    Ok(selected)
}

fn check_threshold(target: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(NormalizeError::ThresholdOutOfRange {
            target: target.to_string(),
            value,
        })
    }
}
