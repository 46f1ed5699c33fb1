//! Column identifiers and their resolution against a table.

use std::fmt;

use polars::prelude::DataFrame;

use crate::error::{NormalizeError, Result};

/// A reference to a column by zero-based position or by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnId {
    Index(usize),
    Name(String),
}

/// A column identifier checked against a concrete table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    /// Zero-based position in the table.
    pub index: usize,
    /// Column name.
    pub name: String,
}

impl ColumnId {
    /// Resolve the identifier to a position and name in `df`.
    ///
    /// # Errors
    ///
    /// [`NormalizeError::IndexOutOfBounds`] for a position past the last
    /// column, [`NormalizeError::UnknownColumn`] for an absent name.
    pub fn resolve(&self, df: &DataFrame) -> Result<ResolvedColumn> {
        let columns = df.get_columns();
        match self {
            Self::Index(index) => columns
                .get(*index)
                .map(|column| ResolvedColumn {
                    index: *index,
                    name: column.name().to_string(),
                })
                .ok_or(NormalizeError::IndexOutOfBounds {
                    index: *index,
                    width: columns.len(),
                }),
            Self::Name(name) => columns
                .iter()
                .position(|column| column.name().as_str() == name)
                .map(|index| ResolvedColumn {
                    index,
                    name: name.clone(),
                })
                .ok_or_else(|| NormalizeError::UnknownColumn { name: name.clone() }),
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "column #{index}"),
            Self::Name(name) => write!(f, "column '{name}'"),
        }
    }
}
