//! Error types for table normalization.

use thiserror::Error;

/// Errors that can occur while selecting or extracting columns.
///
/// Every variant except [`NormalizeError::DataFrame`] reports an invalid
/// argument supplied by the caller. All of them are raised before the
/// working copy of the table is touched.
#[derive(Debug, Error)]
pub enum NormalizeError {
    // === Argument Errors ===
    /// The name for the rewritten primary table is empty.
    #[error("primary_name must be a non-empty string")]
    EmptyPrimaryName,

    /// A cardinality threshold lies outside `[0, 1]` or is NaN.
    #[error("threshold {value} for {target} must be in the closed interval of [0, 1]")]
    ThresholdOutOfRange { target: String, value: f64 },

    /// A list or mapping mixes column numbers and column names.
    #[error("{context} must hold either column numbers or column names, not both")]
    MixedIdentifiers { context: &'static str },

    /// A column number does not address a column of the table.
    #[error("column number {index} is out of range for a table with {width} columns")]
    IndexOutOfBounds { index: usize, width: usize },

    /// A column name is not present in the table.
    #[error("column '{name}' not found in table")]
    UnknownColumn { name: String },

    /// The primary table name equals a column chosen for extraction.
    #[error("primary_name '{name}' collides with a column selected for extraction")]
    PrimaryNameCollision { name: String },

    /// The header specifier has a shape that cannot be interpreted.
    #[error("headers must be an integer, float, mapping, or sequence of int/str ({reason})")]
    UnsupportedHeaders { reason: String },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl NormalizeError {
    /// Returns true when the error was caused by the caller's arguments.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, Self::DataFrame { .. })
    }

    pub(crate) fn unsupported(reason: impl Into<String>) -> Self {
        Self::UnsupportedHeaders {
            reason: reason.into(),
        }
    }
}

impl From<polars::prelude::PolarsError> for NormalizeError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizeError>;
