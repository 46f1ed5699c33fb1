//! Relational normalization of a single flat table.
//!
//! Columns whose values repeat heavily are extracted into their own tables
//! of distinct values, and the source column is rewritten to surrogate
//! integer keys pointing into the extracted table.
//!
//! # Overview
//!
//! - **Cardinality**: per-column ratio of distinct values to rows
//! - **Header selection**: decide which columns to extract from a
//!   [`HeaderSpec`] (uniform threshold, explicit columns, or per-column
//!   thresholds)
//! - **Decomposition**: build the extracted tables and rewrite the primary
//!   table on a private copy
//!
//! # Example
//!
//! ```
//! use polars::prelude::*;
//! use relnorm_core::{HeaderSpec, normalize};
//!
//! let df = df![
//!     "color" => ["red", "blue", "red", "green"],
//!     "id" => [1i64, 2, 3, 4],
//! ]
//! .unwrap();
//!
//! let tables = normalize(&df, "main", &HeaderSpec::UniformThreshold(0.8))
//!     .unwrap()
//!     .expect("color repeats often enough to be extracted");
//! assert_eq!(tables.table_names(), vec!["main", "color"]);
//! ```

mod cardinality;
mod column;
mod decompose;
mod distinct;
mod error;
mod headers;
mod normalize;
mod parse;

// === Error Types ===
pub use error::{NormalizeError, Result};

// === Column Identification ===
pub use column::{ColumnId, ResolvedColumn};

// === Cardinality ===
pub use cardinality::{ColumnCardinality, cardinality, column_ratio};

// === Header Selection ===
pub use headers::{HeaderSpec, select_columns};

// === Decomposition ===
pub use decompose::{ExtractedTable, NormalizedTables, TableRef, decompose};

// === Entry Point ===
pub use normalize::normalize;
