//! Shared utilities for the relnorm crates.
//!
//! This crate provides the Polars `AnyValue` helpers used across the
//! workspace: hashable cell keys for distinct-value bookkeeping and
//! display rendering of cell values.

pub mod polars;

pub use polars::{CellKey, any_to_string, format_numeric};
