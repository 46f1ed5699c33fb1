//! Table ingestion for relnorm.
//!
//! Loads flat CSV files into Polars DataFrames, the input of
//! `relnorm_core::normalize`.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use relnorm_ingest::read_csv_table;
//!
//! let df = read_csv_table(Path::new("data/orders.csv"))?;
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    CsvOptions, MAX_CSV_FILE_SIZE, check_file_size_with_limit, parse_csv_line, read_csv_header,
    read_csv_table, read_csv_table_with_options, validate_encoding,
};
