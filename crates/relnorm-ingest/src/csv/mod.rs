//! CSV reading utilities.

mod header;
mod reader;

pub use header::{parse_csv_line, read_csv_header};
pub use reader::{
    CsvOptions, MAX_CSV_FILE_SIZE, check_file_size_with_limit, read_csv_table,
    read_csv_table_with_options, validate_encoding,
};
