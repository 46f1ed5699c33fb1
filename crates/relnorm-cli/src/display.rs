//! Console rendering of tables with `comfy-table`.
//!
//! Long tables are cut to their head and tail around an ellipsis row, the
//! way dataframe libraries print them.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::{AnyValue, Column, DataFrame, IntoColumn};

use relnorm_common::{any_to_string, format_numeric};
use relnorm_core::{ColumnCardinality, ExtractedTable, NormalizedTables, TableRef};

/// How much of each table to print.
#[derive(Debug, Clone, Copy)]
pub struct DisplayOptions {
    /// Rows shown per table before eliding the middle.
    pub max_rows: usize,
    /// Total table width in characters.
    pub width: u16,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            max_rows: 20,
            width: 120,
        }
    }
}

/// A printed row: either a real row index or the elision marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSlot {
    Row(usize),
    Ellipsis,
}

/// Rows to print for a table of `height` rows.
///
/// Shows everything when it fits; otherwise the first `ceil(max/2)` and the
/// last `floor(max/2)` rows with an ellipsis between them.
pub fn visible_rows(height: usize, max_rows: usize) -> Vec<RowSlot> {
    if height <= max_rows {
        return (0..height).map(RowSlot::Row).collect();
    }
    let head = max_rows.div_ceil(2);
    let tail = max_rows / 2;
    let mut slots: Vec<RowSlot> = (0..head).map(RowSlot::Row).collect();
    slots.push(RowSlot::Ellipsis);
    slots.extend((height - tail..height).map(RowSlot::Row));
    slots
}

/// Render the primary table, row numbers in the first column.
pub fn render_frame(df: &DataFrame, options: DisplayOptions) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("")];
    header.extend(
        df.get_columns()
            .iter()
            .map(|column| header_cell(&format!("{}\n{}", column.name(), column.dtype()))),
    );
    table.set_header(header);
    apply_table_style(&mut table, options);
    align_column(&mut table, 0, CellAlignment::Right);

    for slot in visible_rows(df.height(), options.max_rows) {
        match slot {
            RowSlot::Row(row) => {
                let mut cells = vec![dim_cell(row)];
                cells.extend(df.get_columns().iter().map(|column| value_cell(column, row)));
                table.add_row(cells);
            }
            RowSlot::Ellipsis => {
                table.add_row(vec![dim_cell("…"); df.width() + 1]);
            }
        }
    }
    table
}

/// Render an extracted table as `key | value` rows.
pub fn render_extracted(extracted: &ExtractedTable, options: DisplayOptions) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("key"),
        header_cell(&format!("{}\n{}", extracted.name, extracted.values.dtype())),
    ]);
    apply_table_style(&mut table, options);
    align_column(&mut table, 0, CellAlignment::Right);

    let values = extracted.values.clone().into_column();
    for slot in visible_rows(extracted.len(), options.max_rows) {
        match slot {
            RowSlot::Row(row) => {
                table.add_row(vec![Cell::new(row).fg(Color::Blue), value_cell(&values, row)]);
            }
            RowSlot::Ellipsis => {
                table.add_row(vec![dim_cell("…"), dim_cell("…")]);
            }
        }
    }
    table
}

/// Render per-column cardinality figures.
pub fn render_cardinality(figures: &[ColumnCardinality], options: DisplayOptions) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Distinct"),
        header_cell("Rows"),
        header_cell("Ratio"),
    ]);
    apply_table_style(&mut table, options);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    for column in figures {
        table.add_row(vec![
            dim_cell(column.index),
            Cell::new(&column.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(column.distinct),
            Cell::new(column.rows),
            Cell::new(format_ratio(column.ratio)),
        ]);
    }
    table
}

/// Print every table of a normalization result, primary first.
pub fn print_normalized(tables: &NormalizedTables, options: DisplayOptions) {
    for (name, table) in tables.iter() {
        match table {
            TableRef::Primary(df) => {
                println!("{name} ({} rows)", df.height());
                println!("{}", render_frame(df, options));
            }
            TableRef::Extracted(extracted) => {
                println!();
                println!("{name} ({} distinct values)", extracted.len());
                println!("{}", render_extracted(extracted, options));
            }
        }
    }
}

/// Ratio rounded to four decimals without trailing zeros.
pub fn format_ratio(ratio: f64) -> String {
    format_numeric((ratio * 10_000.0).round() / 10_000.0)
}

fn value_cell(column: &Column, row: usize) -> Cell {
    match column.get(row) {
        Ok(AnyValue::Null) => dim_cell("null"),
        Ok(value) => Cell::new(any_to_string(value)),
        Err(_) => dim_cell("?"),
    }
}

fn apply_table_style(table: &mut Table, options: DisplayOptions) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(options.width);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
