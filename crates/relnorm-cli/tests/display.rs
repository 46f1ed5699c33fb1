//! Rendering tests for the console tables.

use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

use relnorm_cli::display::{
    DisplayOptions, render_cardinality, render_extracted, render_frame,
};
use relnorm_core::{HeaderSpec, cardinality, normalize};

fn cities() -> DataFrame {
    DataFrame::new(vec![
        Series::new(
            "city".into(),
            [Some("Oslo"), None, Some("Rome"), Some("Oslo"), Some("Oslo"), None],
        )
        .into_column(),
        Series::new("visits".into(), [3i64, 1, 4, 1, 5, 9]).into_column(),
    ])
    .unwrap()
}

fn plain(mut table: comfy_table::Table) -> String {
    table.force_no_tty();
    table.to_string()
}

#[test]
fn frame_shows_values_and_nulls() {
    let rendered = plain(render_frame(&cities(), DisplayOptions::default()));

    assert!(rendered.contains("city"));
    assert!(rendered.contains("Rome"));
    assert!(rendered.contains("null"));
    assert!(!rendered.contains('…'));
}

#[test]
fn long_frame_is_elided() {
    let options = DisplayOptions {
        max_rows: 2,
        ..DisplayOptions::default()
    };
    let rendered = plain(render_frame(&cities(), options));

    assert!(rendered.contains('…'));
    assert!(rendered.contains('9'));
    assert!(!rendered.contains("Rome"));
}

#[test]
fn extracted_table_lists_keys_and_values() {
    let tables = normalize(&cities(), "main", &HeaderSpec::NameList(vec!["city".into()]))
        .unwrap()
        .unwrap();
    let city = tables.extracted_table("city").unwrap();
    let rendered = plain(render_extracted(city, DisplayOptions::default()));

    assert!(rendered.contains("key"));
    assert!(rendered.contains("Oslo"));
    assert!(rendered.contains("Rome"));
    assert!(rendered.contains("null"));
}

#[test]
fn cardinality_table_reports_ratios() {
    let figures = cardinality(&cities()).unwrap();
    let rendered = plain(render_cardinality(&figures, DisplayOptions::default()));

    assert!(rendered.contains("Ratio"));
    assert!(rendered.contains("visits"));
    // city: Oslo, missing, Rome over six rows
    assert!(rendered.contains("0.5"));
}
