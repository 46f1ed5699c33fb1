//! End-to-end tests for table normalization.

use polars::prelude::{DataFrame, IdxSize, IntoColumn, NamedFrom, Series};

use relnorm_core::{HeaderSpec, NormalizeError, TableRef, cardinality, normalize};

fn colors() -> DataFrame {
    DataFrame::new(vec![
        Series::new("color".into(), ["red", "blue", "red", "green"]).into_column(),
        Series::new("id".into(), [1i64, 2, 3, 4]).into_column(),
    ])
    .unwrap()
}

fn key_column(df: &DataFrame, name: &str) -> Vec<IdxSize> {
    df.column(name)
        .unwrap()
        .as_materialized_series()
        .idx()
        .unwrap()
        .into_no_null_iter()
        .collect()
}

fn strings(series: &Series) -> Vec<Option<String>> {
    series
        .str()
        .unwrap()
        .into_iter()
        .map(|value| value.map(String::from))
        .collect()
}

#[test]
fn uniform_threshold_below_ratio_extracts_nothing() {
    let result = normalize(&colors(), "main", &HeaderSpec::UniformThreshold(0.5)).unwrap();
    assert!(result.is_none());
}

#[test]
fn uniform_threshold_extracts_repetitive_column() {
    let tables = normalize(&colors(), "main", &HeaderSpec::UniformThreshold(0.8))
        .unwrap()
        .unwrap();

    assert_eq!(tables.table_names(), vec!["main", "color"]);
    let color = tables.extracted_table("color").unwrap();
    assert_eq!(
        strings(&color.values),
        vec![
            Some("red".to_string()),
            Some("blue".to_string()),
            Some("green".to_string())
        ]
    );
    assert_eq!(key_column(tables.primary(), "color"), vec![0, 1, 0, 2]);

    let ids: Vec<i64> = tables
        .primary()
        .column("id")
        .unwrap()
        .i64()
        .unwrap()
        .into_no_null_iter()
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn explicit_list_extracts_unique_column() {
    let tables = normalize(&colors(), "main", &HeaderSpec::NameList(vec!["id".to_string()]))
        .unwrap()
        .unwrap();

    let Some(TableRef::Extracted(id)) = tables.get("id") else {
        panic!("id should be an extracted table");
    };
    let values: Vec<i64> = id.values.i64().unwrap().into_no_null_iter().collect();
    assert_eq!(values, vec![1, 2, 3, 4]);
    assert_eq!(key_column(tables.primary(), "id"), vec![0, 1, 2, 3]);
}

#[test]
fn threshold_map_below_ratio_extracts_nothing() {
    let spec = HeaderSpec::NameThresholds(vec![("color".to_string(), 0.5)]);
    assert!(normalize(&colors(), "main", &spec).unwrap().is_none());
}

#[test]
fn caller_frame_is_not_modified() {
    let df = colors();
    let before = df.clone();
    let _ = normalize(&df, "main", &HeaderSpec::UniformThreshold(1.0)).unwrap();
    assert!(df.equals_missing(&before));
}

#[test]
fn missing_values_become_one_extracted_entry() {
    let df = DataFrame::new(vec![
        Series::new("city".into(), [Some("Oslo"), None, Some("Oslo"), None, Some("Rome")])
            .into_column(),
    ])
    .unwrap();

    let tables = normalize(&df, "main", &HeaderSpec::UniformThreshold(0.6))
        .unwrap()
        .unwrap();
    let city = tables.extracted_table("city").unwrap();
    assert_eq!(
        strings(&city.values),
        vec![Some("Oslo".to_string()), None, Some("Rome".to_string())]
    );
    assert_eq!(key_column(tables.primary(), "city"), vec![0, 1, 0, 1, 2]);

    let restored = tables.restore_column("city").unwrap();
    assert!(restored.equals_missing(df.column("city").unwrap().as_materialized_series()));
}

#[test]
fn extracted_sizes_match_cardinality() {
    let df = DataFrame::new(vec![
        Series::new("a".into(), [1i32, 1, 2, 2, 3, 3]).into_column(),
        Series::new("b".into(), ["x", "y", "x", "y", "x", "y"]).into_column(),
        Series::new("c".into(), [Some(0.5), None, Some(0.5), None, None, Some(1.5)])
            .into_column(),
    ])
    .unwrap();

    let ratios = cardinality(&df).unwrap();
    let tables = normalize(&df, "facts", &HeaderSpec::UniformThreshold(1.0))
        .unwrap()
        .unwrap();
    for figures in ratios {
        let table = tables.extracted_table(&figures.name).unwrap();
        let expected = (figures.ratio * figures.rows as f64).round() as usize;
        assert_eq!(table.len(), expected, "column {}", figures.name);
    }
}

#[test]
fn index_thresholds_select_in_table_order() {
    let df = DataFrame::new(vec![
        Series::new("a".into(), [1i32, 1, 1, 1]).into_column(),
        Series::new("b".into(), [1i32, 2, 1, 2]).into_column(),
        Series::new("c".into(), [1i32, 2, 3, 4]).into_column(),
    ])
    .unwrap();

    let spec = HeaderSpec::IndexThresholds(vec![(2, 1.0), (0, 0.25), (1, 0.25)]);
    let tables = normalize(&df, "main", &spec).unwrap().unwrap();
    assert_eq!(tables.table_names(), vec!["main", "a", "c"]);
}

#[test]
fn parsed_specifiers_drive_normalization() {
    let spec: HeaderSpec = "color=0.8".parse().unwrap();
    let tables = normalize(&colors(), "main", &spec).unwrap().unwrap();
    assert_eq!(tables.table_names(), vec!["main", "color"]);

    let err = "0,color".parse::<HeaderSpec>().unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn invalid_arguments_leave_no_result() {
    let cases = [
        HeaderSpec::UniformThreshold(1.5),
        HeaderSpec::IndexList(vec![0, 7]),
        HeaderSpec::NameThresholds(vec![("size".to_string(), 0.5)]),
    ];
    for spec in cases {
        let err = normalize(&colors(), "main", &spec).unwrap_err();
        assert!(err.is_invalid_argument(), "{spec:?}");
    }
    assert!(matches!(
        normalize(&colors(), "id", &HeaderSpec::NameList(vec!["id".to_string()])),
        Err(NormalizeError::PrimaryNameCollision { .. })
    ));
}

#[test]
fn long_list_cells_round_trip() {
    let base: Vec<i64> = (0..20).collect();
    let mut changed = base.clone();
    changed[10] = 999;
    let lists = Series::new(
        "l".into(),
        vec![
            Series::new("".into(), base.clone()),
            Series::new("".into(), changed),
            Series::new("".into(), base),
        ],
    );
    let df = DataFrame::new(vec![lists.clone().into_column()]).unwrap();

    assert_eq!(cardinality(&df).unwrap()[0].distinct, 2);

    let tables = normalize(&df, "main", &HeaderSpec::NameList(vec!["l".to_string()]))
        .unwrap()
        .unwrap();
    assert_eq!(tables.extracted_table("l").unwrap().len(), 2);
    assert_eq!(key_column(tables.primary(), "l"), vec![0, 1, 0]);
    assert!(tables.restore_column("l").unwrap().equals_missing(&lists));
}
