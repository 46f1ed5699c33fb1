//! First-occurrence distinct values of a column.

use std::collections::HashMap;

use polars::prelude::{IdxCa, IdxSize, IntoSeries, Series};
use relnorm_common::CellKey;

use crate::error::Result;

/// Distinct values of one column and the surrogate key of every row.
///
/// Positions are assigned in order of first occurrence, so the key of a row
/// is the index of its value in the extracted table.
#[derive(Debug, Clone, Default)]
pub(crate) struct DistinctValues {
    /// Row of the first occurrence of each distinct value.
    first_rows: Vec<IdxSize>,
    /// Surrogate key per row.
    keys: Vec<IdxSize>,
}

impl DistinctValues {
    pub(crate) fn of(series: &Series) -> Result<Self> {
        // Several distinct values share a bucket only when their key is inexact.
        let mut buckets: HashMap<CellKey, Vec<IdxSize>> = HashMap::new();
        let mut first_rows: Vec<IdxSize> = Vec::new();
        let mut keys = Vec::with_capacity(series.len());
        for row in 0..series.len() {
            let value = series.get(row)?;
            let key = CellKey::from_any(value.clone());
            let exact = key.is_exact();
            let candidates = buckets.entry(key).or_default();

            let mut found = None;
            for &position in candidates.iter() {
                let first_row = first_rows[position as usize] as usize;
                if exact || series.get(first_row)? == value {
                    found = Some(position);
                    break;
                }
            }
            let position = match found {
                Some(position) => position,
                None => {
                    let position = first_rows.len() as IdxSize;
                    first_rows.push(row as IdxSize);
                    candidates.push(position);
                    position
                }
            };
            keys.push(position);
        }
        Ok(Self { first_rows, keys })
    }

    /// Number of distinct values, missing counted once.
    pub(crate) fn len(&self) -> usize {
        self.first_rows.len()
    }

    /// The distinct values of `series`, in first-occurrence order.
    pub(crate) fn values(&self, series: &Series) -> Result<Series> {
        let rows = IdxCa::from_vec("first_rows".into(), self.first_rows.clone());
        Ok(series.take(&rows)?)
    }

    /// Surrogate keys for every row, named after the source column.
    pub(crate) fn into_keys(self, name: &str) -> Series {
        IdxCa::from_vec(name.into(), self.keys).into_series()
    }
}

/// Count distinct values of `series`, treating every missing value as one.
pub(crate) fn distinct_count(series: &Series) -> Result<usize> {
    Ok(DistinctValues::of(series)?.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::NamedFrom;

    #[test]
    fn test_first_occurrence_order() {
        let series = Series::new("color".into(), ["red", "blue", "red", "green"]);
        let distinct = DistinctValues::of(&series).unwrap();
        assert_eq!(distinct.len(), 3);

        let values = distinct.values(&series).unwrap();
        let values: Vec<Option<&str>> = values.str().unwrap().into_iter().collect();
        assert_eq!(values, vec![Some("red"), Some("blue"), Some("green")]);

        let keys = distinct.into_keys("color");
        assert_eq!(keys.name().as_str(), "color");
        let keys: Vec<Option<IdxSize>> = keys.idx().unwrap().into_iter().collect();
        assert_eq!(keys, vec![Some(0), Some(1), Some(0), Some(2)]);
    }

    #[test]
    fn test_missing_values_are_one_entry() {
        let series = Series::new("size".into(), [None, Some(3i64), None, Some(3)]);
        let distinct = DistinctValues::of(&series).unwrap();
        assert_eq!(distinct.len(), 2);
        assert_eq!(distinct_count(&series).unwrap(), 2);

        let values = distinct.values(&series).unwrap();
        assert_eq!(values.null_count(), 1);
        assert_eq!(values.get(0).unwrap(), polars::prelude::AnyValue::Null);
    }

    #[test]
    fn test_list_cells_differing_in_the_middle() {
        let base: Vec<i64> = (0..20).collect();
        let mut changed = base.clone();
        changed[10] = 999;
        let series = Series::new(
            "l".into(),
            vec![
                Series::new("".into(), base.clone()),
                Series::new("".into(), changed),
                Series::new("".into(), base),
            ],
        );

        let distinct = DistinctValues::of(&series).unwrap();
        assert_eq!(distinct.len(), 2);
        assert_eq!(distinct_count(&series).unwrap(), 2);
        let keys: Vec<Option<IdxSize>> =
            distinct.into_keys("l").idx().unwrap().into_iter().collect();
        assert_eq!(keys, vec![Some(0), Some(1), Some(0)]);
    }

    #[test]
    fn test_empty_series() {
        let series = Series::new_empty("x".into(), &polars::prelude::DataType::String);
        let distinct = DistinctValues::of(&series).unwrap();
        assert_eq!(distinct.len(), 0);
        assert_eq!(distinct.values(&series).unwrap().len(), 0);
        assert_eq!(distinct_count(&series).unwrap(), 0);
    }
}
