//! Building a [`HeaderSpec`] from loosely typed input.
//!
//! Two front ends are supported. JSON values map onto the specifier shapes
//! directly (number, array, object). The compact text form used on the
//! command line accepts:
//!
//! - `0.5`: uniform threshold (finite numbers only)
//! - `color,size` or `0,2`: explicit column names or numbers
//! - `color=0.5,size=0.2` or `0=0.5`: per-column thresholds
//! - anything starting with `[` or `{`: parsed as JSON
//!
//! Identifiers made of digits only are column numbers; all others are names.
//! A list or mapping must not mix the two.

use std::str::FromStr;

use serde_json::{Map, Value};

use crate::column::ColumnId;
use crate::error::{NormalizeError, Result};
use crate::headers::HeaderSpec;

const LIST_CONTEXT: &str = "a list of headers";
const MAP_CONTEXT: &str = "a mapping of headers";

impl HeaderSpec {
    /// Interpret a JSON value as a header specifier.
    ///
    /// Object keys are strings in JSON, so a key made of digits only is read
    /// as a column number.
    ///
    /// # Errors
    ///
    /// [`NormalizeError::UnsupportedHeaders`] for booleans, strings, null,
    /// non-numeric thresholds or list items that are neither non-negative
    /// integers nor strings; [`NormalizeError::MixedIdentifiers`] when
    /// numbers and names are mixed.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Number(number) => number
                .as_f64()
                .map(Self::UniformThreshold)
                .ok_or_else(|| NormalizeError::unsupported(format!("number {number}"))),
            Value::Array(items) => {
                let ids = items
                    .iter()
                    .map(json_list_item)
                    .collect::<Result<Vec<_>>>()?;
                list_spec(ids)
            }
            Value::Object(entries) => map_spec(json_entries(entries)?),
            Value::Bool(flag) => Err(NormalizeError::unsupported(format!("boolean {flag}"))),
            Value::String(text) => Err(NormalizeError::unsupported(format!("string \"{text}\""))),
            Value::Null => Err(NormalizeError::unsupported("null")),
        }
    }
}

impl FromStr for HeaderSpec {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.starts_with('[') || trimmed.starts_with('{') {
            let value: Value = serde_json::from_str(trimmed)
                .map_err(|e| NormalizeError::unsupported(format!("invalid JSON: {e}")))?;
            return Self::from_json(&value);
        }
        if trimmed.is_empty() {
            return Err(NormalizeError::unsupported("empty specifier"));
        }
        // `nan` and `inf` parse as floats but are column names here.
        if let Ok(threshold) = trimmed.parse::<f64>()
            && threshold.is_finite()
        {
            return Ok(Self::UniformThreshold(threshold));
        }

        let parts: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        if parts.iter().any(|part| part.is_empty()) {
            return Err(NormalizeError::unsupported(format!(
                "empty identifier in \"{trimmed}\""
            )));
        }
        if parts.iter().any(|part| part.contains('=')) {
            let entries = parts
                .into_iter()
                .map(text_entry)
                .collect::<Result<Vec<_>>>()?;
            map_spec(entries)
        } else {
            list_spec(parts.into_iter().map(text_id).collect())
        }
    }
}

fn text_id(text: &str) -> ColumnId {
    match text.parse::<usize>() {
        Ok(index) => ColumnId::Index(index),
        Err(_) => ColumnId::Name(text.to_string()),
    }
}

fn text_entry(part: &str) -> Result<(ColumnId, f64)> {
    let Some((key, value)) = part.split_once('=') else {
        return Err(NormalizeError::unsupported(format!(
            "\"{part}\" is not a column=threshold pair"
        )));
    };
    let key = key.trim();
    if key.is_empty() {
        return Err(NormalizeError::unsupported(format!(
            "missing column in \"{part}\""
        )));
    }
    let threshold = value.trim().parse::<f64>().map_err(|_| {
        NormalizeError::unsupported(format!("threshold for \"{key}\" must be a number"))
    })?;
    Ok((text_id(key), threshold))
}

fn json_list_item(item: &Value) -> Result<ColumnId> {
    match item {
        Value::String(name) => Ok(ColumnId::Name(name.clone())),
        Value::Number(number) => number
            .as_u64()
            .and_then(|index| usize::try_from(index).ok())
            .map(ColumnId::Index)
            .ok_or_else(|| {
                NormalizeError::unsupported(format!(
                    "{number} is not a valid column number"
                ))
            }),
        other => Err(NormalizeError::unsupported(format!(
            "list item {other} is neither a column number nor a column name"
        ))),
    }
}

fn json_entries(entries: &Map<String, Value>) -> Result<Vec<(ColumnId, f64)>> {
    entries
        .iter()
        .map(|(key, value)| {
            let threshold = value.as_f64().ok_or_else(|| {
                NormalizeError::unsupported(format!("threshold for \"{key}\" must be a number"))
            })?;
            Ok((text_id(key), threshold))
        })
        .collect()
}

fn list_spec(ids: Vec<ColumnId>) -> Result<HeaderSpec> {
    let mut indices = Vec::new();
    let mut names = Vec::new();
    for id in ids {
        match id {
            ColumnId::Index(index) => indices.push(index),
            ColumnId::Name(name) => names.push(name),
        }
    }
    match (indices.is_empty(), names.is_empty()) {
        (false, false) => Err(NormalizeError::MixedIdentifiers {
            context: LIST_CONTEXT,
        }),
        (false, true) => Ok(HeaderSpec::IndexList(indices)),
        _ => Ok(HeaderSpec::NameList(names)),
    }
}

fn map_spec(entries: Vec<(ColumnId, f64)>) -> Result<HeaderSpec> {
    let mut indices = Vec::new();
    let mut names = Vec::new();
    for (id, threshold) in entries {
        match id {
            ColumnId::Index(index) => indices.push((index, threshold)),
            ColumnId::Name(name) => names.push((name, threshold)),
        }
    }
    match (indices.is_empty(), names.is_empty()) {
        (false, false) => Err(NormalizeError::MixedIdentifiers {
            context: MAP_CONTEXT,
        }),
        (false, true) => Ok(HeaderSpec::IndexThresholds(indices)),
        _ => Ok(HeaderSpec::NameThresholds(names)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(text: &str) -> Result<HeaderSpec> {
        text.parse()
    }

    #[test]
    fn test_text_non_finite_numbers_are_names() {
        assert_eq!(
            parse("nan").unwrap(),
            HeaderSpec::NameList(vec!["nan".to_string()])
        );
        assert_eq!(
            parse("inf,size").unwrap(),
            HeaderSpec::NameList(vec!["inf".to_string(), "size".to_string()])
        );
        assert_eq!(parse("-2").unwrap(), HeaderSpec::UniformThreshold(-2.0));
    }

    #[test]
    fn test_text_uniform_threshold() {
        assert_eq!(parse("0.5").unwrap(), HeaderSpec::UniformThreshold(0.5));
        assert_eq!(parse(" 1 ").unwrap(), HeaderSpec::UniformThreshold(1.0));
    }

    #[test]
    fn test_text_lists() {
        assert_eq!(parse("2,0").unwrap(), HeaderSpec::IndexList(vec![2, 0]));
        assert_eq!(
            parse("color, id").unwrap(),
            HeaderSpec::NameList(vec!["color".to_string(), "id".to_string()])
        );
        assert_eq!(
            parse("color").unwrap(),
            HeaderSpec::NameList(vec!["color".to_string()])
        );
    }

    #[test]
    fn test_text_threshold_maps() {
        assert_eq!(
            parse("color=0.5,id=1").unwrap(),
            HeaderSpec::NameThresholds(vec![("color".to_string(), 0.5), ("id".to_string(), 1.0)])
        );
        assert_eq!(
            parse("0=0.25").unwrap(),
            HeaderSpec::IndexThresholds(vec![(0, 0.25)])
        );
    }

    #[test]
    fn test_text_mixed_identifiers() {
        assert!(matches!(
            parse("0,color").unwrap_err(),
            NormalizeError::MixedIdentifiers { .. }
        ));
        assert!(matches!(
            parse("0=0.5,color=0.5").unwrap_err(),
            NormalizeError::MixedIdentifiers { .. }
        ));
    }

    #[test]
    fn test_text_malformed() {
        for text in ["", "a,,b", "color=0.5,id", "color=high", "=0.5"] {
            assert!(
                matches!(parse(text), Err(NormalizeError::UnsupportedHeaders { .. })),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_text_falls_through_to_json() {
        assert_eq!(parse("[1, 3]").unwrap(), HeaderSpec::IndexList(vec![1, 3]));
        assert_eq!(
            parse(r#"{"color": 0.5}"#).unwrap(),
            HeaderSpec::NameThresholds(vec![("color".to_string(), 0.5)])
        );
        assert!(matches!(
            parse("[1, 3").unwrap_err(),
            NormalizeError::UnsupportedHeaders { .. }
        ));
    }

    #[test]
    fn test_json_shapes() {
        assert_eq!(
            HeaderSpec::from_json(&json!(0.3)).unwrap(),
            HeaderSpec::UniformThreshold(0.3)
        );
        assert_eq!(
            HeaderSpec::from_json(&json!(["id", "color"])).unwrap(),
            HeaderSpec::NameList(vec!["id".to_string(), "color".to_string()])
        );
        assert_eq!(
            HeaderSpec::from_json(&json!({"0": 0.5, "2": 1})).unwrap(),
            HeaderSpec::IndexThresholds(vec![(0, 0.5), (2, 1.0)])
        );
        assert_eq!(
            HeaderSpec::from_json(&json!([])).unwrap(),
            HeaderSpec::NameList(vec![])
        );
    }

    #[test]
    fn test_json_rejects_other_shapes() {
        for value in [json!(true), json!("color"), json!(null), json!([[1]]), json!([-1])] {
            assert!(
                matches!(
                    HeaderSpec::from_json(&value),
                    Err(NormalizeError::UnsupportedHeaders { .. })
                ),
                "{value} should be rejected"
            );
        }
        assert!(matches!(
            HeaderSpec::from_json(&json!([0, "color"])).unwrap_err(),
            NormalizeError::MixedIdentifiers { .. }
        ));
        assert!(matches!(
            HeaderSpec::from_json(&json!({"color": "high"})).unwrap_err(),
            NormalizeError::UnsupportedHeaders { .. }
        ));
    }
}
