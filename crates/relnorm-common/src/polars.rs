//! Polars AnyValue utility functions.
//!
//! [`CellKey`] gives every cell a hashable identity so columns of any dtype
//! can be deduplicated in first-occurrence order. [`any_to_string`] renders
//! cells for console output.

use polars::prelude::AnyValue;

/// Hashable identity of a single cell value.
///
/// All missing values share one key, so two nulls compare equal. Floats are
/// keyed by their bit pattern after folding `-0.0` into `0.0` and every NaN
/// into one canonical NaN. List cells are keyed element by element.
///
/// Dtypes without a dedicated variant fall back to their display form, which
/// Polars may truncate. Such keys only group candidates; callers must confirm
/// equality on the values themselves when [`CellKey::is_exact`] is false.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use relnorm_common::CellKey;
///
/// assert_eq!(CellKey::from_any(AnyValue::Null), CellKey::Missing);
/// assert_eq!(
///     CellKey::from_any(AnyValue::Int32(7)),
///     CellKey::from_any(AnyValue::Int64(7)),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CellKey {
    /// Null or otherwise absent value.
    Missing,
    Boolean(bool),
    Int(i64),
    UInt(u64),
    /// Normalized `f64` bit pattern.
    Float(u64),
    Text(String),
    Bytes(Vec<u8>),
    /// Elements of a list cell, in order.
    List(Vec<CellKey>),
    /// Any other dtype, keyed by its display form.
    Other(String),
}

impl CellKey {
    /// Build the key for a Polars value.
    pub fn from_any(value: AnyValue<'_>) -> Self {
        match value {
            AnyValue::Null => Self::Missing,
            AnyValue::Boolean(b) => Self::Boolean(b),
            AnyValue::Int8(v) => Self::Int(i64::from(v)),
            AnyValue::Int16(v) => Self::Int(i64::from(v)),
            AnyValue::Int32(v) => Self::Int(i64::from(v)),
            AnyValue::Int64(v) => Self::Int(v),
            AnyValue::UInt8(v) => Self::UInt(u64::from(v)),
            AnyValue::UInt16(v) => Self::UInt(u64::from(v)),
            AnyValue::UInt32(v) => Self::UInt(u64::from(v)),
            AnyValue::UInt64(v) => Self::UInt(v),
            AnyValue::Float32(v) => Self::float(f64::from(v)),
            AnyValue::Float64(v) => Self::float(v),
            AnyValue::String(s) => Self::Text(s.to_string()),
            AnyValue::StringOwned(s) => Self::Text(s.to_string()),
            AnyValue::Binary(bytes) => Self::Bytes(bytes.to_vec()),
            AnyValue::BinaryOwned(bytes) => Self::Bytes(bytes),
            AnyValue::List(items) => Self::List(
                (0..items.len())
                    .map(|i| items.get(i).map_or(Self::Missing, Self::from_any))
                    .collect(),
            ),
            other => Self::Other(other.to_string()),
        }
    }

    fn float(v: f64) -> Self {
        if v.is_nan() {
            Self::Float(f64::NAN.to_bits())
        } else if v == 0.0 {
            Self::Float(0.0_f64.to_bits())
        } else {
            Self::Float(v.to_bits())
        }
    }

    /// Returns false when two different values may share this key.
    pub fn is_exact(&self) -> bool {
        match self {
            Self::Other(_) => false,
            Self::List(items) => items.iter().all(Self::is_exact),
            _ => true,
        }
    }
}

/// Converts a Polars `AnyValue` to a display `String`.
///
/// Returns an empty string for `Null` and formats floats without
/// unnecessary trailing zeros.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use relnorm_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Float64(2.50)), "2.5");
/// assert_eq!(any_to_string(AnyValue::String("red")), "red");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Formats a floating-point number as a string without trailing zeros.
///
/// Non-finite values keep their standard spelling.
///
/// # Examples
///
/// ```
/// use relnorm_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(0.75), "0.75");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
