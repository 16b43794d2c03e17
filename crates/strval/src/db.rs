//! Database value exchange
//!
//! [`RawValue`] is the column value a driver adapter hands over, modelled on
//! the handful of transport kinds SQL drivers agree on. [`ValueOut`] writes a
//! wrapper into a column, [`ValueIn`] reads one back with the same
//! never-fail coercion as the serde path, plus the cross-kind conversions
//! drivers commonly produce (floats for integer columns, integers for booleans,
//! text columns delivered as bytes).

use chrono::{DateTime, Utc};

use crate::coerce::Scalar;
use crate::diagnostic::{AmbientSink, DiagnosticSink};
use crate::error::CoerceResult;

/// A column value as transported by a database driver
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Timestamp(DateTime<Utc>),
}

impl RawValue {
    /// Transport kind name, as reported in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int64",
            Self::Float(_) => "float64",
            Self::Text(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::Timestamp(_) => "timestamp",
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<bool> for RawValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for RawValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f32> for RawValue {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for RawValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<u8>> for RawValue {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl From<&[u8]> for RawValue {
    fn from(v: &[u8]) -> Self {
        Self::Bytes(v.to_vec())
    }
}

impl From<DateTime<Utc>> for RawValue {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Timestamp(v)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// Writing a value into a database column
pub trait ValueOut {
    fn value_out(&self) -> CoerceResult<RawValue>;
}

/// Reading a value from a database column
pub trait ValueIn {
    /// Populate `self` from `raw`, reporting fallbacks to `sink`.
    fn value_in_with(&mut self, raw: RawValue, sink: &dyn DiagnosticSink) -> CoerceResult<()>;

    /// Populate `self` from `raw`, reporting fallbacks to the [`AmbientSink`].
    fn value_in(&mut self, raw: RawValue) -> CoerceResult<()> {
        self.value_in_with(raw, &AmbientSink)
    }
}

impl<T> ValueOut for T
where
    T: Scalar,
    T::Native: Into<RawValue>,
{
    fn value_out(&self) -> CoerceResult<RawValue> {
        Ok(self.native().into())
    }
}

impl<T: Scalar> ValueIn for T {
    fn value_in_with(&mut self, raw: RawValue, sink: &dyn DiagnosticSink) -> CoerceResult<()> {
        *self = T::from_raw(&raw, sink);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn option_maps_none_to_null() {
        assert_eq!(RawValue::from(None::<i64>), RawValue::Null);
        assert_eq!(RawValue::from(Some(5i64)), RawValue::Int(5));
        assert!(RawValue::from(None::<&str>).is_null());
    }

    #[test]
    fn kind_names() {
        assert_eq!(RawValue::from(1.5_f64).kind(), "float64");
        assert_eq!(RawValue::from(vec![1u8]).kind(), "bytes");
        assert_eq!(RawValue::Timestamp(DateTime::<Utc>::UNIX_EPOCH).kind(), "timestamp");
    }
}
