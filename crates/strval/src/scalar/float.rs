//! Lenient double-precision float

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::coerce::{Input, Kind, Scalar, Token, bytes_as_text};
use crate::db::RawValue;
use crate::error::{CoerceError, CoerceResult};
use crate::parse::parse_float;

/// IEEE 754 double that also decodes from decimal or exponential text
///
/// Integer tokens and integer columns widen to `f64`.
///
/// Like `f64`, this type is not `Eq` or `Hash`.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Float(f64);

impl Float {
    /// Create a new float
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the inner value
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl Scalar for Float {
    type Native = f64;

    const KIND: Kind = Kind::Float;
    const ZERO: f64 = 0.0;

    fn from_native(value: f64) -> Self {
        Self(value)
    }

    fn native(&self) -> f64 {
        self.0
    }

    fn parse_text(text: &str) -> CoerceResult<f64> {
        parse_float(text)
    }

    fn classify_token(token: Token<'_>) -> Input<'_, f64> {
        match token {
            Token::Float(v) => Input::Native(v),
            Token::Int(v) => Input::Native(v as f64),
            Token::UInt(v) => Input::Native(v as f64),
            Token::Str(s) => Input::Text(s),
            Token::Null => Input::Null,
            other => Input::Rejected(CoerceError::unsupported(Self::KIND, other.kind())),
        }
    }

    fn classify_raw(raw: &RawValue) -> Input<'_, f64> {
        match raw {
            RawValue::Null => Input::Null,
            RawValue::Float(v) => Input::Native(*v),
            RawValue::Int(v) => Input::Native(*v as f64),
            RawValue::Text(s) => Input::Text(s),
            RawValue::Bytes(b) => bytes_as_text(b),
            other => Input::Rejected(CoerceError::unsupported(Self::KIND, other.kind())),
        }
    }
}

// NaN != NaN, as for f64
impl PartialEq for Float {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Float {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Float {
    type Err = CoerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_float(s).map(Self)
    }
}

impl From<f32> for Float {
    fn from(v: f32) -> Self {
        Self(f64::from(v))
    }
}

impl From<f64> for Float {
    fn from(v: f64) -> Self {
        Self(v)
    }
}

impl From<Float> for f64 {
    fn from(v: Float) -> Self {
        v.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::MemorySink;
    use pretty_assertions::assert_eq;

    #[test]
    fn tokens() {
        let sink = MemorySink::new();
        assert_eq!(Float::from_token(Token::Float(3.25), &sink).value(), 3.25);
        assert_eq!(Float::from_token(Token::Int(-2), &sink).value(), -2.0);
        assert_eq!(Float::from_token(Token::UInt(42), &sink).value(), 42.0);
        assert_eq!(Float::from_token(Token::Str("3.5"), &sink).value(), 3.5);
        assert_eq!(Float::from_token(Token::Str("1e-3"), &sink).value(), 0.001);
        assert!(sink.is_empty());
    }

    #[test]
    fn bool_token_is_rejected() {
        let sink = MemorySink::new();
        assert_eq!(Float::from_token(Token::Bool(true), &sink).value(), 0.0);
        assert_eq!(
            sink.take()[0].error,
            CoerceError::unsupported(Kind::Float, "bool")
        );
    }

    #[test]
    fn malformed_text_falls_back_to_zero() {
        let sink = MemorySink::new();
        assert_eq!(Float::from_token(Token::Str("3.25abc"), &sink).value(), 0.0);
        let records = sink.take();
        assert_eq!(records[0].value.as_deref(), Some("3.25abc"));
    }

    #[test]
    fn raw_integers_widen() {
        let sink = MemorySink::new();
        assert_eq!(Float::from_raw(&RawValue::Int(42), &sink).value(), 42.0);
        assert_eq!(Float::from_raw(&RawValue::Float(3.25), &sink).value(), 3.25);
        assert_eq!(Float::from_raw(&RawValue::Bytes(b"2.5".to_vec()), &sink).value(), 2.5);
        assert!(sink.is_empty());
    }

    #[test]
    fn nan_is_not_equal_to_itself() {
        let nan = Float::new(f64::NAN);
        assert_ne!(nan, nan);
        assert!(Float::new(1.0) < Float::new(2.0));
    }
}
