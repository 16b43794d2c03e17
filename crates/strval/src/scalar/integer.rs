//! Lenient signed 64-bit integer

use std::fmt;
use std::str::FromStr;

use crate::coerce::{Input, Kind, Scalar, Token, bytes_as_text};
use crate::db::RawValue;
use crate::error::{CoerceError, CoerceResult};
use crate::parse::parse_int;

/// Signed 64-bit integer that also decodes from base-10 text
///
/// Float tokens are rejected on decode; float columns are truncated toward
/// zero on database reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Integer(i64);

impl Integer {
    /// Create a new integer
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the inner value
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl Scalar for Integer {
    type Native = i64;

    const KIND: Kind = Kind::Integer;
    const ZERO: i64 = 0;

    fn from_native(value: i64) -> Self {
        Self(value)
    }

    fn native(&self) -> i64 {
        self.0
    }

    fn parse_text(text: &str) -> CoerceResult<i64> {
        parse_int(text)
    }

    fn classify_token(token: Token<'_>) -> Input<'_, i64> {
        match token {
            Token::Int(v) => Input::Native(v),
            Token::UInt(v) => match i64::try_from(v) {
                Ok(v) => Input::Native(v),
                Err(_) => Input::Rejected(CoerceError::OutOfRange {
                    value: v.to_string(),
                }),
            },
            Token::Str(s) => Input::Text(s),
            Token::Null => Input::Null,
            other => Input::Rejected(CoerceError::unsupported(Self::KIND, other.kind())),
        }
    }

    fn classify_raw(raw: &RawValue) -> Input<'_, i64> {
        match raw {
            RawValue::Null => Input::Null,
            RawValue::Int(v) => Input::Native(*v),
            // `as` truncates toward zero, saturates at the bounds and maps NaN to 0
            RawValue::Float(v) => Input::Native(*v as i64),
            RawValue::Text(s) => Input::Text(s),
            RawValue::Bytes(b) => bytes_as_text(b),
            other => Input::Rejected(CoerceError::unsupported(Self::KIND, other.kind())),
        }
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Integer {
    type Err = CoerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_int(s).map(Self)
    }
}

impl From<i32> for Integer {
    fn from(v: i32) -> Self {
        Self(i64::from(v))
    }
}

impl From<i64> for Integer {
    fn from(v: i64) -> Self {
        Self(v)
    }
}

impl From<Integer> for i64 {
    fn from(v: Integer) -> Self {
        v.0
    }
}
