//! Lenient boolean

use std::fmt;
use std::str::FromStr;

use crate::coerce::{Input, Kind, Scalar, Token, bytes_as_text};
use crate::db::RawValue;
use crate::error::{CoerceError, CoerceResult};
use crate::parse::parse_bool;

/// Boolean that also decodes from boolean words
///
/// Accepts native booleans and the words understood by
/// [`parse_bool`](crate::parse::parse_bool). Always encodes as a native boolean.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Boolean(bool);

impl Boolean {
    pub const TRUE: Self = Self(true);
    pub const FALSE: Self = Self(false);

    #[inline]
    #[must_use]
    pub const fn new(value: bool) -> Self {
        Self(value)
    }

    /// Returns the underlying bool value
    #[inline]
    #[must_use]
    pub const fn value(&self) -> bool {
        self.0
    }
}

impl Scalar for Boolean {
    type Native = bool;

    const KIND: Kind = Kind::Boolean;
    const ZERO: bool = false;

    fn from_native(value: bool) -> Self {
        Self(value)
    }

    fn native(&self) -> bool {
        self.0
    }

    fn parse_text(text: &str) -> CoerceResult<bool> {
        parse_bool(text)
    }

    fn classify_token(token: Token<'_>) -> Input<'_, bool> {
        match token {
            Token::Bool(v) => Input::Native(v),
            Token::Str(s) => Input::Text(s),
            Token::Null => Input::Null,
            other => Input::Rejected(CoerceError::unsupported(Self::KIND, other.kind())),
        }
    }

    fn classify_raw(raw: &RawValue) -> Input<'_, bool> {
        match raw {
            RawValue::Null => Input::Null,
            RawValue::Bool(v) => Input::Native(*v),
            RawValue::Int(v) => Input::Native(*v != 0),
            RawValue::Text(s) => Input::Text(s),
            RawValue::Bytes(b) => bytes_as_text(b),
            other => Input::Rejected(CoerceError::unsupported(Self::KIND, other.kind())),
        }
    }
}

impl fmt::Display for Boolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Boolean {
    type Err = CoerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_bool(s).map(Self)
    }
}

impl From<bool> for Boolean {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl From<Boolean> for bool {
    fn from(value: Boolean) -> Self {
        value.0
    }
}
