//! The coercion engine shared by the lenient scalar wrappers
//!
//! Every wrapper follows the same policy: adopt the native kind, parse text,
//! and fall back to the zero value plus a [`Diagnostic`] for anything else.
//! That control flow lives once, in [`Scalar::coerce`]. A wrapper only says
//! what its native kind is, how to parse text, and how to classify the inputs
//! a codec or a database hands it.

use std::fmt;

use crate::db::RawValue;
use crate::diagnostic::{Diagnostic, DiagnosticSink, Origin};
use crate::error::{CoerceError, CoerceResult};

/// The four scalar kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Boolean,
    Integer,
    Float,
    Text,
}

impl Kind {
    /// Stable name used in diagnostics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::Text => "Text",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scalar token as seen by a document codec
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'a> {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(&'a str),
    Bytes(&'a [u8]),
    /// A non-scalar token (sequence, map, enum), described by name.
    Other(&'static str),
}

impl Token<'_> {
    /// Short description of the token kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) | Self::UInt(_) => "integer",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::Other(name) => *name,
        }
    }
}

/// An input after a wrapper has classified it
#[derive(Debug, Clone, PartialEq)]
pub enum Input<'a, N> {
    /// Already the native kind, possibly after a lossless or agreed conversion.
    Native(N),
    /// Text to run through the kind's parser.
    Text(&'a str),
    /// Explicit absence; resolves to the zero value silently.
    Null,
    /// Cannot be coerced.
    Rejected(CoerceError),
}

/// A lenient scalar wrapper driven by the shared coercion routine.
pub trait Scalar: Sized {
    /// Wrapped primitive.
    type Native: Copy;

    const KIND: Kind;

    /// Value used whenever coercion fails.
    const ZERO: Self::Native;

    fn from_native(value: Self::Native) -> Self;

    fn native(&self) -> Self::Native;

    /// Strategy for string inputs.
    fn parse_text(text: &str) -> CoerceResult<Self::Native>;

    /// Classify a document token.
    fn classify_token(token: Token<'_>) -> Input<'_, Self::Native>;

    /// Classify a database raw value.
    fn classify_raw(raw: &RawValue) -> Input<'_, Self::Native>;

    /// Resolve a classified input, never failing.
    ///
    /// Parse failures and rejected inputs yield [`Scalar::ZERO`] and one
    /// diagnostic on `sink`.
    fn coerce(
        input: Input<'_, Self::Native>,
        origin: Origin,
        sink: &dyn DiagnosticSink,
    ) -> Self {
        let native = match input {
            Input::Native(value) => value,
            Input::Null => Self::ZERO,
            Input::Text(text) => match Self::parse_text(text) {
                Ok(value) => value,
                Err(error) => {
                    let diagnostic =
                        Diagnostic::new(Self::KIND, origin, Some(text.to_string()), error);
                    sink.record(&diagnostic);
                    Self::ZERO
                }
            },
            Input::Rejected(error) => {
                sink.record(&Diagnostic::new(Self::KIND, origin, None, error));
                Self::ZERO
            }
        };
        Self::from_native(native)
    }

    /// Decode a document token.
    fn from_token(token: Token<'_>, sink: &dyn DiagnosticSink) -> Self {
        Self::coerce(Self::classify_token(token), Origin::Decode, sink)
    }

    /// Decode a database raw value.
    fn from_raw(raw: &RawValue, sink: &dyn DiagnosticSink) -> Self {
        Self::coerce(Self::classify_raw(raw), Origin::Database, sink)
    }
}

/// Classify raw bytes as text, rejecting anything that is not UTF-8.
pub(crate) fn bytes_as_text<N>(bytes: &[u8]) -> Input<'_, N> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Input::Text(text),
        Err(source) => Input::Rejected(CoerceError::InvalidUtf8 { source }),
    }
}
