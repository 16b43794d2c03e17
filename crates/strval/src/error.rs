//! Error types for coercion
//!
//! Most of these never reach a caller: the lenient decode paths turn them into
//! a zero value plus a [`Diagnostic`](crate::diagnostic::Diagnostic). They do
//! surface from the strict entry points (`FromStr`, the `parse` functions).

use std::num::{ParseFloatError, ParseIntError};
use std::str::Utf8Error;

use thiserror::Error;

use crate::coerce::Kind;

/// Result type alias for coercion operations
pub type CoerceResult<T> = Result<T, CoerceError>;

/// Why an input could not be coerced into a scalar kind
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoerceError {
    /// The text is not one of the recognized boolean words.
    #[error("cannot parse '{input}' as bool")]
    InvalidBool {
        /// Trimmed, lower-cased input.
        input: String,
    },

    /// The text is not a base-10 integer.
    #[error("cannot parse '{input}' as integer: {source}")]
    InvalidInteger {
        /// Offending input, verbatim.
        input: String,
        #[source]
        source: ParseIntError,
    },

    /// The text is not a decimal or exponential float.
    #[error("cannot parse '{input}' as float: {source}")]
    InvalidFloat {
        /// Offending input, verbatim.
        input: String,
        #[source]
        source: ParseFloatError,
    },

    /// An integer token does not fit in an `i64`.
    #[error("integer {value} is out of range for i64")]
    OutOfRange { value: String },

    /// Raw bytes handed over by a database driver are not UTF-8 text.
    #[error("bytes are not valid UTF-8: {source}")]
    InvalidUtf8 {
        #[source]
        source: Utf8Error,
    },

    /// The input kind cannot be coerced into the target kind at all.
    #[error("{target} cannot be read from a {found} value")]
    UnsupportedKind {
        /// Wrapper being populated.
        target: Kind,
        /// Description of what was found instead, e.g. `"float"` or `"map"`.
        found: &'static str,
    },
}

impl CoerceError {
    /// Convenience constructor for [`CoerceError::UnsupportedKind`].
    pub fn unsupported(target: Kind, found: &'static str) -> Self {
        Self::UnsupportedKind { target, found }
    }

    /// Returns `true` when the failure came from parsing text, as opposed to
    /// receiving an input of the wrong kind.
    #[must_use]
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            Self::InvalidBool { .. } | Self::InvalidInteger { .. } | Self::InvalidFloat { .. }
        )
    }

    /// Kind of input that was received.
    #[must_use]
    pub const fn found(&self) -> &'static str {
        match self {
            Self::InvalidBool { .. } | Self::InvalidInteger { .. } | Self::InvalidFloat { .. } => {
                "string"
            }
            Self::OutOfRange { .. } => "integer",
            Self::InvalidUtf8 { .. } => "bytes",
            Self::UnsupportedKind { found, .. } => *found,
        }
    }
}
