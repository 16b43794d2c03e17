//! Text that accepts any scalar token

use std::fmt;
use std::ops::Deref;

use crate::parse::format_float;

/// UTF-8 string that decodes from any scalar token
///
/// Numbers are rendered in their shortest round-tripping form (exponent
/// notation below `1e-6` and from `1e21` up) and booleans as
/// `"true"`/`"false"`. Non-scalar tokens (null, sequences, maps, bytes) are a
/// decode error: there is no sensible zero-value substitute for them.
/// Always encodes as a string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Text(String);

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Render a boolean token.
    pub fn from_bool(value: bool) -> Self {
        Self(value.to_string())
    }

    /// Render an integer token.
    pub fn from_i64(value: i64) -> Self {
        Self(value.to_string())
    }

    /// Render an unsigned integer token.
    pub fn from_u64(value: u64) -> Self {
        Self(value.to_string())
    }

    /// Render a float token in its shortest round-tripping form.
    pub fn from_f64(value: f64) -> Self {
        Self(format_float(value))
    }

    /// Get the string as &str
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for Text {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<Text> for String {
    fn from(t: Text) -> Self {
        t.0
    }
}
