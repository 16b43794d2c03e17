//! Serde integration
//!
//! `Serialize` is derived (transparent) on every wrapper, so each one encodes
//! as its native token. Decoding goes through `deserialize_any`, which makes
//! the wrappers meant for self-describing formats (JSON, YAML, TOML).
//!
//! The plain `Deserialize` impls report fallbacks to the
//! [`AmbientSink`]. Use [`Lenient`] to decode with an explicit sink:
//!
//! ```rust
//! use serde::de::DeserializeSeed;
//! use strval::codec::Lenient;
//! use strval::diagnostic::MemorySink;
//! use strval::Integer;
//!
//! let sink = MemorySink::new();
//! let mut de = serde_json::Deserializer::from_str(r#""not a number""#);
//! let count = Lenient::<Integer>::with_sink(&sink).deserialize(&mut de).unwrap();
//!
//! assert_eq!(count.value(), 0);
//! assert_eq!(sink.len(), 1);
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::de::{
    self, DeserializeSeed, EnumAccess, IgnoredAny, MapAccess, SeqAccess, VariantAccess, Visitor,
};
use serde::{Deserialize, Deserializer};

use crate::coerce::{Scalar, Token};
use crate::diagnostic::{AmbientSink, DiagnosticSink};
use crate::scalar::{Boolean, Float, Integer, Text};

/// Deserialize seed that decodes a lenient scalar, reporting to a chosen sink
pub struct Lenient<'s, T> {
    sink: &'s dyn DiagnosticSink,
    marker: PhantomData<fn() -> T>,
}

impl<T> Lenient<'static, T> {
    /// Report to the [`AmbientSink`].
    pub fn ambient() -> Self {
        Self {
            sink: &AmbientSink,
            marker: PhantomData,
        }
    }
}

impl<'s, T> Lenient<'s, T> {
    pub fn with_sink(sink: &'s dyn DiagnosticSink) -> Self {
        Self {
            sink,
            marker: PhantomData,
        }
    }
}

impl<'de, T: Scalar> DeserializeSeed<'de> for Lenient<'_, T> {
    type Value = T;

    fn deserialize<D>(self, deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ScalarVisitor {
            sink: self.sink,
            marker: PhantomData,
        })
    }
}

struct ScalarVisitor<'s, T> {
    sink: &'s dyn DiagnosticSink,
    marker: PhantomData<fn() -> T>,
}

impl<T: Scalar> ScalarVisitor<'_, T> {
    fn resolve(&self, token: Token<'_>) -> T {
        T::from_token(token, self.sink)
    }
}

impl<'de, T: Scalar> Visitor<'de> for ScalarVisitor<'_, T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a {} or a string", T::KIND)
    }

    fn visit_bool<E>(self, v: bool) -> Result<T, E>
    where
        E: de::Error,
    {
        Ok(self.resolve(Token::Bool(v)))
    }

    fn visit_i64<E>(self, v: i64) -> Result<T, E>
    where
        E: de::Error,
    {
        Ok(self.resolve(Token::Int(v)))
    }

    fn visit_u64<E>(self, v: u64) -> Result<T, E>
    where
        E: de::Error,
    {
        Ok(self.resolve(Token::UInt(v)))
    }

    fn visit_i128<E>(self, v: i128) -> Result<T, E>
    where
        E: de::Error,
    {
        let token = match i64::try_from(v) {
            Ok(v) => Token::Int(v),
            Err(_) => Token::Other("128-bit integer"),
        };
        Ok(self.resolve(token))
    }

    fn visit_u128<E>(self, v: u128) -> Result<T, E>
    where
        E: de::Error,
    {
        let token = match u64::try_from(v) {
            Ok(v) => Token::UInt(v),
            Err(_) => Token::Other("128-bit integer"),
        };
        Ok(self.resolve(token))
    }

    fn visit_f64<E>(self, v: f64) -> Result<T, E>
    where
        E: de::Error,
    {
        Ok(self.resolve(Token::Float(v)))
    }

    fn visit_str<E>(self, v: &str) -> Result<T, E>
    where
        E: de::Error,
    {
        Ok(self.resolve(Token::Str(v)))
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<T, E>
    where
        E: de::Error,
    {
        Ok(self.resolve(Token::Bytes(v)))
    }

    fn visit_none<E>(self) -> Result<T, E>
    where
        E: de::Error,
    {
        Ok(self.resolve(Token::Null))
    }

    fn visit_unit<E>(self) -> Result<T, E>
    where
        E: de::Error,
    {
        Ok(self.resolve(Token::Null))
    }

    fn visit_some<D>(self, deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_newtype_struct<D>(self, deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    // Containers are drained so the enclosing decode can carry on.
    fn visit_seq<A>(self, mut seq: A) -> Result<T, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(self.resolve(Token::Other("sequence")))
    }

    fn visit_map<A>(self, mut map: A) -> Result<T, A::Error>
    where
        A: MapAccess<'de>,
    {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(self.resolve(Token::Other("map")))
    }

    // YAML tags (`!custom 8080`) arrive as single-variant enums.
    fn visit_enum<A>(self, data: A) -> Result<T, A::Error>
    where
        A: EnumAccess<'de>,
    {
        let (IgnoredAny, variant) = data.variant::<IgnoredAny>()?;
        variant.newtype_variant::<IgnoredAny>()?;
        Ok(self.resolve(Token::Other("enum")))
    }
}

macro_rules! impl_lenient_deserialize {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    Lenient::<Self>::ambient().deserialize(deserializer)
                }
            }
        )*
    };
}

impl_lenient_deserialize!(Boolean, Integer, Float);

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TextVisitor)
    }
}

struct TextVisitor;

impl Visitor<'_> for TextVisitor {
    type Value = Text;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string, number or boolean")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Text, E>
    where
        E: de::Error,
    {
        Ok(Text::from_bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Text, E>
    where
        E: de::Error,
    {
        Ok(Text::from_i64(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Text, E>
    where
        E: de::Error,
    {
        Ok(Text::from_u64(v))
    }

    fn visit_i128<E>(self, v: i128) -> Result<Text, E>
    where
        E: de::Error,
    {
        Ok(Text::new(v.to_string()))
    }

    fn visit_u128<E>(self, v: u128) -> Result<Text, E>
    where
        E: de::Error,
    {
        Ok(Text::new(v.to_string()))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Text, E>
    where
        E: de::Error,
    {
        Ok(Text::from_f64(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Text, E>
    where
        E: de::Error,
    {
        Ok(Text::from(v))
    }

    fn visit_string<E>(self, v: String) -> Result<Text, E>
    where
        E: de::Error,
    {
        Ok(Text::from(v))
    }
}
