//! # strval
//!
//! Lenient scalar wrappers for configuration files and database rows.
//!
//! Real-world documents carry `"true"`, `"100"` and `"3.5"` where a schema
//! expects `true`, `100` and `3.5`. The wrappers in this crate accept either
//! form when decoding and always encode back to the native kind.
//!
//! ## Key Components
//!
//! - **Scalars**: [`Boolean`], [`Integer`], [`Float`] never fail to decode. A
//!   malformed value becomes the zero value and a [`Diagnostic`] is reported.
//!   [`Text`] accepts any scalar token and renders it as a string.
//! - **Coercion engine**: [`coerce::Scalar`], one generic routine behind all
//!   three lenient wrappers.
//! - **Diagnostics**: [`DiagnosticSink`] with [`TracingSink`] (default) and
//!   [`MemorySink`], injected explicitly or per thread with [`with_sink`].
//! - **Database exchange**: [`RawValue`], [`ValueOut`], [`ValueIn`].
//! - **Accessor**: [`GetValue`] for code generic over the wrappers.
//!
//! ## Usage
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use strval::{Boolean, Float, Integer};
//!
//! #[derive(Deserialize, Serialize)]
//! struct Config {
//!     enabled: Boolean,
//!     count: Integer,
//!     ratio: Float,
//! }
//!
//! let config: Config =
//!     serde_json::from_str(r#"{"enabled":"true","count":"100","ratio":"3.5"}"#).unwrap();
//! assert!(config.enabled.value());
//! assert_eq!(config.count.value(), 100);
//!
//! assert_eq!(
//!     serde_json::to_string(&config).unwrap(),
//!     r#"{"enabled":true,"count":100,"ratio":3.5}"#
//! );
//! ```
//!
//! ## Features
//!
//! - `serde` (default): `Serialize`/`Deserialize` impls and [`codec::Lenient`].

pub mod coerce;
pub mod db;
pub mod diagnostic;
pub mod error;
pub mod parse;
pub mod scalar;
pub mod value;

#[cfg(feature = "serde")]
pub mod codec;

pub use coerce::Kind;
pub use db::{RawValue, ValueIn, ValueOut};
pub use diagnostic::{Diagnostic, DiagnosticSink, MemorySink, Origin, TracingSink, with_sink};
pub use error::{CoerceError, CoerceResult};
pub use scalar::{Boolean, Float, Integer, Text};
pub use value::GetValue;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Boolean, CoerceError, DiagnosticSink, Float, GetValue, Integer, RawValue, Text, ValueIn,
        ValueOut,
    };
}
