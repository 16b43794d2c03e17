//! The four lenient scalar wrappers
//!
//! [`Boolean`], [`Integer`] and [`Float`] run through the shared
//! [`Scalar`](crate::coerce::Scalar) coercion and never fail to decode.
//! [`Text`] renders any scalar token as a string and rejects everything else.

pub mod boolean;
pub mod float;
pub mod integer;
pub mod text;

pub use boolean::Boolean;
pub use float::Float;
pub use integer::Integer;
pub use text::Text;
