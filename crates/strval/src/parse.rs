//! Text parsers used when a scalar arrives in string form

use crate::error::{CoerceError, CoerceResult};

/// Parse a boolean word.
///
/// The input is trimmed and lower-cased, then matched against a closed table:
///
/// | result | words |
/// |---|---|
/// | `true` | `true`, `yes`, `y`, `1` |
/// | `false` | `false`, `no`, `n`, `0` |
///
/// Anything else is rejected with the normalized text.
///
/// ```rust
/// use strval::parse::parse_bool;
///
/// assert_eq!(parse_bool(" Yes ").unwrap(), true);
/// assert_eq!(parse_bool("0").unwrap(), false);
/// assert!(parse_bool("on").is_err());
/// ```
pub fn parse_bool(input: &str) -> CoerceResult<bool> {
    let normalized = input.trim().to_lowercase();
    match normalized.as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        _ => Err(CoerceError::InvalidBool { input: normalized }),
    }
}

/// Parse a base-10 `i64`. Surrounding whitespace is not accepted.
pub fn parse_int(input: &str) -> CoerceResult<i64> {
    input
        .parse::<i64>()
        .map_err(|source| CoerceError::InvalidInteger {
            input: input.to_string(),
            source,
        })
}

/// Parse a decimal or exponential `f64`.
pub fn parse_float(input: &str) -> CoerceResult<f64> {
    input
        .parse::<f64>()
        .map_err(|source| CoerceError::InvalidFloat {
            input: input.to_string(),
            source,
        })
}

/// Magnitudes outside `[1e-6, 1e21)` switch to exponent form, as JSON
/// encoders do.
const EXP_LOWER: f64 = 1e-6;
const EXP_UPPER: f64 = 1e21;

/// Render a float the way [`Text`](crate::Text) stores numbers: the shortest
/// digits that round-trip, with no fractional part for integral values, and
/// exponent notation for very large or very small magnitudes.
pub(crate) fn format_float(value: f64) -> String {
    let magnitude = value.abs();
    if value.is_finite() && magnitude != 0.0 && !(EXP_LOWER..EXP_UPPER).contains(&magnitude) {
        format!("{value:e}")
    } else {
        value.to_string()
    }
}
