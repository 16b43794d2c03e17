//! Uniform access to the wrapped primitive

use crate::scalar::{Boolean, Float, Integer, Text};

/// Read the wrapped primitive of a lenient scalar
///
/// Lets code written once accept any of the wrappers:
///
/// ```rust
/// use strval::{Boolean, GetValue, Integer};
///
/// fn unwrap<T, V: GetValue<T>>(v: &V) -> T {
///     v.get_value()
/// }
///
/// assert_eq!(unwrap(&Integer::new(42)) + 10, 52);
/// assert!(unwrap(&Boolean::new(true)));
/// ```
pub trait GetValue<T> {
    fn get_value(&self) -> T;
}

impl GetValue<bool> for Boolean {
    fn get_value(&self) -> bool {
        self.value()
    }
}

impl GetValue<i64> for Integer {
    fn get_value(&self) -> i64 {
        self.value()
    }
}

impl GetValue<f64> for Float {
    fn get_value(&self) -> f64 {
        self.value()
    }
}

impl GetValue<String> for Text {
    fn get_value(&self) -> String {
        self.as_str().to_string()
    }
}
