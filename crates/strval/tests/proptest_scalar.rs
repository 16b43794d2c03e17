//! Property-based tests for the lenient scalars
//!
//! These check the invariants that must hold for every input, not just the
//! handful of examples in the JSON/YAML suites.

use std::sync::Arc;

use proptest::prelude::*;
use strval::parse::parse_bool;
use strval::{Boolean, CoerceError, Float, Integer, MemorySink, Text, with_sink};

const TRUTHY: &[&str] = &["true", "yes", "y", "1"];
const FALSY: &[&str] = &["false", "no", "n", "0"];

/// Apply a per-character case mask and pad with whitespace.
fn disguise(word: &str, upper: &[bool], left: usize, right: usize) -> String {
    let body: String = word
        .chars()
        .zip(upper.iter().cycle())
        .map(|(c, &up)| if up { c.to_ascii_uppercase() } else { c })
        .collect();
    format!("{}{}{}", " ".repeat(left), body, "\t".repeat(right))
}

// ===== BOOLEAN PROPERTIES =====

proptest! {
    #[test]
    fn boolean_native_round_trip(b in any::<bool>()) {
        let json = serde_json::to_string(&Boolean::new(b)).unwrap();
        let back: Boolean = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back.value(), b);
    }

    #[test]
    fn truthy_words_in_any_disguise(
        word in prop::sample::select(TRUTHY),
        upper in prop::collection::vec(any::<bool>(), 1..6),
        left in 0usize..3,
        right in 0usize..3,
    ) {
        prop_assert_eq!(parse_bool(&disguise(word, &upper, left, right)), Ok(true));
    }

    #[test]
    fn falsy_words_in_any_disguise(
        word in prop::sample::select(FALSY),
        upper in prop::collection::vec(any::<bool>(), 1..6),
        left in 0usize..3,
        right in 0usize..3,
    ) {
        prop_assert_eq!(parse_bool(&disguise(word, &upper, left, right)), Ok(false));
    }

    #[test]
    fn other_words_are_rejected_with_normalized_input(s in "[a-z]{2,8}") {
        prop_assume!(!TRUTHY.contains(&s.as_str()) && !FALSY.contains(&s.as_str()));
        let padded = format!("  {}  ", s.to_uppercase());
        prop_assert_eq!(parse_bool(&padded), Err(CoerceError::InvalidBool { input: s }));
    }
}

// ===== INTEGER PROPERTIES =====

proptest! {
    #[test]
    fn integer_native_round_trip(x in any::<i64>()) {
        let json = serde_json::to_string(&Integer::new(x)).unwrap();
        let back: Integer = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back.value(), x);
    }

    #[test]
    fn integer_from_quoted_text(x in any::<i64>()) {
        let back: Integer = serde_json::from_str(&format!("\"{x}\"")).unwrap();
        prop_assert_eq!(back.value(), x);
    }

    #[test]
    fn integer_garbage_is_zero_and_reported(s in "[a-z]{1,10}") {
        let sink = Arc::new(MemorySink::new());
        let back: Integer = with_sink(sink.clone(), || {
            serde_json::from_str(&format!("\"{s}\""))
        }).unwrap();
        prop_assert_eq!(back.value(), 0);
        prop_assert_eq!(sink.len(), 1);
    }
}

// ===== FLOAT PROPERTIES =====

proptest! {
    #[test]
    fn float_native_round_trip(x in -1e15f64..1e15f64) {
        let json = serde_json::to_string(&Float::new(x)).unwrap();
        let back: Float = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back.value(), x);
    }

    #[test]
    fn float_from_quoted_text(x in -1e15f64..1e15f64) {
        let back: Float = serde_json::from_str(&format!("\"{x}\"")).unwrap();
        prop_assert_eq!(back.value(), x);
    }
}

// ===== TEXT PROPERTIES =====

proptest! {
    #[test]
    fn text_renders_integers_exactly(x in any::<i64>()) {
        let text: Text = serde_json::from_str(&x.to_string()).unwrap();
        prop_assert_eq!(text.as_str(), x.to_string());
    }

    #[test]
    fn text_rendering_of_floats_parses_back(x in -1e15f64..1e15f64) {
        let json = serde_json::to_string(&x).unwrap();
        let text: Text = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(text.as_str().parse::<f64>().unwrap(), x);
    }

    #[test]
    fn text_rendering_of_extreme_floats_parses_back(x in prop::num::f64::NORMAL) {
        let json = serde_json::to_string(&x).unwrap();
        let text: Text = serde_json::from_str(&json).unwrap();
        prop_assert!(text.len() <= 25, "{} rendered as {}", x, text);
        prop_assert_eq!(text.as_str().parse::<f64>().unwrap(), x);
    }

    #[test]
    fn text_is_kind_preserving(s in "\\PC*") {
        let json = serde_json::to_string(&Text::new(s.clone())).unwrap();
        let back: Text = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back.as_str(), s.as_str());
    }
}
