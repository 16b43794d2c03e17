//! YAML decode/encode behaviour of the lenient scalars

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use strval::{Boolean, Float, Integer, Kind, MemorySink, Text, with_sink};

#[derive(Debug, Deserialize, Serialize)]
struct Server {
    enabled: Boolean,
    port: Integer,
    #[serde(rename = "retryDelay")]
    retry_delay: Float,
}

#[test]
fn scalars_encode_as_plain_yaml_scalars() {
    assert_eq!(serde_yaml::to_string(&Boolean::new(true)).unwrap(), "true\n");
    assert_eq!(serde_yaml::to_string(&Integer::new(42)).unwrap(), "42\n");
    assert_eq!(serde_yaml::to_string(&Float::new(3.25)).unwrap(), "3.25\n");
}

#[test]
fn native_scalars_decode() {
    let enabled: Boolean = serde_yaml::from_str("true").unwrap();
    let port: Integer = serde_yaml::from_str("8080").unwrap();
    let delay: Float = serde_yaml::from_str("2.5").unwrap();
    assert!(enabled.value());
    assert_eq!(port.value(), 8080);
    assert_eq!(delay.value(), 2.5);
}

#[test]
fn quoted_scalars_decode() {
    let enabled: Boolean = serde_yaml::from_str(r#""false""#).unwrap();
    let port: Integer = serde_yaml::from_str(r#""123""#).unwrap();
    let delay: Float = serde_yaml::from_str("'1.5'").unwrap();
    assert!(!enabled.value());
    assert_eq!(port.value(), 123);
    assert_eq!(delay.value(), 1.5);
}

#[test]
fn plain_boolean_words_decode() {
    // YAML 1.2 reads `yes`/`n` as strings; the boolean grammar picks them up.
    let yes: Boolean = serde_yaml::from_str("yes").unwrap();
    let no: Boolean = serde_yaml::from_str("n").unwrap();
    assert!(yes.value());
    assert!(!no.value());
}

#[test]
fn record_decodes_from_strings_and_encodes_natively() {
    let yaml = "enabled: \"true\"\nport: \"8080\"\nretryDelay: \"3.5\"\n";
    let server: Server = serde_yaml::from_str(yaml).unwrap();
    assert!(server.enabled.value());
    assert_eq!(server.port.value(), 8080);
    assert_eq!(server.retry_delay.value(), 3.5);

    assert_eq!(
        serde_yaml::to_string(&server).unwrap(),
        "enabled: true\nport: 8080\nretryDelay: 3.5\n"
    );
}

#[test]
fn malformed_fields_fall_back_and_report() {
    let sink = Arc::new(MemorySink::new());
    let yaml = "enabled: maybe\nport: eighty\nretryDelay: [1, 2]\n";
    let server: Server = with_sink(sink.clone(), || serde_yaml::from_str(yaml)).unwrap();

    assert!(!server.enabled.value());
    assert_eq!(server.port.value(), 0);
    assert_eq!(server.retry_delay.value(), 0.0);

    let kinds: Vec<Kind> = sink.take().iter().map(|d| d.kind).collect();
    assert_eq!(kinds, vec![Kind::Boolean, Kind::Integer, Kind::Float]);
}

#[test]
fn tagged_field_falls_back_without_losing_the_record() {
    let sink = Arc::new(MemorySink::new());
    let yaml = "enabled: \"yes\"\nport: !custom 8080\nretryDelay: '1.5'\n";
    let server: Server = with_sink(sink.clone(), || serde_yaml::from_str(yaml)).unwrap();

    assert!(server.enabled.value());
    assert_eq!(server.port.value(), 0);
    assert_eq!(server.retry_delay.value(), 1.5);

    let records = sink.take();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind, Kind::Integer);
    assert_eq!(records[0].found(), "enum");
}

#[test]
fn yaml_null_is_the_zero_value() {
    let sink = Arc::new(MemorySink::new());
    let port: Integer = with_sink(sink.clone(), || serde_yaml::from_str("~")).unwrap();
    assert_eq!(port.value(), 0);
    assert!(sink.is_empty());
}

#[test]
fn text_from_yaml_numbers_stays_a_string() {
    #[derive(Deserialize, Serialize)]
    struct Example {
        test: Text,
    }

    let example: Example = serde_yaml::from_str("test: 1\n").unwrap();
    assert_eq!(example.test.as_str(), "1");

    let encoded = serde_yaml::to_string(&example).unwrap();
    let reread: serde_yaml::Value = serde_yaml::from_str(&encoded).unwrap();
    assert!(reread["test"].is_string());
    assert_eq!(reread["test"].as_str(), Some("1"));
}
