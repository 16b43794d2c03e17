//! Reading string-typed configuration with the lenient scalars
//!
//! Run with `RUST_LOG=strval=error cargo run -p strval --example config` to
//! see the fallback events for the malformed document.

use serde::{Deserialize, Serialize};
use strval::{Boolean, Float, Integer, Text};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonConfig {
    enabled: Boolean,
    max_connections: Integer,
    timeout_seconds: Float,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct YamlConfig {
    enabled: Boolean,
    port: Integer,
    retry_delay: Float,
}

#[derive(Debug, Deserialize)]
struct Flag {
    value: Boolean,
}

#[derive(Debug, Deserialize, Serialize)]
struct Label {
    name: Text,
    version: Text,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== JSON ===");
    json_config()?;
    boolean_words()?;

    println!("\n=== YAML ===");
    yaml_config()?;

    println!("\n=== Text ===");
    text_labels()?;

    println!("\n=== Malformed ===");
    malformed()?;

    Ok(())
}

fn json_config() -> Result<(), Box<dyn std::error::Error>> {
    let input = r#"{
        "enabled": "true",
        "maxConnections": "100",
        "timeoutSeconds": "3.5"
    }"#;

    let config: JsonConfig = serde_json::from_str(input)?;
    println!("enabled: {}", config.enabled.value());
    println!("maxConnections: {}", config.max_connections.value());
    println!("timeoutSeconds: {}", config.timeout_seconds.value());
    println!("encoded: {}", serde_json::to_string(&config)?);
    Ok(())
}

fn boolean_words() -> Result<(), Box<dyn std::error::Error>> {
    println!("\n--- boolean words ---");
    for input in [
        r#"{"value": "true"}"#,
        r#"{"value": "YES"}"#,
        r#"{"value": "y"}"#,
        r#"{"value": "1"}"#,
        r#"{"value": "False"}"#,
        r#"{"value": "no"}"#,
        r#"{"value": true}"#,
    ] {
        let flag: Flag = serde_json::from_str(input)?;
        println!("{input} -> {}", flag.value);
    }
    Ok(())
}

fn yaml_config() -> Result<(), Box<dyn std::error::Error>> {
    let input = "enabled: \"false\"\nport: \"8080\"\nretryDelay: \"2.5\"\n";

    let config: YamlConfig = serde_yaml::from_str(input)?;
    println!("enabled: {}", config.enabled.value());
    println!("port: {}", config.port.value());
    println!("retryDelay: {}", config.retry_delay.value());
    print!("encoded:\n{}", serde_yaml::to_string(&config)?);
    Ok(())
}

fn text_labels() -> Result<(), Box<dyn std::error::Error>> {
    let label: Label = serde_json::from_str(r#"{"name": "api", "version": 2}"#)?;
    println!("name: {}, version: {}", label.name, label.version);
    println!("encoded: {}", serde_json::to_string(&label)?);
    Ok(())
}

fn malformed() -> Result<(), Box<dyn std::error::Error>> {
    // Each bad field resolves to zero and is reported through tracing.
    let input = r#"{"enabled": "maybe", "maxConnections": "lots", "timeoutSeconds": [1]}"#;
    let config: JsonConfig = serde_json::from_str(input)?;
    println!("encoded: {}", serde_json::to_string(&config)?);
    Ok(())
}
