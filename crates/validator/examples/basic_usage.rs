//! Basic usage example for shapeguard-validator
//!
//! Run with `RUST_LOG=shapeguard_validator=debug` to see validation traces.

use serde_json::json;
use shapeguard_validator::prelude::*;
use tracing_subscriber::EnvFilter;

fn signup_schema() -> ObjectSchema {
    object([
        ("username", string().min_length(3).max_length(20).into()),
        ("email", string().email().into()),
        ("age", number().integer().min(13).optional().into()),
        (
            "plan",
            union([literal("free").into(), literal("pro").into()])
                .default_value("free")
                .into(),
        ),
        (
            "tags",
            array(string().transform(|tag| {
                Ok(Value::from(tag.as_str().unwrap_or_default().to_lowercase()))
            }))
            .max_items(5)
            .unique()
            .optional()
            .into(),
        ),
    ])
}

fn report(label: &str, input: serde_json::Value) {
    let result = signup_schema().validate(&Value::from(input));
    if result.is_valid() {
        let value = result.into_value().map(serde_json::Value::from);
        println!("✓ {label}: {}", value.unwrap_or_default());
    } else {
        println!("✗ {label}:");
        for message in result.messages() {
            println!("    - {message}");
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    report(
        "valid signup",
        json!({"username": "alice", "email": "alice@example.com", "tags": ["Rust", "CLI"]}),
    );

    report(
        "invalid signup",
        json!({"username": "al", "email": "not-an-email", "age": 9.5, "admin": true}),
    );
}
