//! Schema generator for the gateway tool registration.
//!
//! Writes `tool_schema.json` with one entry per exposed operation. Tool
//! schemas are derived from the request and response types of the library.

use std::fs;

use strawberry_example_api::config::ApiConfig;
use strawberry_example_api::schema::operation_schemas;

const OUTPUT_FILE: &str = "tool_schema.json";

fn main() {
    let schemas = operation_schemas(&ApiConfig::from_env());

    let json = serde_json::to_string_pretty(&schemas).unwrap_or_else(|e| {
        eprintln!("Failed to serialize schema: {e}");
        std::process::exit(1);
    });

    fs::write(OUTPUT_FILE, json).unwrap_or_else(|e| {
        eprintln!("Failed to write {OUTPUT_FILE}: {e}");
        std::process::exit(1);
    });

    println!("✅ Generated {OUTPUT_FILE} with {} operation(s)", schemas.len());
}
