//! Tool schemas for gateway registration.
//!
//! Schemas are derived from the request and response types with `schemars`
//! and then reduced to the subset of JSON Schema the gateway accepts.

use schemars::{JsonSchema, schema_for};
use serde_json::{Map, Value, json};

use crate::config::ApiConfig;
use crate::models::Greeting;
use crate::operations::OPERATIONS;

/// Builds one schema entry per exposed operation.
///
/// Descriptions carry the API name and version.
#[must_use]
pub fn operation_schemas(config: &ApiConfig) -> Vec<Value> {
    OPERATIONS
        .iter()
        .map(|op| {
            json!({
                "name": op.name,
                "description": format!(
                    "{} ({} {})",
                    op.description, config.name, config.version
                ),
                "inputSchema": (op.input_schema)(),
                "outputSchema": generate_gateway_schema::<Greeting>(),
            })
        })
        .collect()
}

/// Generates a schema for `T` in the format the gateway accepts.
#[must_use]
pub fn generate_gateway_schema<T: JsonSchema>() -> Value {
    let mut schema = Value::from(schema_for!(T));

    if let Some(obj) = schema.as_object_mut() {
        // Not supported by the gateway
        obj.remove("$schema");
        obj.remove("title");

        let defs = obj.remove("$defs").and_then(|d| match d {
            Value::Object(map) => Some(map),
            _ => None,
        });

        if let Some(properties) = obj.get_mut("properties").and_then(Value::as_object_mut) {
            for prop_value in properties.values_mut() {
                if let Some(defs) = &defs {
                    inline_definition(prop_value, defs);
                }
                if let Some(prop_obj) = prop_value.as_object_mut() {
                    prop_obj.remove("format");
                }
            }
        }
    }

    schema
}

/// Replaces a `$ref` property with the definition it points at.
/// Enum definitions collapse to plain strings.
fn inline_definition(prop_value: &mut Value, defs: &Map<String, Value>) {
    let Some(def) = prop_value
        .get("$ref")
        .and_then(Value::as_str)
        .and_then(|path| path.strip_prefix("#/$defs/"))
        .and_then(|name| defs.get(name))
    else {
        return;
    };

    let mut inlined = if def.get("enum").is_some() {
        json!({"type": "string"})
    } else {
        def.clone()
    };

    if let (Some(target), Some(source)) = (inlined.as_object_mut(), prop_value.as_object()) {
        if let Some(description) = source.get("description") {
            target.insert("description".to_string(), description.clone());
        }
        target.remove("title");
    }

    *prop_value = inlined;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(JsonSchema)]
    #[allow(dead_code)]
    enum Mood {
        Happy,
        Grumpy,
    }

    #[derive(JsonSchema)]
    #[allow(dead_code)]
    struct WithEnum {
        /// How the caller feels
        mood: Mood,
    }

    #[test]
    fn test_enum_reference_becomes_string() {
        let schema = generate_gateway_schema::<WithEnum>();
        assert!(schema.get("$defs").is_none());
        assert_eq!(schema["properties"]["mood"]["type"], "string");
        assert!(schema["properties"]["mood"].get("$ref").is_none());
    }

    #[test]
    fn test_top_level_cleanup() {
        let schema = generate_gateway_schema::<Greeting>();
        assert!(schema.get("$schema").is_none());
        assert!(schema.get("title").is_none());
        assert_eq!(schema["type"], "object");
    }
}
