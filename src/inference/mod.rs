//! Schema inference: derive a minimal JSON Schema from an example document.
//!
//! Inference is an optional capability. The server constructs a
//! [`SchemaInferrer`] only when `inference.enabled` is set in the service
//! configuration; when it is absent, the generate-schema operation fails with
//! a typed capability-unavailable error instead of guessing a default schema.

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

const SCHEMA_URI: &str = "http://json-schema.org/draft-07/schema#";

/// Configuration for the schema-inference capability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Whether inference is enabled for this process.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Structural schema inference over JSON values.
///
/// Produces the minimal schema matching the shape of an example: scalar
/// types map to their `type` keyword, objects list `properties` and mark
/// every observed key as `required`, arrays describe their `items` by
/// merging the schemas of the observed elements.
#[derive(Debug, Default)]
pub struct SchemaInferrer;

impl SchemaInferrer {
    pub fn new() -> Self {
        Self
    }

    /// Infer a schema for `example`. Infallible: every JSON value has a
    /// shape.
    pub fn infer(&self, example: &Value) -> Value {
        let mut schema = infer_value(example);
        if let Some(obj) = schema.as_object_mut() {
            let mut with_header = Map::new();
            with_header.insert("$schema".to_string(), Value::String(SCHEMA_URI.to_string()));
            with_header.append(obj);
            schema = Value::Object(with_header);
        }
        debug!("Inferred schema: {}", schema);
        schema
    }
}

fn infer_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({"type": "null"}),
        Value::Bool(_) => json!({"type": "boolean"}),
        Value::Number(n) => {
            if n.is_f64() {
                json!({"type": "number"})
            } else {
                json!({"type": "integer"})
            }
        }
        Value::String(_) => json!({"type": "string"}),
        Value::Array(items) => infer_array(items),
        Value::Object(map) => infer_object(map),
    }
}

fn infer_object(map: &Map<String, Value>) -> Value {
    if map.is_empty() {
        return json!({"type": "object"});
    }

    let mut properties = Map::new();
    let mut required: Vec<&String> = map.keys().collect();
    required.sort();
    for key in &required {
        properties.insert((*key).clone(), infer_value(&map[*key]));
    }

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

fn infer_array(items: &[Value]) -> Value {
    if items.is_empty() {
        return json!({"type": "array"});
    }

    let mut item_schemas: Vec<Value> = Vec::new();
    for item in items {
        let schema = infer_value(item);
        if !item_schemas.contains(&schema) {
            item_schemas.push(schema);
        }
    }

    let items_schema = if item_schemas.len() == 1 {
        item_schemas.remove(0)
    } else if item_schemas.iter().all(is_type_only) {
        // Heterogeneous scalars collapse to a type union.
        let mut types: Vec<Value> = item_schemas
            .iter()
            .map(|s| s["type"].clone())
            .collect();
        types.sort_by(|a, b| a.as_str().cmp(&b.as_str()));
        json!({"type": types})
    } else {
        json!({"anyOf": item_schemas})
    };

    json!({"type": "array", "items": items_schema})
}

fn is_type_only(schema: &Value) -> bool {
    schema
        .as_object()
        .is_some_and(|m| m.len() == 1 && m.get("type").is_some_and(Value::is_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::validate_one;
    use serde_json::json;

    #[test]
    fn scalars_map_to_their_types() {
        let inferrer = SchemaInferrer::new();
        assert_eq!(inferrer.infer(&json!(null))["type"], "null");
        assert_eq!(inferrer.infer(&json!(true))["type"], "boolean");
        assert_eq!(inferrer.infer(&json!(3))["type"], "integer");
        assert_eq!(inferrer.infer(&json!(3.5))["type"], "number");
        assert_eq!(inferrer.infer(&json!("s"))["type"], "string");
    }

    #[test]
    fn objects_require_observed_keys() {
        let schema = SchemaInferrer::new().infer(&json!({"b": 1, "a": "x"}));
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["a", "b"]));
        assert_eq!(schema["properties"]["a"]["type"], "string");
        assert_eq!(schema["properties"]["b"]["type"], "integer");
        assert_eq!(schema["$schema"], SCHEMA_URI);
    }

    #[test]
    fn homogeneous_arrays_get_single_item_schema() {
        let schema = SchemaInferrer::new().infer(&json!([1, 2, 3]));
        assert_eq!(schema["items"], json!({"type": "integer"}));
    }

    #[test]
    fn mixed_scalar_arrays_get_a_type_union() {
        let schema = SchemaInferrer::new().infer(&json!([1, "two"]));
        assert_eq!(schema["items"]["type"], json!(["integer", "string"]));
    }

    #[test]
    fn empty_containers_stay_minimal() {
        let inferrer = SchemaInferrer::new();
        assert_eq!(inferrer.infer(&json!([]))["items"], Value::Null);
        assert!(inferrer.infer(&json!({})).get("properties").is_none());
    }

    #[test]
    fn inferred_schema_accepts_its_example() {
        let examples = [
            json!({"name": "ada", "age": 36, "tags": ["x", "y"]}),
            json!([{"id": 1}, {"id": 2}]),
            json!({"nested": {"deep": [1.5, 2.5]}}),
            json!("plain string"),
        ];
        let inferrer = SchemaInferrer::new();
        for example in &examples {
            let schema = inferrer.infer(example);
            let verdict = validate_one(example, Some(&schema)).unwrap();
            assert!(verdict.valid, "schema {} rejected {}", schema, example);
        }
    }
}
