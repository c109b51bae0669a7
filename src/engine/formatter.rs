//! JSON pretty-printing with a configurable indent width and optional key
//! sorting.
//!
//! Input key order is preserved when `sort_keys` is off (serde_json's
//! `preserve_order` feature), so re-parsing the output reproduces the input
//! document structurally either way.

use crate::error::{SchemaCheckError, SchemaCheckResult};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

/// Serialize `document` as indented JSON text.
///
/// `indent` is the number of spaces per nesting level; zero still breaks
/// lines, it just omits the padding. With `sort_keys` every object is
/// rewritten with its keys in ascending order before serialization.
pub fn format_document(
    document: &Value,
    indent: usize,
    sort_keys: bool,
) -> SchemaCheckResult<String> {
    let sorted;
    let value = if sort_keys {
        sorted = sort_value(document);
        &sorted
    } else {
        document
    };

    let indent_bytes = vec![b' '; indent];
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(&indent_bytes);
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| SchemaCheckError::Serialization(e.to_string()))?;
    String::from_utf8(out).map_err(|e| SchemaCheckError::Serialization(e.to_string()))
}

/// Rebuild a value with object keys in ascending order, recursively.
fn sort_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut sorted = serde_json::Map::new();
            for key in keys {
                sorted.insert(key.clone(), sort_value(&map[key]));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_value).collect()),
        _ => value.clone(),
    }
}
