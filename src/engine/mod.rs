//! Validation engine: checks JSON documents against JSON Schemas and
//! reports the outcome as data.
//!
//! The engine does not interpret schema keywords itself; it delegates to the
//! `jsonschema` crate and only owns the reporting contract: a check always
//! produces a [`Verdict`], never an error. Errors are reserved for schemas
//! the engine cannot accept at all (non-objects, uncompilable schemas).

mod formatter;

pub use formatter::format_document;

use crate::error::{SchemaCheckError, SchemaCheckResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The result of validating one document against one schema.
///
/// `errors` is empty exactly when `valid` is true. The single-validate path
/// reports the first violation only; exhaustive collection is deliberately
/// not attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl Verdict {
    /// A passing verdict with no errors.
    pub fn passing() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    /// A failing verdict carrying at least one message.
    pub fn failing(errors: Vec<String>) -> Self {
        Self {
            valid: false,
            errors,
        }
    }
}

/// One entry of a batch verdict: the input index plus the per-document
/// verdict, flattened for serialization as `{index, valid, errors}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEntry {
    pub index: usize,
    #[serde(flatten)]
    pub verdict: Verdict,
}

/// Validate a single document against an optional schema.
///
/// An absent schema, or an empty `{}` schema, means "nothing to check" and
/// yields a passing verdict unconditionally. A present schema must be a JSON
/// object and must compile; anything else is a usage error, distinct from a
/// negative verdict.
pub fn validate_one(document: &Value, schema: Option<&Value>) -> SchemaCheckResult<Verdict> {
    let schema = match schema {
        Some(s) => s,
        None => return Ok(Verdict::passing()),
    };

    let schema_obj = schema
        .as_object()
        .ok_or_else(|| SchemaCheckError::usage("schema must be a JSON object"))?;
    if schema_obj.is_empty() {
        // An empty schema admits every document; skip compilation.
        return Ok(Verdict::passing());
    }

    let validator = compile_schema(schema)?;
    Ok(check(&validator, document))
}

/// Validate each document independently against the same schema.
///
/// The schema is required here (unlike [`validate_one`]) and is compiled
/// once. One document's failure does not affect the others; output order
/// matches input order, each entry tagged with its zero-based index.
pub fn validate_batch(schema: &Value, documents: &[Value]) -> SchemaCheckResult<Vec<BatchEntry>> {
    if !schema.is_object() {
        return Err(SchemaCheckError::usage("schema must be a JSON object"));
    }

    let validator = compile_schema(schema)?;
    Ok(documents
        .iter()
        .enumerate()
        .map(|(index, document)| BatchEntry {
            index,
            verdict: check(&validator, document),
        })
        .collect())
}

fn compile_schema(schema: &Value) -> SchemaCheckResult<jsonschema::Validator> {
    jsonschema::validator_for(schema)
        .map_err(|e| SchemaCheckError::usage(format!("invalid schema: {}", e)))
}

/// Run one compiled check, first violation only.
fn check(validator: &jsonschema::Validator, document: &Value) -> Verdict {
    match validator.validate(document) {
        Ok(()) => Verdict::passing(),
        Err(error) => Verdict::failing(vec![error.to_string()]),
    }
}
