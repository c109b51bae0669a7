//! # SchemaCheck
//!
//! A small HTTP service for working with JSON documents and JSON Schemas.
//! It exposes single and batch validation, JSON pretty-printing, schema
//! inference from an example document, and an ephemeral named-schema store.
//!
//! ## Core Components
//!
//! * `engine` - Validation engine and JSON formatter
//! * `inference` - Schema inference from example documents (optional capability)
//! * `registry` - In-memory named schema registry
//! * `service` - HTTP server, route handlers, and service configuration
//! * `error` - Error types and handling
//!
//! Validation failure is never an error here: checking a document against a
//! schema produces a [`Verdict`](engine::Verdict) either way. Errors are
//! reserved for malformed requests, missing registry entries, and absent
//! capabilities.
//!
//! The registry lives for the lifetime of the process and is not persisted;
//! a restart loses every stored schema.

pub mod engine;
pub mod error;
pub mod inference;
pub mod logging;
pub mod registry;
pub mod service;

// Re-export main types for convenience
pub use engine::{format_document, validate_batch, validate_one, BatchEntry, Verdict};
pub use error::{SchemaCheckError, SchemaCheckResult};
pub use inference::{InferenceConfig, SchemaInferrer};
pub use registry::SchemaRegistry;
pub use service::config::{load_service_config, ServiceConfig};
pub use service::{AppState, SchemaCheckHttpServer};
