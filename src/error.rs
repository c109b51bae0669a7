//! Error types for the SchemaCheck service.
//!
//! A failed schema check is not an error: it is a normal negative
//! [`Verdict`](crate::engine::Verdict). The variants here cover everything
//! else: malformed requests, missing registry entries, absent capabilities,
//! and startup problems.

use std::io;

/// Errors surfaced by the SchemaCheck service.
#[derive(Debug, thiserror::Error)]
pub enum SchemaCheckError {
    /// The caller sent a request the operation cannot accept, e.g. a schema
    /// that is not a JSON object or one that fails to compile.
    #[error("Usage error: {0}")]
    UsageError(String),

    /// A registry lookup missed.
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// An optional capability (schema inference) is not available in this
    /// process.
    #[error("Capability unavailable: {0}")]
    CapabilityUnavailable(String),

    /// A document could not be serialized to JSON text.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Service configuration problems (bad config file, bind failure).
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO-related errors (config file access, permissions, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl SchemaCheckError {
    /// Create a usage error with context
    pub fn usage<S: Into<String>>(msg: S) -> Self {
        Self::UsageError(msg.into())
    }

    /// Create a not-found error for a registry name
    pub fn not_found<S: Into<String>>(name: S) -> Self {
        Self::NotFound(name.into())
    }
}

impl From<serde_json::Error> for SchemaCheckError {
    fn from(error: serde_json::Error) -> Self {
        SchemaCheckError::Serialization(error.to_string())
    }
}

/// Result alias used throughout the crate.
pub type SchemaCheckResult<T> = Result<T, SchemaCheckError>;
