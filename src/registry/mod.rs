//! In-memory named schema registry.
//!
//! A process-wide map of name to schema, owned by the server and injected
//! into handlers through `AppState`; never a global. Entries live for the
//! lifetime of the process and are lost on restart. Writes are last-write-
//! wins with no versioning.

use crate::error::{SchemaCheckError, SchemaCheckResult};
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Ephemeral name-to-schema store.
///
/// The lock guarantees atomic replace-or-insert and atomic lookup, so a
/// reader always observes some prior complete write. Concurrent writers
/// racing on the same name resolve in undefined order (last write wins).
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    entries: RwLock<HashMap<String, Value>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store or replace the schema under `name`.
    ///
    /// The schema must be a JSON object (not an array or scalar). Returns
    /// whether an existing entry was replaced.
    pub async fn put(&self, name: &str, schema: Value) -> SchemaCheckResult<bool> {
        if !schema.is_object() {
            return Err(SchemaCheckError::usage(
                "stored schemas must be JSON objects",
            ));
        }

        let mut entries = self.entries.write().await;
        let replaced = entries.insert(name.to_string(), schema).is_some();
        if replaced {
            log::info!("Replaced stored schema '{}'", name);
        } else {
            log::info!("Stored schema '{}'", name);
        }
        Ok(replaced)
    }

    /// Fetch a clone of the schema stored under `name`.
    pub async fn get(&self, name: &str) -> SchemaCheckResult<Value> {
        let entries = self.entries.read().await;
        entries
            .get(name)
            .cloned()
            .ok_or_else(|| SchemaCheckError::not_found(name))
    }

    /// Names of all stored schemas, sorted.
    pub async fn names(&self) -> Vec<String> {
        let entries = self.entries.read().await;
        let mut names: Vec<String> = entries.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of stored schemas.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
