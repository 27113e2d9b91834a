//! Cache Context Module
//!
//! Auxiliary data folded into key derivation next to the primary text, plus
//! the context conventions used by the SQL-generation and response-generation
//! callers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::cache::key::{canonical_bytes, digest};
use crate::error::Result;

/// Context key holding the [`RequestKind`].
pub const KIND_FIELD: &str = "type";

/// Context key holding the backing-data schema fingerprint.
pub const SCHEMA_HASH_FIELD: &str = "schema_hash";

// == Request Kind ==
/// Which upstream call a cached payload belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    /// Natural language to SQL translation
    SqlGeneration,
    /// Query result to prose generation
    ResponseGeneration,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::SqlGeneration => "sql_generation",
            RequestKind::ResponseGeneration => "response_generation",
        }
    }
}

// == Cache Context ==
/// Unordered mapping from string to any JSON value.
///
/// Include anything that makes two otherwise identical requests semantically
/// different. A change in context yields a different key, which is how stale
/// entries are invalidated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheContext(Map<String, Value>);

impl CacheContext {
    // == Constructor ==
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for a natural-language-to-SQL lookup against a given schema.
    pub fn sql_generation(schema_hash: impl Into<String>) -> Self {
        Self::new()
            .with(SCHEMA_HASH_FIELD, schema_hash.into())
            .with(KIND_FIELD, RequestKind::SqlGeneration.as_str())
    }

    /// Context for a result-to-prose lookup.
    pub fn response_generation() -> Self {
        Self::new().with(KIND_FIELD, RequestKind::ResponseGeneration.as_str())
    }

    // == Builders ==
    /// Adds (or replaces) a value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds any serializable value, failing if it has no JSON representation
    /// (for example a map with non-string keys).
    pub fn try_with<T: Serialize + ?Sized>(
        mut self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<Self> {
        self.0.insert(key.into(), serde_json::to_value(value)?);
        Ok(self)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The request kind recorded under [`KIND_FIELD`], if any.
    pub fn kind(&self) -> Option<RequestKind> {
        self.0
            .get(KIND_FIELD)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

impl From<Map<String, Value>> for CacheContext {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

// == Caller Conventions ==
/// Fingerprints a schema description so that schema changes diverge keys.
///
/// Hex SHA-256 over the sorted-key serialization, so two equal schemas always
/// fingerprint the same regardless of how their maps were built.
pub fn schema_fingerprint<T: Serialize + ?Sized>(schema: &T) -> Result<String> {
    let value = serde_json::to_value(schema)?;
    Ok(hex::encode(digest(&canonical_bytes(&value))))
}

/// Primary text for a response-generation lookup.
pub fn response_primary(query: &str, sql: &str, data_summary: &str) -> String {
    format!("{}|{}|{}", query, sql, data_summary)
}
