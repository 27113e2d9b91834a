//! Cache Key Module
//!
//! Derives stable, fixed-length cache keys from a request's primary text and
//! its disambiguating context.

use std::fmt;

use serde_json::{json, Value};
use sha2::{Digest, Sha256};

use crate::cache::CacheContext;

// == Cache Key ==
/// SHA-256 digest of a canonicalized request.
///
/// Used purely for cache addressing, not as a security primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey([u8; 32]);

impl CacheKey {
    // == Derive ==
    /// Derives the key for `(primary, context)`.
    ///
    /// The primary text is lowercased and trimmed. An absent context is the
    /// same as an empty one. Context keys are sorted at every nesting level, so
    /// insertion order never changes the result.
    pub fn derive(primary: &str, context: Option<&CacheContext>) -> Self {
        let context = context
            .map(CacheContext::to_value)
            .unwrap_or_else(|| Value::Object(Default::default()));
        let canonical = json!({
            "primary": normalize(primary),
            "context": context,
        });

        Self(digest(&canonical_bytes(&canonical)))
    }

    // == Short ==
    /// First 8 hex characters, for log lines.
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

// == Utility Functions ==
/// Lowercases and trims the primary request text.
pub fn normalize(primary: &str) -> String {
    primary.trim().to_lowercase()
}

/// SHA-256 over an arbitrary byte string.
pub(crate) fn digest(bytes: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hasher.finalize().into()
}

/// Serializes a JSON value with object keys sorted lexicographically at every
/// depth and no insignificant whitespace.
pub fn canonical_bytes(value: &Value) -> Vec<u8> {
    let mut out = Vec::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut Vec<u8>) {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();

            out.push(b'{');
            for (i, key) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_scalar(&Value::String(key.clone()), out);
                out.push(b':');
                write_canonical(&map[key], out);
            }
            out.push(b'}');
        }
        Value::Array(items) => {
            out.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_canonical(item, out);
            }
            out.push(b']');
        }
        scalar => write_scalar(scalar, out),
    }
}

fn write_scalar(value: &Value, out: &mut Vec<u8>) {
    // Display on a scalar Value is its compact JSON text
    out.extend_from_slice(value.to_string().as_bytes());
}
