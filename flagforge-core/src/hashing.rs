//! Flag Fingerprints - SHA-256 over canonical JSON
//!
//! A flag request and its compiled output both reduce to one canonical
//! JSON string (object keys in byte order, no whitespace). Two requests
//! that differ only in key order therefore share a job hash.

use serde::Serialize;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt::Write;

/// Separates the parts of a job fingerprint.
const FIELD_SEPARATOR: &[u8] = b":";

/// Lowercase hex SHA-256 of `data`.
pub fn sha256_hex(data: &[u8]) -> String {
    to_hex(&Sha256::digest(data))
}

fn to_hex(digest: &[u8]) -> String {
    digest
        .iter()
        .fold(String::with_capacity(digest.len() * 2), |mut out, byte| {
            // writing into a String cannot fail
            let _ = write!(out, "{:02x}", byte);
            out
        })
}

/// Canonical JSON of any serializable value.
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(&canonicalize(serde_json::to_value(value)?))
}

/// Rebuilds every object with its keys in byte order, recursing into arrays.
fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(fields) => {
            let ordered: BTreeMap<String, Value> = fields
                .into_iter()
                .map(|(key, field)| (key, canonicalize(field)))
                .collect();
            Value::Object(ordered.into_iter().collect::<Map<_, _>>())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
        scalar => scalar,
    }
}

/// Fingerprint of a compiled flag. The caller leaves `manifestHash` empty.
pub fn compute_manifest_hash<T: Serialize>(manifest: &T) -> Result<String, serde_json::Error> {
    Ok(sha256_hex(canonical_json(manifest)?.as_bytes()))
}

/// Fingerprint of one compile job: `name:canonical_request:engine_version`.
///
/// The same request compiled by the same engine always yields the same
/// job hash, whatever the key order of the incoming payload.
pub fn compute_job_hash(
    name: &str,
    request: &impl Serialize,
    engine_version: &str,
) -> Result<String, serde_json::Error> {
    let canonical_request = canonical_json(request)?;
    let mut hasher = Sha256::new();
    for part in [name.as_bytes(), canonical_request.as_bytes()] {
        hasher.update(part);
        hasher.update(FIELD_SEPARATOR);
    }
    hasher.update(engine_version.as_bytes());
    Ok(to_hex(&hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_canonical_json_sorted() {
        let obj = json!({"width": 30, "bars": {"orientation": "vertical", "count": 3}, "height": 20});
        let canonical = canonical_json(&obj).unwrap();
        assert_eq!(
            canonical,
            r#"{"bars":{"count":3,"orientation":"vertical"},"height":20,"width":30}"#
        );
    }

    #[test]
    fn test_sha256_known_value() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_canonical_json_sorts_nested_arrays_of_objects() {
        let obj = json!({"stars": [{"radius": 2, "centerX": 6}], "name": "usa"});
        assert_eq!(
            canonical_json(&obj).unwrap(),
            r#"{"name":"usa","stars":[{"centerX":6,"radius":2}]}"#
        );
    }

    #[test]
    fn test_job_hash_matches_joined_fields() {
        let request = json!({"width": 30, "height": 20});
        let joined = format!("italy:{}:1.0.0", canonical_json(&request).unwrap());
        assert_eq!(
            compute_job_hash("italy", &request, "1.0.0").unwrap(),
            sha256_hex(joined.as_bytes())
        );
    }

    #[test]
    fn test_job_hash_ignores_key_order() {
        let a = json!({"width": 30, "height": 20});
        let b = json!({"height": 20, "width": 30});
        assert_eq!(
            compute_job_hash("italy", &a, "1.0.0").unwrap(),
            compute_job_hash("italy", &b, "1.0.0").unwrap()
        );
        assert_ne!(
            compute_job_hash("italy", &a, "1.0.0").unwrap(),
            compute_job_hash("france", &a, "1.0.0").unwrap()
        );
    }
}
