//! Hash helpers for canonical JSON and resolution digests.

use serde::Serialize;
use textfacts_bidi::{Resolution, ResolveOptions};

use crate::canonical_json::to_canonical_json_bytes;
use crate::version::{REPORT_V, unicode_version};

/// Return lowercase hex SHA-256 of bytes.
pub fn sha256_hex(bytes: &[u8]) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Hash canonical JSON bytes using SHA-256 and return lowercase hex.
pub fn sha256_canonical_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let bytes = to_canonical_json_bytes(value)?;
    Ok(sha256_hex(&bytes))
}

/// SHA-256 of a resolution's canonical JSON.
///
/// Identical input and options always give the same digest; a debug trace,
/// when present, is part of the hashed value.
pub fn resolution_digest(resolution: &Resolution) -> Result<String, serde_json::Error> {
    sha256_canonical_json(resolution)
}

/// Deterministic cache key for resolving `text` under `options`:
///   textfacts-bidi|unicode=<x.y.z>|report=v1|options=sha256:<...>|text=sha256:<...>
pub fn cache_key_v1(text: &str, options: &ResolveOptions) -> Result<String, serde_json::Error> {
    let options_hash = sha256_canonical_json(options)?;
    let text_hash = sha256_hex(text.as_bytes());
    Ok(format!(
        "textfacts-bidi|unicode={}|report=v{REPORT_V}|options=sha256:{options_hash}|text=sha256:{text_hash}",
        unicode_version()
    ))
}
