//! Cache key generation using SHA-256 hashes

use sha2::{Digest, Sha256};

/// Generate a deterministic cache key for an endpoint on a given backend,
/// scoped to the credential that fetched it.
///
/// Entries written under one access token are never served under another
/// token or another `--api-url`. Only the digest is stored, never the token.
pub fn cache_key(endpoint: &str, base_url: &str, token: &str) -> String {
    let mut hasher = Sha256::new();

    hasher.update(base_url.trim_end_matches('/').as_bytes());
    hasher.update(b"|");
    hasher.update(endpoint.as_bytes());
    hasher.update(b"|");
    hasher.update(token.as_bytes());

    format!("{:x}", hasher.finalize())
}
