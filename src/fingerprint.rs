//! Content fingerprinting
//!
//! A fingerprint is the SHA-256 digest of a document body's UTF-8 bytes,
//! hex-encoded. It is used both for duplicate detection and for deriving
//! collision-resistant filenames, so it must be stable across runs and
//! platforms: no normalization is applied beyond exact byte match.

use sha2::{Digest, Sha256};

/// Number of leading fingerprint characters embedded in stored filenames
pub const FILENAME_PREFIX_LEN: usize = 12;

/// Computes the content fingerprint of a document body
///
/// Deterministic: the same body always produces the same 64-character
/// lowercase hex digest.
pub fn fingerprint(body: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(body.as_bytes());
    hex::encode(hasher.finalize())
}

/// Returns the filename-embedded prefix of a fingerprint
pub fn filename_prefix(fingerprint: &str) -> &str {
    &fingerprint[..FILENAME_PREFIX_LEN.min(fingerprint.len())]
}
