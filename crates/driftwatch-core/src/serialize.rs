//! Stable serialization and content digests for canonical records.
//!
//! The serialized canonical form is the at-rest representation of an
//! artifact and the input to the diff classifier: any two
//! implementations that canonicalize the same raw artifact must
//! produce byte-identical output here. Field order comes from the
//! struct declaration (never from map iteration order), child lists
//! are pre-sorted by the mapper, and the pretty printer is fixed at
//! two-space indentation so line-level diffing is meaningful.
//!
//! ## Digest
//!
//! The content digest is the hex-encoded SHA256 of the canonical
//! bytes: equal digests iff equal canonical bytes.

use sha2::{Digest, Sha256};

use crate::errors::Result;
use crate::model::canonical::CanonicalArtifact;

/// Serialize a canonical record to its stable textual form.
///
/// # Errors
/// Returns `Serialization` if JSON serialization fails; the classifier
/// treats that as a fail-open `Substantive` result.
pub fn canonical_text(artifact: &CanonicalArtifact) -> Result<String> {
    Ok(serde_json::to_string_pretty(artifact)?)
}

/// Serialize a canonical record to its stable byte form.
///
/// # Errors
/// Returns `Serialization` if JSON serialization fails.
pub fn canonical_bytes(artifact: &CanonicalArtifact) -> Result<Vec<u8>> {
    canonical_text(artifact).map(String::into_bytes)
}

/// Compute the content digest of a canonical record.
///
/// # Errors
/// Returns `Serialization` if JSON serialization fails.
pub fn content_digest(artifact: &CanonicalArtifact) -> Result<String> {
    Ok(hash_bytes(&canonical_bytes(artifact)?))
}

/// Hash bytes using SHA256, hex-encoded.
fn hash_bytes(input: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input);
    hex::encode(hasher.finalize())
}
